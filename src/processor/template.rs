//! Fixed Scala file templates with `%NAME%` placeholders.
//!
//! Expansion walks the template once and never rescans substituted text,
//! so record data containing `%...%` is emitted verbatim.

use crate::error::{GenError, Result};

pub struct Template {
    pub name: &'static str,
    text: &'static str,
}

pub const CODELISTS: Template = Template {
    name: "CodeLists",
    text: r#"
/*
 * Part of GDL language.
 * Copyright (C) %YEAR% Global Digital Library
 *
 * See LICENSE
 */

package io.digitallibrary.language.model

object CodeLists {

  sealed abstract class Iso639 {
    def id: String
    def part2b: Option[String]
    def part2t: Option[String]
    def part1: Option[String]
    def scope: Option[String]
    def languageType: Option[String]
    def refName: String
    def comment: Option[String]
  }

  sealed abstract class Iso15924 {
    def code: String
    def no: Int
    def englishName: String
    def frenchName: String
    def pva: Option[String]
    def date: String
  }

  sealed abstract class Iso3166 {
    def code: String
    def name: String
  }

  case class Iso639Val(id: String, part2b: Option[String], part2t: Option[String], part1: Option[String], scope: Option[String], languageType: Option[String], refName: String, comment: Option[String]) extends Iso639
  case class Iso15924Val(code: String, no: Int, englishName: String, frenchName: String, pva: Option[String], date: String) extends Iso15924
  case class Iso3166Val(code: String, name: String) extends Iso3166

  val iso15924Definitions = Seq(
    %ISO15924%
  )

  val iso3166Definitions = Seq(
    %ISO3166%
  )

  val iso639Definitions: Seq[Iso639Val] = %ISO639%
}
"#,
};

pub const ISO639_PART: Template = Template {
    name: "Iso639List",
    text: r#"
/*
 * Part of GDL language.
 * Copyright (C) %YEAR% Global Digital Library
 *
 * See LICENSE
 */

package io.digitallibrary.language.model

import io.digitallibrary.language.model.CodeLists.Iso639Val

object Iso639List_%NUM% {
  val items = Seq(
    %CODELIST%
  )
}
"#,
};

impl Template {
    /// Replace every placeholder with its binding.
    ///
    /// A placeholder without a binding is an error; unused bindings are not.
    pub fn expand(&self, bindings: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let key = after.find('%').map(|end| &after[..end]);
            match key.filter(|k| is_placeholder(k)) {
                Some(key) => {
                    let value = bindings
                        .iter()
                        .find(|(name, _)| *name == key)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| GenError::Template {
                            template: self.name,
                            placeholder: key.to_string(),
                        })?;
                    out.push_str(value);
                    rest = &after[key.len() + 1..];
                }
                None => {
                    out.push('%');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn is_placeholder(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: Template = Template {
        name: "greeting",
        text: "Hello %WHO%, 100% sure in %YEAR%",
    };

    #[test]
    fn substitutes_each_placeholder() {
        let out = GREETING
            .expand(&[("WHO", "world"), ("YEAR", "2026")])
            .unwrap();
        assert_eq!(out, "Hello world, 100% sure in 2026");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = GREETING
            .expand(&[("WHO", "%YEAR%"), ("YEAR", "2026")])
            .unwrap();
        assert_eq!(out, "Hello %YEAR%, 100% sure in 2026");
    }

    #[test]
    fn missing_binding_is_reported() {
        let err = GREETING.expand(&[("WHO", "world")]).unwrap_err();
        assert!(
            matches!(&err, GenError::Template { placeholder, .. } if placeholder == "YEAR"),
            "got {err}"
        );
    }

    #[test]
    fn part_template_fully_expands() {
        let out = ISO639_PART
            .expand(&[("YEAR", "2026"), ("NUM", "4"), ("CODELIST", "X")])
            .unwrap();
        assert!(out.contains("object Iso639List_4 {"));
        assert!(out.contains("Copyright (C) 2026"));
        assert!(out.contains("Seq(\n    X\n  )"));
        assert!(!out.contains('%'));
    }
}
