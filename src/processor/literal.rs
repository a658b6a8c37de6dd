//! Scala literal expressions for single records.

use crate::model::{CountrySubdivisionCode, LanguageCode, ScriptCode};

/// Separator between records inside a generated `Seq(...)`.
pub const RECORD_SEPARATOR: &str = ",\n    ";

/// Double-quoted Scala string literal.
///
/// Only `\` and `"` are escaped; everything else is copied through.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// `Some("..")` for present values, `None` otherwise.
pub fn optional(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("Some({})", quote(v)),
        None => "None".to_string(),
    }
}

pub fn language(lang: &LanguageCode) -> String {
    format!(
        "Iso639Val({}, {}, {}, {}, {}, {}, {}, {})",
        quote(&lang.id),
        optional(lang.part2b.as_deref()),
        optional(lang.part2t.as_deref()),
        optional(lang.part1.as_deref()),
        optional(lang.scope.as_deref()),
        optional(lang.language_type.as_deref()),
        quote(&lang.ref_name),
        optional(lang.comment.as_deref()),
    )
}

pub fn script(script: &ScriptCode) -> String {
    format!(
        "Iso15924Val({}, {}, {}, {}, {}, {})",
        quote(&script.code),
        script.no,
        quote(&script.english_name),
        quote(&script.french_name),
        optional(script.pva.as_deref()),
        quote(&script.date),
    )
}

pub fn country(country: &CountrySubdivisionCode) -> String {
    format!("Iso3166Val({}, {})", quote(&country.code), quote(&country.name))
}

/// Join already formatted records the way they sit inside `Seq(...)`.
pub fn join(records: &[String]) -> String {
    records.join(RECORD_SEPARATOR)
}
