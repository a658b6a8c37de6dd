pub mod delimited;

use std::fs;
use std::path::Path;

use crate::config::Layout;
use crate::error::{GenError, Result};
use crate::model::{CountrySubdivisionCode, Datasets, LanguageCode, ScriptCode};
use delimited::{numbered_lines, read_rows, skip_comments};

pub const ISO639: &str = "ISO-639";
pub const ISO15924: &str = "ISO-15924";
pub const ISO3166: &str = "ISO-3166";

/// Read all three sources named by `layout`.
///
/// Languages are read first, then scripts, then countries; the first
/// failure aborts the whole load.
pub fn load(layout: &Layout) -> Result<Datasets> {
    let languages = parse_languages(&read_source(&layout.languages)?)?;
    println!("Read {} ISO-639 rows", languages.len());

    let scripts = parse_scripts(&read_source(&layout.scripts)?)?;
    println!("Read {} ISO-15924 rows", scripts.len());

    let countries = parse_countries(&read_source(&layout.countries)?)?;
    println!("Read {} ISO-3166 rows", countries.len());

    Ok(Datasets {
        languages,
        scripts,
        countries,
    })
}

/// Whole file as text, without a leading byte-order mark.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| GenError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Tab-separated, 8 columns, no header.
pub fn parse_languages(text: &str) -> Result<Vec<LanguageCode>> {
    let rows = read_rows::<8>(numbered_lines(text), ISO639, '\t')?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let [id, part2b, part2t, part1, scope, language_type, ref_name, comment] =
                row.fields;
            LanguageCode {
                id,
                part2b: optional(part2b),
                part2t: optional(part2t),
                part1: optional(part1),
                scope: optional(scope),
                language_type: optional(language_type),
                ref_name,
                comment: optional(comment),
            }
        })
        .collect())
}

/// Semicolon-separated, 6 columns, `#` comments allowed anywhere.
pub fn parse_scripts(text: &str) -> Result<Vec<ScriptCode>> {
    let rows = read_rows::<6>(skip_comments(text), ISO15924, ';')?;
    rows.into_iter()
        .map(|row| {
            let line = row.line;
            let [code, no, english_name, french_name, pva, date] = row.fields;
            let no = no.trim().parse::<u32>().map_err(|e| GenError::Format {
                dataset: ISO15924,
                line,
                reason: format!("bad script number `{no}`: {e}"),
            })?;
            Ok(ScriptCode {
                code,
                no,
                english_name,
                french_name,
                pva: optional(pva),
                date,
            })
        })
        .collect()
}

/// Comma-separated, 2 columns, first line is a header.
///
/// The code is taken from the second column and the name from the first,
/// the order the downstream tables have always been generated in.
pub fn parse_countries(text: &str) -> Result<Vec<CountrySubdivisionCode>> {
    let rows = read_rows::<2>(numbered_lines(text).skip(1), ISO3166, ',')?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let [first, second] = row.fields;
            CountrySubdivisionCode {
                code: second,
                name: first,
            }
        })
        .collect())
}

fn optional(field: String) -> Option<String> {
    (!field.is_empty()).then_some(field)
}
