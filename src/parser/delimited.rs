//! Line-oriented delimited text reader shared by all three datasets.
//
//  Dialect (the one the ISO files are published in):
//
//      row     ::= field (DELIM field)*
//      field   ::= '"' ( [^"] | '""' )* '"' [^DELIM]*   quoted
//                | [^DELIM]*                            verbatim
//
//  Unquoted fields are never trimmed. Records never span lines, so a
//  quoted field must close on the line it opens. A blank line before the
//  last record is a one-field row; trailing blank lines are ignored.

use crate::error::{GenError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<const N: usize> {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: [String; N],
}

/// Lines of `text` up to the last non-blank one, with 1-based line numbers.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim_end_matches(['\r', '\n'])
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

/// Drop `#` comments and surrounding whitespace; lines left empty vanish.
pub fn skip_comments(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();
        (!data.is_empty()).then_some((i + 1, data))
    })
}

/// Split every line on `delim`, requiring exactly `N` fields per row.
pub fn read_rows<'a, const N: usize>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    dataset: &'static str,
    delim: char,
) -> Result<Vec<Row<N>>> {
    let mut rows = Vec::new();
    for (line, text) in lines {
        let fields = split_fields(text, delim).map_err(|reason| GenError::Format {
            dataset,
            line,
            reason,
        })?;
        let fields: [String; N] = fields.try_into().map_err(|f: Vec<String>| GenError::Format {
            dataset,
            line,
            reason: format!("expected {N} columns, found {}", f.len()),
        })?;
        rows.push(Row { line, fields });
    }
    Ok(rows)
}

pub fn split_fields(line: &str, delim: char) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&'"') {
            chars.next();
            loop {
                match chars.next() {
                    Some('"') if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    Some('"') => break,
                    Some(c) => field.push(c),
                    None => return Err("unterminated quoted field".into()),
                }
            }
        }

        // verbatim run (or the tail after a closing quote)
        let mut at_delim = false;
        for c in chars.by_ref() {
            if c == delim {
                at_delim = true;
                break;
            }
            field.push(c);
        }

        fields.push(field);
        if !at_delim {
            return Ok(fields);
        }
    }
}
