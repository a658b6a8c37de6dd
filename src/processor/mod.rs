//! Turns parsed datasets into fully expanded Scala sources.
//!
//! Nothing here touches the filesystem; the result is handed to `writer`
//! only once every dataset has been formatted.
pub mod batch;
pub mod literal;
pub mod template;

use crate::config::Layout;
use crate::error::Result;
use crate::model::{Datasets, GeneratedFile, GeneratedSources};
use crate::parser::{ISO639, ISO3166, ISO15924};
use batch::Part;
use template::{CODELISTS, ISO639_PART};

/// Runs every formatting pass and returns a read-only structure for writers.
pub fn run(data: &Datasets, layout: &Layout, year: i32) -> Result<GeneratedSources> {
    layout.validate()?;
    let year = year.to_string();

    let languages: Vec<String> = data.languages.iter().map(literal::language).collect();
    println!(">> Adding {} entries for {ISO639}", languages.len());
    let parts = batch::chunk(languages, layout.chunk_size);
    let iso639 = batch::aggregate(&parts);
    let part_files = parts
        .iter()
        .map(|part| part_file(part, layout, &year))
        .collect::<Result<Vec<_>>>()?;

    let scripts: Vec<String> = data.scripts.iter().map(literal::script).collect();
    println!(">> Adding {} entries for {ISO15924}", scripts.len());

    let countries: Vec<String> = data.countries.iter().map(literal::country).collect();
    println!(">> Adding {} entries for {ISO3166}", countries.len());

    let contents = CODELISTS.expand(&[
        ("YEAR", year.as_str()),
        ("ISO639", iso639.as_str()),
        ("ISO15924", literal::join(&scripts).as_str()),
        ("ISO3166", literal::join(&countries).as_str()),
    ])?;

    Ok(GeneratedSources {
        parts: part_files,
        codelists: GeneratedFile {
            path: layout.codelists_output.clone(),
            contents,
            entries: scripts.len() + countries.len(),
        },
    })
}

fn part_file(part: &Part<String>, layout: &Layout, year: &str) -> Result<GeneratedFile> {
    let contents = ISO639_PART.expand(&[
        ("YEAR", year),
        ("NUM", part.index.to_string().as_str()),
        ("CODELIST", literal::join(&part.records).as_str()),
    ])?;
    Ok(GeneratedFile {
        path: layout.part_path(part.index),
        contents,
        entries: part.records.len(),
    })
}
