//! Write the generated Scala sources, part files first.

use crate::error::{GenError, Result};
use crate::model::{GeneratedFile, GeneratedSources};
use crate::parser::ISO639;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn emit(sources: &GeneratedSources) -> Result<()> {
    for part in &sources.parts {
        write_file(part)?;
        println!(
            ">> Added {} entries in file {} for {ISO639}",
            part.entries,
            part.path.display()
        );
    }

    write_file(&sources.codelists)?;
    println!(
        ">> Wrote {} entries to {}",
        sources.codelists.entries,
        sources.codelists.path.display()
    );
    Ok(())
}

/// Overwrite `file.path` with its contents. The parent directory must exist.
pub fn write_file(file: &GeneratedFile) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&file.path)?);
        out.write_all(file.contents.as_bytes())?;
        out.flush()
    };
    write().map_err(|source| GenError::Write {
        path: file.path.clone(),
        source,
    })
}
