pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;

use crate::config::Layout;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let layout = match &args.config {
        Some(path) => Layout::load(path)?,
        None => Layout::default(),
    }
    .rooted(&args.root);
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());

    generate(&layout, year)
}

/// Regenerate every output named by `layout`, stamped with `year`.
///
/// All sources are read and formatted before the first file is written.
pub fn generate(layout: &Layout, year: i32) -> anyhow::Result<()> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let datasets = parser::load(layout).with_context(|| "Reading reference data")?;

    // 2. ── Process ────────────────────────────────────────────────────
    let sources = processor::run(&datasets, layout, year)
        .with_context(|| "Formatting Scala code lists")?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::scala::emit(&sources).with_context(|| "Writing Scala sources")?;

    Ok(())
}
