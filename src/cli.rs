use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Scala code lists from ISO reference data")]
pub struct Cli {
    /// Project root every layout path is resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Optional JSON layout overriding input / output paths
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Copyright year stamped into the generated files (defaults to now)
    #[arg(long)]
    pub year: Option<i32>,
}
