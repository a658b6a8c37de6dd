use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("cannot read source {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{dataset} line {line}: {reason}")]
    Format {
        dataset: &'static str,
        line: usize,
        reason: String,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("template `{template}` left placeholder %{placeholder}% unexpanded")]
    Template {
        template: &'static str,
        placeholder: String,
    },
    #[error("bad layout{}: {reason}", describe(path))]
    Config {
        path: Option<PathBuf>,
        reason: String,
    },
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, GenError>;
