//! Where the generator reads from and writes to.
//!
//! Every path is relative to the project root given on the command line.
//! A JSON file may override any subset of the fields, e.g.
//!
//! ```json
//! { "languages": "data/iso-639-3.tab", "chunk_size": 500 }
//! ```

use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// Upper bound of ISO-639 records per generated part file.
pub const CHUNK_SIZE: usize = 800;

/// Token in the file name of `part_output` replaced by the 1-based part index.
pub const PART_TOKEN: &str = "%NUM%";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub languages: PathBuf,
    pub scripts: PathBuf,
    pub countries: PathBuf,
    pub codelists_output: PathBuf,
    pub part_output: PathBuf,
    pub chunk_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            languages: "generator/iso-639-3_20170202.tab".into(),
            scripts: "generator/iso15924-utf8-20170726.txt".into(),
            countries: "generator/iso-3166-2.csv".into(),
            codelists_output: "src/main/scala/io/digitallibrary/language/model/CodeLists.scala"
                .into(),
            part_output: "src/main/scala/io/digitallibrary/language/model/Iso639List_%NUM%.scala"
                .into(),
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl Layout {
    /// Read a layout from a JSON file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| GenError::Config {
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|reason| GenError::Config {
            path: Some(path.to_path_buf()),
            reason,
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        let layout: Layout = serde_json::from_str(json).map_err(|e| e.to_string())?;
        layout.check()?;
        Ok(layout)
    }

    /// Reject layouts no generator run can honour.
    pub fn validate(&self) -> Result<()> {
        self.check()
            .map_err(|reason| GenError::Config { path: None, reason })
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.chunk_size == 0 {
            return Err("`chunk_size` must be at least 1".into());
        }
        if !self.part_file_name().is_some_and(|name| name.contains(PART_TOKEN)) {
            return Err(format!(
                "file name of `part_output` must contain {PART_TOKEN}"
            ));
        }
        Ok(())
    }

    fn part_file_name(&self) -> Option<&str> {
        self.part_output.file_name().and_then(OsStr::to_str)
    }

    /// Resolve every relative path against `root`.
    pub fn rooted(self, root: &Path) -> Self {
        Self {
            languages: root.join(self.languages),
            scripts: root.join(self.scripts),
            countries: root.join(self.countries),
            codelists_output: root.join(self.codelists_output),
            part_output: root.join(self.part_output),
            chunk_size: self.chunk_size,
        }
    }

    /// Only the file name is rewritten, so the directory part may be any
    /// OS path. Call on a validated layout.
    pub fn part_path(&self, index: usize) -> PathBuf {
        let name = self.part_file_name().unwrap_or(PART_TOKEN);
        self.part_output
            .with_file_name(name.replace(PART_TOKEN, &index.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let layout = Layout::from_json(r#"{ "chunk_size": 2 }"#).unwrap();
        assert_eq!(layout.chunk_size, 2);
        assert_eq!(layout.languages, Layout::default().languages);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = Layout::from_json(r#"{ "chunk_size": 0 }"#).unwrap_err();
        assert!(err.contains("chunk_size"), "got: {err}");
    }

    #[test]
    fn part_output_without_token_is_rejected() {
        let err = Layout::from_json(r#"{ "part_output": "x.scala" }"#).unwrap_err();
        assert!(err.contains("%NUM%"), "got: {err}");
    }

    #[test]
    fn token_in_directory_only_is_rejected() {
        let err = Layout::from_json(r#"{ "part_output": "out_%NUM%/x.scala" }"#).unwrap_err();
        assert!(err.contains("part_output"), "got: {err}");
    }

    #[test]
    fn missing_layout_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");

        let err = Layout::load(&path).unwrap_err();
        assert!(
            matches!(&err, GenError::Config { path: Some(p), .. } if *p == path),
            "got {err}"
        );
    }

    #[test]
    fn layout_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{ "chunk_size": 10 }"#).unwrap();

        assert_eq!(Layout::load(&path).unwrap().chunk_size, 10);
    }

    #[test]
    fn struct_literal_with_zero_chunk_size_fails_validation() {
        let layout = Layout {
            chunk_size: 0,
            ..Layout::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(GenError::Config { path: None, .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_root_is_kept_intact() {
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new(OsStr::from_bytes(b"/proj/\xff"));
        let layout = Layout::default().rooted(root);
        layout.validate().unwrap();

        let part = layout.part_path(2);
        assert!(part.starts_with(root));
        assert_eq!(part.file_name(), Some(OsStr::new("Iso639List_2.scala")));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Layout::from_json(r#"{ "language": "x" }"#).is_err());
    }

    #[test]
    fn part_path_substitutes_index() {
        let layout = Layout::default().rooted(Path::new("/proj"));
        assert_eq!(
            layout.part_path(3),
            PathBuf::from("/proj/src/main/scala/io/digitallibrary/language/model/Iso639List_3.scala")
        );
    }
}
