use std::path::PathBuf;

/// One row of the ISO-639-3 code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode {
    pub id: String,
    pub part2b: Option<String>,
    pub part2t: Option<String>,
    pub part1: Option<String>,
    pub scope: Option<String>,
    pub language_type: Option<String>,
    pub ref_name: String,
    pub comment: Option<String>,
}

/// One row of the ISO-15924 script table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCode {
    pub code: String,
    pub no: u32,
    pub english_name: String,
    pub french_name: String,
    /// Unicode property value alias, absent for most private-use codes.
    pub pva: Option<String>,
    pub date: String,
}

/// One row of the ISO-3166-2 subdivision table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySubdivisionCode {
    pub code: String,
    pub name: String,
}

/// Everything read from the three sources, in source order.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub languages: Vec<LanguageCode>,
    pub scripts: Vec<ScriptCode>,
    pub countries: Vec<CountrySubdivisionCode>,
}

/// A fully expanded output file, not yet on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
    /// Number of records emitted into this file, reported once written.
    pub entries: usize,
}

/// Output of the processing stage, handed to `writer`.
#[derive(Debug, Clone)]
pub struct GeneratedSources {
    /// ISO-639 part files, ordered by their 1-based index.
    pub parts: Vec<GeneratedFile>,
    pub codelists: GeneratedFile,
}
