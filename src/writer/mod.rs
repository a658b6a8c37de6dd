//! Puts the generated sources on disk.
pub mod scala;
