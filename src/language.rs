//! # Language Module
//!
//! This module classifies source files by extension into the comment families
//! liccor knows how to write a notice for. Files outside the registry are out
//! of scope and are never touched.

use std::fmt;
use std::path::Path;

/// Comment family of a recognized source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  /// Go: `/* ... */` with the notice indented by three spaces
  Go,
  /// C, C++, Java, JavaScript, TypeScript: `/* ... */` with ` * ` line prefixes
  CLike,
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Go => write!(f, "go"),
      Self::CLike => write!(f, "c-like"),
    }
  }
}

/// Extensions rendered with the Go notice layout.
pub const GO_EXTENSIONS: &[&str] = &["go"];

/// Extensions rendered with the C-like notice layout.
pub const C_LIKE_EXTENSIONS: &[&str] = &["c", "cpp", "cxx", "h", "hpp", "java", "js", "ts", "tsx"];

/// Classifies a file by the text after the last `.` of its name.
///
/// Matching is exact and case-sensitive, so `main.GO` is out of scope.
///
/// # Returns
///
/// The file's [`Language`], or `None` when the file has no extension or the
/// extension is not registered.
pub fn classify(path: &Path) -> Option<Language> {
  let file_name = path.file_name()?.to_str()?;
  let (_, extension) = file_name.rsplit_once('.')?;
  classify_extension(extension)
}

/// Classifies a bare extension (without the leading dot).
pub fn classify_extension(extension: &str) -> Option<Language> {
  if GO_EXTENSIONS.contains(&extension) {
    Some(Language::Go)
  } else if C_LIKE_EXTENSIONS.contains(&extension) {
    Some(Language::CLike)
  } else {
    None
  }
}
