//! # Diff Module
//!
//! This module renders the change a correction would make, so check mode can
//! show the new notice against the old one before anything is written.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for notice corrections.
///
/// This struct handles:
/// - Generating line diffs between original and corrected content
/// - Displaying diffs to stderr
/// - Appending diffs to a file
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that collects every diff of the run
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  /// Creates a new DiffManager with the specified configuration.
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the diff file so a run starts from an empty file.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      std::fs::write(path, "").with_context(|| format!("Failed to create diff file: {}", path.display()))?;
    }
    Ok(())
  }

  /// Renders the diff between `original` and `corrected` for `path`.
  ///
  /// Content that is not valid UTF-8 is shown lossily.
  pub fn render(path: &Path, original: &[u8], corrected: &[u8]) -> String {
    let original = String::from_utf8_lossy(original);
    let corrected = String::from_utf8_lossy(corrected);
    let diff = TextDiff::from_lines(original.as_ref(), corrected.as_ref());

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
      if change.missing_newline() {
        rendered.push('\n');
      }
    }
    rendered
  }

  /// Displays and/or saves the diff for one file.
  pub fn display_diff(&self, path: &Path, original: &[u8], corrected: &[u8]) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let rendered = Self::render(path, original, corrected);

    if self.show_diff {
      eprintln!("{}", rendered);
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      writeln!(file, "{}", rendered).with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
