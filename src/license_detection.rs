//! # License Detection Module
//!
//! This module contains the interfaces and implementations for license detection algorithms.
//! It allows for easily replacing the license detection algorithm without modifying the processor.

/// Trait for license detectors.
///
/// Implementations of this trait are responsible for locating an existing
/// license block at the start of a file's content.
pub trait LicenseDetector: Send + Sync {
  /// Finds the start of a leading license block.
  ///
  /// # Parameters
  ///
  /// * `content` - The raw file content
  ///
  /// # Returns
  ///
  /// The byte offset where the license block's body starts, or `None` if the
  /// content does not begin with a license block.
  fn find_license_start(&self, content: &[u8]) -> Option<usize>;

  /// Checks if the content already starts with a license block.
  fn has_license(&self, content: &[u8]) -> bool {
    self.find_license_start(content).is_some()
  }
}

/// Detects a `/*` block comment that opens the file.
///
/// Only spaces, tabs and newlines may precede the comment. The first other
/// byte decides the outcome: a `/` immediately followed by `*` is a license
/// block, anything else is not. A block comment that follows any code or prose
/// is never reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockCommentDetector;

impl BlockCommentDetector {
  /// Creates a new BlockCommentDetector.
  pub const fn new() -> Self {
    BlockCommentDetector
  }
}

impl LicenseDetector for BlockCommentDetector {
  /// Returns the offset of the `*` in the opening `/*`.
  fn find_license_start(&self, content: &[u8]) -> Option<usize> {
    let first = content.iter().position(|b| !matches!(b, b' ' | b'\t' | b'\n'))?;
    match content.get(first..first + 2) {
      Some(b"/*") => Some(first + 1),
      _ => None,
    }
  }
}
