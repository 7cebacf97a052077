//! # Content Transformer Module
//!
//! This module provides the pure byte transformation behind a correction:
//! locating the old leading license block, dropping it, and putting the new
//! header in its place.

use tracing::warn;

use crate::license_detection::LicenseDetector;

/// Returns the content that follows the license block opened at `start`.
///
/// `start` is the offset of the `*` in the opening `/*`, as reported by a
/// [`LicenseDetector`]. The scan for the closing `*/` begins at `start`
/// itself, and one newline directly after the terminator is dropped with it.
///
/// # Returns
///
/// The remaining content, or `None` if the block is never closed.
pub fn strip_license(content: &[u8], start: usize) -> Option<&[u8]> {
  let tail = content.get(start..)?;
  let close = tail.windows(2).position(|pair| pair == b"*/")?;
  let mut end = start + close + 2;
  if content.get(end) == Some(&b'\n') {
    end += 1;
  }
  content.get(end..)
}

/// Content transformation utilities for license processing.
///
/// The `ContentTransformer` handles:
/// - Detecting the leading license block with the configured detector
/// - Removing that block together with any whitespace in front of it
/// - Prepending the formatted header
pub struct ContentTransformer {
  license_detector: Box<dyn LicenseDetector>,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer around a license detector.
  pub fn new(license_detector: Box<dyn LicenseDetector>) -> Self {
    Self { license_detector }
  }

  /// Checks if the content starts with a license block.
  pub fn has_license(&self, content: &[u8]) -> bool {
    self.license_detector.has_license(content)
  }

  /// Returns the content with its leading license block removed.
  ///
  /// Content without a license block is returned unchanged. A block that is
  /// opened but never closed is treated the same way, so nothing is lost.
  pub fn body<'a>(&self, content: &'a [u8]) -> &'a [u8] {
    let Some(start) = self.license_detector.find_license_start(content) else {
      return content;
    };

    match strip_license(content, start) {
      Some(rest) => rest,
      None => {
        warn!("Leading comment opened at byte {} is never closed; keeping it", start - 1);
        content
      }
    }
  }

  /// Builds the corrected file content.
  ///
  /// # Parameters
  ///
  /// * `content` - The current file content
  /// * `header` - The formatted header for the file's language
  ///
  /// # Returns
  ///
  /// `header` followed by the content's body.
  pub fn correct_content(&self, content: &[u8], header: &str) -> Vec<u8> {
    let body = self.body(content);
    let mut corrected = Vec::with_capacity(header.len() + body.len());
    corrected.extend_from_slice(header.as_bytes());
    corrected.extend_from_slice(body);
    corrected
  }
}
