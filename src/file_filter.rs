//! # File Filter Module
//!
//! This module contains the predicate the processor consults before it reads
//! a candidate file. Anything that can say "leave this file alone" plugs in
//! through [`FileFilter`].

use std::path::Path;

use crate::ignore::IgnoreManager;

/// Result of a file filtering operation.
#[derive(Debug, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path to the file to check
  ///
  /// # Returns
  ///
  /// A `FilterResult` indicating whether the file should be processed and why
  /// not if applicable.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that excludes files matching ignore patterns.
pub struct IgnoreFilter {
  ignore_manager: IgnoreManager,
}

impl IgnoreFilter {
  /// Creates a new IgnoreFilter with the given IgnoreManager.
  pub const fn new(ignore_manager: IgnoreManager) -> Self {
    Self { ignore_manager }
  }
}

impl FileFilter for IgnoreFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.ignore_manager.is_ignored(path) {
      FilterResult::skip("Matches ignore pattern")
    } else {
      FilterResult::process()
    }
  }
}

/// Passthrough filter that allows all files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughFilter;

impl FileFilter for PassthroughFilter {
  fn should_process(&self, _path: &Path) -> FilterResult {
    FilterResult::process()
  }
}
