//! # Ignore Module
//!
//! This module contains functionality for deciding which source files must be
//! left alone even though their extension is recognized.
//!
//! It supports:
//! - The `.gitignore` file of the working directory (gitignore-style pattern
//!   matching)
//! - An `ignore` block from the liccor config file, which replaces the
//!   `.gitignore` rules when present
//! - Command-line ignore patterns

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::processor::normalize_relative_path;
use crate::verbose_log;

/// Manager for handling ignore patterns from various sources.
///
/// This struct combines ignore patterns from:
/// - Command-line arguments
/// - A `.gitignore` file, or the `ignore` block of the liccor config
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use liccor::ignore::IgnoreManager;
///
/// # fn main() -> anyhow::Result<()> {
/// // Create a new ignore manager with command-line ignore patterns
/// let mut manager = IgnoreManager::new(vec!["third_party/".to_string()])?;
///
/// // Load the .gitignore of the working directory
/// manager.load_gitignore_file(Path::new("."), Path::new(".gitignore"))?;
///
/// // Check if a file should be ignored
/// let should_ignore = manager.is_ignored(Path::new("third_party/zlib/zlib.h"));
/// assert!(should_ignore);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IgnoreManager {
  /// Pre-compiled glob set from command-line arguments for zero-allocation
  /// matching
  cli_glob_set: GlobSet,

  /// Gitignore matcher from .gitignore or the config's ignore block
  gitignore: Option<Gitignore>,

  /// Directory the gitignore patterns are relative to
  root_dir: Option<PathBuf>,
}

impl IgnoreManager {
  /// Creates a new ignore manager with the specified command-line ignore
  /// patterns.
  ///
  /// # Parameters
  ///
  /// * `cli_patterns` - Glob patterns from command-line arguments
  ///
  /// # Returns
  ///
  /// A new `IgnoreManager` instance or an error if initialization fails.
  ///
  /// # Errors
  ///
  /// Returns an error if any of the command-line patterns are invalid.
  pub fn new(cli_patterns: Vec<String>) -> Result<Self> {
    // Build a GlobSet from command-line patterns for zero-allocation matching
    let mut builder = GlobSetBuilder::new();

    let add_pattern = |b: &mut GlobSetBuilder, p: &str| -> Result<()> {
      b.add(Glob::new(p).with_context(|| format!("Invalid glob pattern: {}", p))?);
      Ok(())
    };

    for pattern in cli_patterns {
      let pattern = pattern.replace('\\', "/");
      let pattern = pattern.strip_prefix("./").unwrap_or(&pattern);

      if let Some(dir_pattern) = pattern.strip_suffix('/') {
        // Directory: everything below it, wherever it sits
        add_pattern(&mut builder, &format!("{}/**", dir_pattern))?;
        add_pattern(&mut builder, &format!("**/{}/**", dir_pattern))?;
      } else if !pattern.contains(['*', '?', '[']) {
        // Plain name: the file itself or a directory of that name
        add_pattern(&mut builder, pattern)?;
        add_pattern(&mut builder, &format!("**/{}", pattern))?;
        add_pattern(&mut builder, &format!("{}/**", pattern))?;
        add_pattern(&mut builder, &format!("**/{}/**", pattern))?;
      } else {
        add_pattern(&mut builder, pattern)?;
        if !pattern.starts_with("**/") {
          add_pattern(&mut builder, &format!("**/{}", pattern))?;
        }
      }
    }

    let cli_glob_set = builder.build().with_context(|| "Failed to build glob set")?;

    Ok(Self {
      cli_glob_set,
      gitignore: None,
      root_dir: None,
    })
  }

  /// Loads a gitignore-style file whose patterns are relative to `root_dir`.
  ///
  /// A missing file is not an error; the manager is left unchanged.
  ///
  /// # Errors
  ///
  /// Returns an error if the file exists but cannot be read or contains an
  /// invalid pattern.
  pub fn load_gitignore_file(&mut self, root_dir: &Path, path: &Path) -> Result<()> {
    if !path.is_file() {
      verbose_log!("No ignore file at {}", path.display());
      return Ok(());
    }

    verbose_log!("Loading ignore file: {}", path.display());
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    self.set_patterns(root_dir, &content, Some(path))
  }

  /// Replaces the gitignore rules with `patterns`, one per line, relative to
  /// `root_dir`.
  ///
  /// # Errors
  ///
  /// Returns an error if a line is not a valid gitignore pattern.
  pub fn load_patterns(&mut self, root_dir: &Path, patterns: &str) -> Result<()> {
    verbose_log!("Loading ignore patterns from config");
    self.set_patterns(root_dir, patterns, None)
  }

  fn set_patterns(&mut self, root_dir: &Path, patterns: &str, source: Option<&Path>) -> Result<()> {
    let mut builder = GitignoreBuilder::new(root_dir);
    let source_name = source.map_or_else(|| "config".to_string(), |p| p.display().to_string());

    for line in patterns.lines() {
      if !line.trim().is_empty() && !line.trim().starts_with('#') {
        builder
          .add_line(source.map(Path::to_path_buf), line)
          .with_context(|| format!("Failed to add ignore pattern from {}: {}", source_name, line))?;
      }
    }

    let gitignore = builder.build().with_context(|| "Failed to build gitignore matcher")?;

    self.gitignore = Some(gitignore);
    self.root_dir = Some(root_dir.to_path_buf());

    Ok(())
  }

  /// Checks if a file should be ignored based on all ignore patterns.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to check, relative to the working directory
  ///   or absolute
  ///
  /// # Returns
  ///
  /// `true` if the file should be ignored, `false` otherwise.
  pub fn is_ignored(&self, path: &Path) -> bool {
    if self.is_ignored_by_cli_patterns(path) {
      return true;
    }

    if let Some(ref gitignore) = self.gitignore
      && let Some(ref root_dir) = self.root_dir
    {
      let path = if path.is_absolute() {
        Cow::Borrowed(path)
      } else {
        Cow::Owned(root_dir.join(normalize_relative_path(path)))
      };
      // Gitignore matching requires a path below its root
      if let Ok(rel_path) = path.strip_prefix(root_dir) {
        let match_result = gitignore.matched_path_or_any_parents(rel_path, false);
        if match_result.is_ignore() {
          verbose_log!("Skipping: {} (matches ignore pattern)", rel_path.display());
          return true;
        }
      }
    }

    false
  }

  /// Checks if a file should be ignored based on command-line ignore patterns.
  ///
  /// This uses a pre-compiled GlobSet for zero-allocation matching.
  fn is_ignored_by_cli_patterns(&self, path: &Path) -> bool {
    if self.cli_glob_set.is_empty() {
      return false;
    }

    if self.cli_glob_set.is_match(normalize_relative_path(path)) {
      verbose_log!("Skipping: {} (matches CLI ignore pattern)", path.display());
      return true;
    }
    false
  }
}
