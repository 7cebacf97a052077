//! # Processor Module
//!
//! This module contains the core functionality for walking the configured
//! source roots and correcting the notice at the top of every source file.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - The byte transformation that swaps the header
//! - [`file_collector`] - Root expansion and directory traversal
//!
//! The [`Processor`] struct is the main entry point for all file operations,
//! orchestrating the submodules to provide a cohesive API.

mod content_transformer;
mod file_collector;
mod file_io;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::{ContentTransformer, strip_license};
pub use file_collector::{FileCollector, SourceFile, VCS_DIR, expand_root, normalize_relative_path};
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::diff::DiffManager;
use crate::file_filter::{FileFilter, PassthroughFilter};
use crate::language::Language;
use crate::license_detection::{BlockCommentDetector, LicenseDetector};
use crate::output;
use crate::report::{Correction, FileOutcome, FileReport, RunSummary};
use crate::templates::FormattedHeaders;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Notice rendered for each comment family
  pub headers: FormattedHeaders,

  /// Files to leave alone
  pub file_filter: Box<dyn FileFilter>,

  /// Whether to only report pending corrections without writing
  pub check_only: bool,

  // Optional components
  pub diff_manager: Option<DiffManager>,
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(headers)
  /// }
  /// ```
  pub fn new(headers: FormattedHeaders) -> Self {
    Self {
      headers,
      file_filter: Box::new(PassthroughFilter),
      check_only: false,
      diff_manager: None,
      license_detector: None,
    }
  }
}

/// Processor for correcting notices in source files.
///
/// The `Processor` is responsible for:
/// - Walking each configured root for source files
/// - Skipping files matched by the ignore filter before they are read
/// - Replacing the leading block comment with the formatted notice
/// - Writing files back only when their content changes
/// - Showing diffs in check mode
/// - Folding every per-file outcome into a [`RunSummary`]
pub struct Processor {
  /// Notice rendered for each comment family
  headers: FormattedHeaders,

  /// File filter consulted before a file is read
  file_filter: Box<dyn FileFilter>,

  /// Whether to only check without modifying files
  check_only: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,

  /// Content transformer that swaps the header
  content_transformer: ContentTransformer,

  /// File collector for root expansion and directory traversal
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the diff output file cannot be created.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let diff_manager = config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None));
    diff_manager.init()?;

    let license_detector = config
      .license_detector
      .unwrap_or_else(|| Box::new(BlockCommentDetector::new()));

    Ok(Self {
      headers: config.headers,
      file_filter: config.file_filter,
      check_only: config.check_only,
      diff_manager,
      content_transformer: ContentTransformer::new(license_detector),
      file_collector: FileCollector::new(),
    })
  }

  /// Processes every configured root.
  ///
  /// Roots are handled in order. A root whose traversal fails is reported and
  /// abandoned at the point of failure; the remaining roots still run. Per-file
  /// failures never stop the run. A file reached through more than one root
  /// is only corrected the first time.
  ///
  /// # Parameters
  ///
  /// * `roots` - Directories, files, or glob patterns to scan
  ///
  /// # Returns
  ///
  /// The counts of every per-file outcome.
  pub fn process(&self, roots: &[String]) -> RunSummary {
    let start_time = Instant::now();

    let mut visited = HashSet::new();
    let mut summary = roots.iter().fold(RunSummary::default(), |summary, root| {
      self.process_root(root, summary, &mut visited)
    });

    summary.processing_time = start_time.elapsed();
    debug!(
      "Processed {} files in {}ms",
      summary.files_seen(),
      summary.processing_time.as_millis()
    );
    summary
  }

  fn process_root(&self, root: &str, mut summary: RunSummary, visited: &mut HashSet<PathBuf>) -> RunSummary {
    debug!("Processing source root: {}", root);

    let paths = match expand_root(root) {
      Ok(paths) => paths,
      Err(e) => {
        output::print_root_error(root, &e);
        return summary.record_failed_root();
      }
    };

    for path in paths {
      for entry in self.file_collector.walk(&path) {
        match entry {
          Ok(file) => {
            if !visited.insert(normalize_relative_path(&file.path)) {
              trace!("Skipping: {} (already visited)", file.path.display());
              continue;
            }
            let report = self.process_file(&file);
            print_report(&report);
            summary = summary.record(&report.outcome);
          }
          Err(e) => {
            output::print_root_error(root, &e);
            return summary.record_failed_root();
          }
        }
      }
    }

    summary
  }

  /// Corrects one file found during traversal, capturing any failure in the
  /// report instead of returning it.
  pub fn process_file(&self, file: &SourceFile) -> FileReport {
    let outcome = if self.is_ignored(&file.path) {
      FileOutcome::Done(Correction::Ignored)
    } else {
      match FileIO::read_full_content(&file.path) {
        Ok(content) => match self.apply(&file.path, file.language, &content) {
          Ok(correction) => FileOutcome::Done(correction),
          Err(e) => FileOutcome::WriteFailed(format!("{:#}", e)),
        },
        Err(e) => FileOutcome::ReadFailed(format!("{:#}", e)),
      }
    };

    FileReport {
      path: file.path.clone(),
      outcome,
    }
  }

  /// Ensures the file at `path` starts with the notice for `language`.
  ///
  /// The ignore filter is consulted first; an ignored file is never read. The
  /// file is only written when its corrected content differs from what is
  /// on disk, and never in check mode.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or the corrected content
  /// cannot be written back.
  pub fn correct(&self, path: &Path, language: Language) -> Result<Correction> {
    if self.is_ignored(path) {
      return Ok(Correction::Ignored);
    }

    let content = FileIO::read_full_content(path)?;
    self.apply(path, language, &content)
  }

  fn is_ignored(&self, path: &Path) -> bool {
    let result = self.file_filter.should_process(path);
    if !result.should_process {
      trace!(
        "Skipping: {} ({})",
        path.display(),
        result.reason.as_deref().unwrap_or("Unknown reason")
      );
    }
    !result.should_process
  }

  fn apply(&self, path: &Path, language: Language, content: &[u8]) -> Result<Correction> {
    let header = self.headers.for_language(language);
    let corrected = self.content_transformer.correct_content(content, header);

    if corrected == content {
      trace!("Up to date: {}", path.display());
      return Ok(Correction::Unchanged);
    }

    if self.check_only {
      if let Err(e) = self.diff_manager.display_diff(path, content, &corrected) {
        warn!("Failed to display diff for {}: {:#}", path.display(), e);
      }
      return Ok(Correction::WouldCorrect);
    }

    FileIO::write_file(path, &corrected)?;
    Ok(Correction::Corrected)
  }
}

fn print_report(report: &FileReport) {
  match &report.outcome {
    FileOutcome::Done(Correction::Corrected) => output::print_correction(&report.path, true),
    FileOutcome::Done(Correction::WouldCorrect) => output::print_would_correct(&report.path),
    FileOutcome::Done(Correction::Unchanged | Correction::Ignored) => {}
    FileOutcome::WriteFailed(error) => {
      output::print_correction(&report.path, false);
      output::print_write_error(&report.path, error);
    }
    FileOutcome::ReadFailed(error) => output::print_read_error(&report.path, error),
  }
}
