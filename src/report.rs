//! # Report Module
//!
//! This module describes what happened to each file during a run and folds
//! those per-file outcomes into the summary that decides the final status
//! line and the exit code.

use std::path::PathBuf;
use std::time::Duration;

/// What a single correction did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
  /// The ignore filter matched; the file was not read
  Ignored,
  /// The file already starts with the current notice
  Unchanged,
  /// The file was rewritten with the current notice
  Corrected,
  /// Check mode: the file would have been rewritten
  WouldCorrect,
}

/// Outcome of processing one file, including failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
  /// The correction completed
  Done(Correction),
  /// The file could not be read; it was left untouched
  ReadFailed(String),
  /// The corrected content could not be written back
  WriteFailed(String),
}

/// Information about a processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  /// Path to the file, as found during traversal
  pub path: PathBuf,
  /// What happened to it
  pub outcome: FileOutcome,
}

/// Counts of per-file outcomes for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Files rewritten with the current notice
  pub corrected: usize,
  /// Files that would be rewritten (check mode)
  pub would_correct: usize,
  /// Files already up to date
  pub unchanged: usize,
  /// Files skipped by the ignore filter
  pub ignored: usize,
  /// Files that could not be read
  pub read_failures: usize,
  /// Files whose rewrite failed
  pub write_failures: usize,
  /// Roots whose traversal failed and were skipped
  pub failed_roots: usize,
  /// Wall-clock time of the run
  pub processing_time: Duration,
}

impl RunSummary {
  /// Adds one file's outcome to the summary.
  pub fn record(mut self, outcome: &FileOutcome) -> Self {
    match outcome {
      FileOutcome::Done(Correction::Ignored) => self.ignored += 1,
      FileOutcome::Done(Correction::Unchanged) => self.unchanged += 1,
      FileOutcome::Done(Correction::Corrected) => self.corrected += 1,
      FileOutcome::Done(Correction::WouldCorrect) => self.would_correct += 1,
      FileOutcome::ReadFailed(_) => self.read_failures += 1,
      FileOutcome::WriteFailed(_) => self.write_failures += 1,
    }
    self
  }

  /// Records a root that could not be traversed.
  pub fn record_failed_root(mut self) -> Self {
    self.failed_roots += 1;
    self
  }

  /// True when no rewrite failed. Gates the "all up to date" line.
  pub const fn all_succeeded(&self) -> bool {
    self.write_failures == 0
  }

  /// True when anything went wrong: a failed rewrite, an unreadable file, or
  /// a root that could not be traversed.
  pub const fn has_errors(&self) -> bool {
    self.write_failures > 0 || self.read_failures > 0 || self.failed_roots > 0
  }

  /// Number of source files that reached the corrector.
  pub const fn files_seen(&self) -> usize {
    self.corrected + self.would_correct + self.unchanged + self.ignored + self.read_failures + self.write_failures
  }
}
