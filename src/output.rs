//! # Output Module
//!
//! This module centralizes all user-facing output for liccor: the line
//! printed for each corrected file, the final "all up to date" line, and the
//! error lines for files and roots that could not be handled.
//!
//! Run lines go to stdout so they can be piped. Failure details go to stderr
//! and are printed even in quiet mode.

use std::fmt::Display;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::normalize_relative_path;
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Path as shown to the user, without leading `./` components.
pub fn display_path(path: &Path) -> String {
  normalize_relative_path(path).display().to_string()
}

/// The line printed after a rewrite attempt.
pub fn correction_line(path: &Path, success: bool) -> String {
  let status = if success {
    "Success!".if_supports_color(Stream::Stdout, |s| s.green()).to_string()
  } else {
    "Failure!".if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  };
  format!("Correcting '{}'... {}", display_path(path), status)
}

/// Print the result of rewriting one file.
///
/// Successes are hidden in quiet mode; failures never are.
pub fn print_correction(path: &Path, success: bool) {
  if success && is_quiet() {
    return;
  }
  println!("{}", correction_line(path, success));
}

/// Print a file that check mode would rewrite.
///
/// In quiet mode only the path is printed, for scripting.
pub fn print_would_correct(path: &Path) {
  if is_quiet() {
    println!("{}", display_path(path));
    return;
  }
  println!(
    "{} Would correct '{}'",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.yellow()),
    display_path(path)
  );
}

/// Print the cause of a failed rewrite.
pub fn print_write_error(path: &Path, error: impl Display) {
  eprintln!(
    "{} Failed to write '{}': {}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    display_path(path),
    error
  );
}

/// Print a file that could not be read. The file is left untouched.
pub fn print_read_error(path: &Path, error: impl Display) {
  eprintln!(
    "{} Failed to read '{}': {}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    display_path(path),
    error
  );
}

/// Print a root whose traversal failed. The rest of that root is skipped.
pub fn print_root_error(root: &str, error: &anyhow::Error) {
  eprintln!(
    "{} Skipping source '{}': {:#}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    root,
    error
  );
}

/// Print the confirmation that every attempted rewrite succeeded.
pub fn print_all_up_to_date() {
  if is_quiet() {
    return;
  }
  println!("{}", "All files up to date!".if_supports_color(Stream::Stdout, |s| s.green()));
}

/// The counts line shown in verbose mode.
pub fn summary_line(summary: &RunSummary) -> String {
  let mut line = format!(
    "Summary: {} corrected, {} unchanged, {} ignored",
    summary.corrected, summary.unchanged, summary.ignored
  );
  if summary.would_correct > 0 {
    line.push_str(&format!(", {} to correct", summary.would_correct));
  }
  let failures = summary.read_failures + summary.write_failures;
  if failures > 0 {
    line.push_str(&format!(", {} failed", failures));
  }
  if summary.failed_roots > 0 {
    line.push_str(&format!(", {} sources skipped", summary.failed_roots));
  }
  line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  line
}

/// Print the processing summary. Only shown in verbose mode.
pub fn print_summary(summary: &RunSummary) {
  if !is_verbose() {
    return;
  }
  eprintln!("{}", summary_line(summary).if_supports_color(Stream::Stderr, |s| s.dimmed()));
}
