//! # Logging Module
//!
//! This module provides logging utilities for liccor, including:
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//! - Setup of the `tracing` subscriber for diagnostics
//!
//! Verbose logs go to stderr and info logs go to stdout, so the run output
//! stays easy to pipe.
//!
//! ## Example
//!
//! ```rust
//! use liccor::logging::{ColorMode, set_verbose};
//! use liccor::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Search for a liccor file at directory '{}'", ".");
//!
//! // Goes to stdout
//! info_log!("Correcting '{}'... Success!", "main.go");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// It uses the same format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message, dimmed when colors are enabled.
///
/// Used by the [`info_log!`] macro.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.dimmed()));
}
