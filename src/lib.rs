//! # liccor
//!
//! A license notice corrector that makes every recognized source file start
//! with the project's copyright notice.
//!
//! `liccor` rewrites source files in place. A leading block comment is taken
//! to be the previous notice and is replaced; files without one get the
//! notice prepended. Files that already carry the current notice are not
//! written.
//!
//! ## Features
//!
//! * Recursively scan source roots, skipping `.git` and symbolic links
//! * Go files get an indented `/* */` block, C-like files (C, C++, Java,
//!   JavaScript, TypeScript) a ` * ` prefixed one
//! * The notice comes from a `.liccor` file, or a YAML/TOML config that also
//!   names the source roots and ignore rules
//! * Files matched by `.gitignore`, the config, or `--ignore` are left alone
//! * Check mode to list stale files without modifying them
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use liccor::file_filter::IgnoreFilter;
//! use liccor::ignore::IgnoreManager;
//! use liccor::processor::{Processor, ProcessorConfig};
//! use liccor::templates::{FormattedHeaders, LicenseData, Notice};
//!
//! fn main() -> anyhow::Result<()> {
//!     let notice = Notice::new("Copyright {{year}} Example Corp")
//!         .render(&LicenseData { year: "2025".to_string() });
//!     let headers = FormattedHeaders::new(&notice)?;
//!
//!     let ignore_manager = IgnoreManager::new(vec!["third_party/".to_string()])?;
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         file_filter: Box::new(IgnoreFilter::new(ignore_manager)),
//!         ..ProcessorConfig::new(headers)
//!     })?;
//!
//!     let summary = processor.process(&["src".to_string()]);
//!     if summary.all_succeeded() {
//!         println!("All files up to date!");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Traversal and correction of source files
//! * [`templates`] - Notice rendering and comment formatting
//! * [`license_detection`] - Locating the existing leading block comment
//! * [`config`] - Liccor file discovery and loading
//! * [`logging`] - Logging utilities for verbose output

pub mod cli;
pub mod config;
pub mod diff;
pub mod file_filter;
pub mod ignore;
pub mod language;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
