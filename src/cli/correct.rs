//! # Correct Command
//!
//! This module implements the notice correction run, the only command liccor
//! has.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::config::{LiccorConfig, load_config};
use crate::diff::DiffManager;
use crate::file_filter::IgnoreFilter;
use crate::ignore::IgnoreManager;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing};
use crate::output::{print_all_up_to_date, print_summary};
use crate::processor::{Processor, ProcessorConfig};
use crate::templates::{FormattedHeaders, LicenseData, Notice};

/// Ignore file read from the working directory when the config has no
/// `ignore` block.
const GITIGNORE_FILE: &str = ".gitignore";

/// Arguments for a correction run
#[derive(Args, Debug, Default)]
pub struct CorrectArgs {
  /// The liccor file to use (default: search the working directory and its
  /// parents)
  #[arg(long = "liccor-file", short = 'l', value_name = "FILE")]
  pub liccor_file: Option<PathBuf>,

  /// Directory, file, or glob containing the source files to update
  /// (repeatable, replaces the config's source list)
  #[arg(long, short = 's', value_name = "DIR")]
  pub src: Vec<String>,

  /// Text placed before the copyright notice
  #[arg(long, short = 'b', value_name = "TEXT")]
  pub before: Option<String>,

  /// Text placed after the copyright notice
  #[arg(long, short = 'a', value_name = "TEXT")]
  pub after: Option<String>,

  /// File patterns to ignore (supports glob patterns)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Year substituted for {{year}} in the notice (default: current year)
  #[arg(long)]
  pub year: Option<String>,

  /// Check mode: report files that need a new notice without modifying them
  #[arg(long)]
  pub check: bool,

  /// Show diff of pending changes in check mode
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// Save diff of pending changes to a file in check mode
  #[arg(long, value_name = "FILE", requires = "check")]
  pub save_diff: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl CorrectArgs {
  /// Builds the notice from the config text and the wrapping flags.
  fn notice(&self, config: &LiccorConfig) -> Notice {
    let year = self
      .year
      .clone()
      .unwrap_or_else(|| chrono::Local::now().year().to_string());

    Notice::new(config.notice.as_str())
      .with_before(self.before.as_deref().unwrap_or_default())
      .with_after(self.after.as_deref().unwrap_or_default())
      .render(&LicenseData { year })
  }

  /// Roots to scan: `--src` wins over the config's source list.
  fn roots(&self, config: &LiccorConfig) -> Vec<String> {
    if self.src.is_empty() {
      config.source.clone()
    } else {
      self.src.clone()
    }
  }
}

/// Builds the ignore predicate for a run rooted at `working_dir`.
///
/// The config's `ignore` block replaces the working directory's
/// `.gitignore`. Command-line patterns apply on top of either.
pub fn build_ignore_manager(
  working_dir: &Path,
  config: &LiccorConfig,
  cli_patterns: Vec<String>,
) -> Result<IgnoreManager> {
  let mut manager = IgnoreManager::new(cli_patterns)?;

  match config.ignore {
    Some(ref patterns) => manager.load_patterns(working_dir, patterns)?,
    None => manager.load_gitignore_file(working_dir, &working_dir.join(GITIGNORE_FILE))?,
  }

  Ok(manager)
}

/// Run the correction with the given arguments
pub fn run_correct(args: CorrectArgs) -> Result<()> {
  init_tracing(args.verbose, args.quiet);
  args.colors.apply();

  let working_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  let config =
    load_config(&working_dir, args.liccor_file.as_deref()).with_context(|| "Could not load liccor file")?;
  debug!("Using liccor file: {}", config.path.display());

  let notice = args.notice(&config);
  let headers = FormattedHeaders::new(&notice)
    .with_context(|| format!("Invalid copyright notice in {}", config.path.display()))?;

  let roots = args.roots(&config);
  debug!("Source roots: {:?}", roots);

  let ignore_manager = build_ignore_manager(&working_dir, &config, args.ignore)?;

  let processor = Processor::new(ProcessorConfig {
    file_filter: Box::new(IgnoreFilter::new(ignore_manager)),
    check_only: args.check,
    diff_manager: Some(DiffManager::new(args.show_diff, args.save_diff)),
    ..ProcessorConfig::new(headers)
  })?;

  let summary = processor.process(&roots);

  let pending = args.check && summary.would_correct > 0;
  if summary.all_succeeded() && !pending {
    print_all_up_to_date();
  }
  print_summary(&summary);

  if pending {
    info_log!("Run without --check to correct {} file(s).", summary.would_correct);
  }

  if summary.has_errors() || pending {
    process::exit(1);
  }

  Ok(())
}
