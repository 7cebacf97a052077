//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod correct;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use correct::{CorrectArgs, build_ignore_manager, run_correct};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// A license notice corrector for C/C++, Java, JavaScript, TypeScript, and Go.
#[derive(Parser, Debug)]
#[command(
  name = "liccor",
  author = "the liccor contributors",
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Correct every source file below the configured roots
  liccor

  # Use a specific liccor file and source directory
  liccor --liccor-file ../.liccor.yml --src src

  # Wrap the notice with extra text
  liccor --before \"SPDX-License-Identifier: MIT\" --after \"Generated headers are not edited by hand.\"

  # Report files with a stale notice without touching them
  liccor --check --show-diff

  # Ignore specific files or patterns
  liccor --ignore \"third_party/\" --ignore \"*.pb.go\"
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub args: CorrectArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
