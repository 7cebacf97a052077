//! # liccor
//!
//! A tool that ensures source files start with the project's copyright
//! notice.

use anyhow::Result;
use liccor::cli::{Cli, run_correct};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_correct(cli.args)
}
