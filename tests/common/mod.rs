#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use liccor::diff::DiffManager;
use liccor::file_filter::IgnoreFilter;
use liccor::ignore::IgnoreManager;
use liccor::processor::{Processor, ProcessorConfig};
use liccor::templates::{FormattedHeaders, Notice};

/// Notice used by most tests.
pub const NOTICE: &str = "Copyright 2025 Test Company";

/// The notice above as a C-like header.
pub const C_HEADER: &str = "/*\n * Copyright 2025 Test Company\n */\n";

/// The notice above as a Go header.
pub const GO_HEADER: &str = "/*\n   Copyright 2025 Test Company\n*/\n";

/// Writes `content` to `rel` below `dir`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Reads `rel` below `dir` as a string.
pub fn read_file(dir: &Path, rel: &str) -> Result<String> {
  let path = dir.join(rel);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Builds a processor for [`NOTICE`] with gitignore-style `patterns`
/// relative to `root`.
pub fn create_processor(root: &Path, patterns: &str, check_only: bool, save_diff: Option<PathBuf>) -> Result<Processor> {
  let headers = FormattedHeaders::new(&Notice::new(NOTICE))?;

  let mut ignore_manager = IgnoreManager::new(vec![])?;
  ignore_manager.load_patterns(root, patterns)?;

  Processor::new(ProcessorConfig {
    file_filter: Box::new(IgnoreFilter::new(ignore_manager)),
    check_only,
    diff_manager: Some(DiffManager::new(false, save_diff)),
    ..ProcessorConfig::new(headers)
  })
}

/// The liccor binary, run from `dir` without colors.
pub fn liccor_cmd(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("liccor")?;
  cmd.current_dir(dir).arg("--colors=never").env_remove("RUST_LOG");
  Ok(cmd)
}
