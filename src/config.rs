//! # Configuration Module
//!
//! This module finds and loads the liccor file that supplies the copyright
//! notice, the source roots, and the ignore rules.
//!
//! The liccor file is searched for in the working directory and then in each
//! parent directory. It may be:
//! - `.liccor`: the plain notice text
//! - `.liccor.yml` / `.liccor.yaml`: a YAML config
//! - `.liccor.toml`: the same config in TOML

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// Liccor file names, in lookup order within a directory.
pub const CONFIG_FILENAMES: &[&str] = &[".liccor", ".liccor.yml", ".liccor.yaml", ".liccor.toml"];

/// Root scanned when the config names none.
pub const DEFAULT_SOURCE: &str = ".";

/// Structured liccor file contents.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
  /// Roots to scan for source files
  #[serde(default)]
  pub source: Vec<String>,

  /// The copyright notice to write at the top of each file
  #[serde(default)]
  pub copyright_notice: String,

  /// Gitignore-style patterns for files to leave alone
  #[serde(default)]
  pub ignore: String,
}

/// Configuration for a run, after discovery and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiccorConfig {
  /// File the configuration was read from
  pub path: PathBuf,
  /// The notice text, without its trailing newline
  pub notice: String,
  /// Roots to scan
  pub source: Vec<String>,
  /// Ignore patterns that replace the working directory's `.gitignore`
  pub ignore: Option<String>,
}

/// Format of a liccor file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
  Notice,
  Yaml,
  Toml,
}

impl ConfigFormat {
  fn for_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("yml" | "yaml") => Self::Yaml,
      Some("toml") => Self::Toml,
      _ => Self::Notice,
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// No liccor file exists in the start directory or any parent.
  #[error("Could not find a liccor file ({}) in {} or any parent directory", CONFIG_FILENAMES.join(", "), .start.display())]
  NotFound { start: PathBuf },

  /// The liccor file named on the command line does not exist.
  #[error("Liccor file '{path}' does not exist")]
  ExplicitNotFound { path: PathBuf },

  /// The config file could not be read.
  #[error("Failed to read liccor file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid YAML.
  #[error("Failed to parse liccor file '{path}': {source}")]
  YamlError { path: PathBuf, source: serde_yml::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse liccor file '{path}': {source}")]
  TomlError { path: PathBuf, source: toml::de::Error },

  /// The config file has no notice text.
  #[error("Liccor file '{path}' does not contain a copyright notice")]
  EmptyNotice { path: PathBuf },
}

impl LiccorConfig {
  /// Load configuration from a liccor file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the liccor file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed, or holds no notice.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading liccor file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let file = match ConfigFormat::for_path(path) {
      ConfigFormat::Notice => ConfigFile {
        copyright_notice: content,
        ..ConfigFile::default()
      },
      ConfigFormat::Yaml => serde_yml::from_str(&content).map_err(|e| ConfigError::YamlError {
        path: path.to_path_buf(),
        source: e,
      })?,
      ConfigFormat::Toml => toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.to_path_buf(),
        source: e,
      })?,
    };

    Self::from_file(path, file)
  }

  fn from_file(path: &Path, file: ConfigFile) -> Result<Self, ConfigError> {
    let notice = strip_trailing_newline(&file.copyright_notice);
    if notice.trim().is_empty() {
      return Err(ConfigError::EmptyNotice {
        path: path.to_path_buf(),
      });
    }

    let source = if file.source.is_empty() {
      vec![DEFAULT_SOURCE.to_string()]
    } else {
      file.source
    };

    let ignore = Some(file.ignore).filter(|patterns| !patterns.trim().is_empty());

    Ok(Self {
      path: path.to_path_buf(),
      notice: notice.to_string(),
      source,
      ignore,
    })
  }
}

/// Removes one trailing line ending from the notice.
fn strip_trailing_newline(text: &str) -> &str {
  text
    .strip_suffix("\r\n")
    .or_else(|| text.strip_suffix('\n'))
    .unwrap_or(text)
}

/// Discover the liccor file.
///
/// Each directory from `start_dir` up to the filesystem root is checked for
/// the names in [`CONFIG_FILENAMES`], in order. The first hit wins.
///
/// # Arguments
///
/// * `start_dir` - The directory to start searching from
///
/// # Returns
///
/// The path to the liccor file, or `None` if there is none.
pub fn discover_config_path(start_dir: &Path) -> Option<PathBuf> {
  find_config_in(start_dir.ancestors())
}

/// Returns the first liccor file found in `dirs`, checked in order.
fn find_config_in<'a>(dirs: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
  for dir in dirs {
    verbose_log!("Search for a liccor file at directory '{}'", dir.display());
    for name in CONFIG_FILENAMES {
      let candidate = dir.join(name);
      if candidate.is_file() {
        verbose_log!("Liccor file '{}' found", candidate.display());
        return Some(candidate);
      }
    }
  }

  verbose_log!("No liccor file found");
  None
}

/// Load the configuration for a run.
///
/// # Arguments
///
/// * `start_dir` - The directory discovery starts from (the working directory)
/// * `explicit_path` - Liccor file named on the command line, if any
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when discovery finds nothing, or the
/// error from [`LiccorConfig::load`].
pub fn load_config(start_dir: &Path, explicit_path: Option<&Path>) -> Result<LiccorConfig, ConfigError> {
  load_config_with(start_dir, explicit_path, discover_config_path)
}

fn load_config_with(
  start_dir: &Path,
  explicit_path: Option<&Path>,
  discover: impl FnOnce(&Path) -> Option<PathBuf>,
) -> Result<LiccorConfig, ConfigError> {
  let path = match explicit_path {
    Some(path) if path.is_file() => path.to_path_buf(),
    Some(path) => {
      return Err(ConfigError::ExplicitNotFound {
        path: path.to_path_buf(),
      });
    }
    None => discover(start_dir).ok_or_else(|| ConfigError::NotFound {
      start: start_dir.to_path_buf(),
    })?,
  };

  LiccorConfig::load(&path)
}
