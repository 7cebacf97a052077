//! # File Collector Module
//!
//! This module provides utilities for collecting source files below a root,
//! expanding glob roots, and normalizing paths for display.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::language::{Language, classify};

/// Directory holding version-control metadata. It is never entered.
pub const VCS_DIR: &str = ".git";

/// A source file found during traversal, with its classified language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
  /// Path as reached from the root it was found under
  pub path: PathBuf,
  /// Comment family used for the notice
  pub language: Language,
}

/// File collector for root expansion and directory traversal.
///
/// The `FileCollector` handles:
/// - Expanding a root that is a glob pattern into concrete paths
/// - Walking directories while pruning the version-control directory
/// - Keeping only regular files whose extension is recognized
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCollector;

impl FileCollector {
  /// Creates a new FileCollector.
  pub const fn new() -> Self {
    Self
  }

  /// Lazily walks `root`, yielding each in-scope source file once.
  ///
  /// Entries are visited in file-name order. Symbolic links are neither
  /// followed nor yielded. `root` may also be a single file, which is yielded
  /// if its extension is recognized.
  ///
  /// Every directory that cannot be read produces an `Err` item.
  pub fn walk(&self, root: &Path) -> impl Iterator<Item = Result<SourceFile>> + use<> {
    WalkDir::new(root)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| !is_vcs_dir(entry))
      .filter_map(|entry| match entry {
        Ok(entry) => source_file(entry).map(Ok),
        Err(e) => {
          let path = e.path().map(Path::to_path_buf).unwrap_or_default();
          Some(Err(
            anyhow::Error::new(e).context(format!("Failed to read directory {}", path.display())),
          ))
        }
      })
  }

  /// Collects every source file below `root`.
  ///
  /// # Errors
  ///
  /// Returns the first traversal error. Files found before the error are
  /// discarded so the root is handled as a whole.
  pub fn collect(&self, root: &Path) -> Result<Vec<SourceFile>> {
    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let files = self.walk(root).collect::<Result<Vec<_>>>()?;

    debug!(
      "Found {} source files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }
}

// Applies to the root as well: a root that is itself `.git` yields nothing.
fn is_vcs_dir(entry: &DirEntry) -> bool {
  entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}

fn is_inside_vcs_dir(path: &Path) -> bool {
  path.components().any(|component| component.as_os_str() == VCS_DIR)
}

fn source_file(entry: DirEntry) -> Option<SourceFile> {
  if !entry.file_type().is_file() {
    return None;
  }

  let language = classify(entry.path())?;
  trace!("Found source '{}' ({})", entry.path().display(), language);
  Some(SourceFile {
    path: entry.into_path(),
    language,
  })
}

/// Expands a root into the paths to traverse.
///
/// A root that does not exist but contains glob metacharacters is expanded
/// with [`glob::glob`]. Matches inside a `.git` directory are dropped, and so
/// are matches below another match, since walking the outer one reaches them.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or matches nothing.
pub fn expand_root(root: &str) -> Result<Vec<PathBuf>> {
  let path = PathBuf::from(root);
  if path.exists() || !is_glob(root) {
    return Ok(vec![path]);
  }

  let mut matches: Vec<PathBuf> = Vec::new();
  for entry in glob::glob(root).with_context(|| format!("Invalid glob pattern: {}", root))? {
    matches.push(entry.with_context(|| format!("Failed to expand glob pattern: {}", root))?);
  }

  if matches.is_empty() {
    bail!("No paths match pattern: {}", root);
  }

  matches.sort();
  let mut roots: Vec<PathBuf> = Vec::with_capacity(matches.len());
  for candidate in matches {
    if is_inside_vcs_dir(&candidate) {
      trace!("Skipping: {} (version-control directory)", candidate.display());
      continue;
    }
    if roots.iter().any(|outer| candidate.starts_with(outer)) {
      continue;
    }
    roots.push(candidate);
  }

  debug!("Expanded {} to {} paths", root, roots.len());
  Ok(roots)
}

fn is_glob(pattern: &str) -> bool {
  pattern.contains(['*', '?', '['])
}

/// Normalizes a path for display by dropping `.` components.
///
/// # Examples
/// - `./src/main.go` -> `src/main.go`
/// - `src/./lib/a.c` -> `src/lib/a.c`
/// - `.` -> `.`
pub fn normalize_relative_path(path: &Path) -> PathBuf {
  let normalized: PathBuf = path
    .components()
    .filter(|component| !matches!(component, Component::CurDir))
    .collect();

  if normalized.as_os_str().is_empty() {
    PathBuf::from(".")
  } else {
    normalized
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn make_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/inner")).unwrap();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::write(root.join("main.go"), "package main\n").unwrap();
    fs::write(root.join("README.md"), "# readme\n").unwrap();
    fs::write(root.join("pkg/util.c"), "int x;\n").unwrap();
    fs::write(root.join("pkg/inner/widget.tsx"), "export {};\n").unwrap();
    fs::write(root.join("pkg/inner/Makefile"), "all:\n").unwrap();
    fs::write(root.join(".git/objects/hook.go"), "package hook\n").unwrap();
    dir
  }

  fn relative(files: &[SourceFile], root: &Path) -> Vec<(String, Language)> {
    files
      .iter()
      .map(|f| {
        (
          f.path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"),
          f.language,
        )
      })
      .collect()
  }

  #[test]
  fn test_collects_in_scope_files_once() {
    let dir = make_tree();
    let files = FileCollector::new().collect(dir.path()).unwrap();

    assert_eq!(
      relative(&files, dir.path()),
      vec![
        ("main.go".to_string(), Language::Go),
        ("pkg/inner/widget.tsx".to_string(), Language::CLike),
        ("pkg/util.c".to_string(), Language::CLike),
      ]
    );
  }

  #[test]
  fn test_vcs_directory_is_pruned() {
    let dir = make_tree();
    let files = FileCollector::new().collect(dir.path()).unwrap();
    assert!(files.iter().all(|f| !f.path.components().any(|c| c.as_os_str() == VCS_DIR)));
  }

  #[test]
  fn test_single_file_root() {
    let dir = make_tree();
    let collector = FileCollector::new();

    let files = collector.collect(&dir.path().join("pkg/util.c")).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].language, Language::CLike);

    assert!(collector.collect(&dir.path().join("README.md")).unwrap().is_empty());
  }

  #[test]
  fn test_missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = FileCollector::new().collect(&dir.path().join("nope"));
    assert!(result.is_err());
  }

  #[test]
  fn test_glob_root() {
    let dir = make_tree();
    let pattern = format!("{}/pkg*", dir.path().display());
    let paths = expand_root(&pattern).unwrap();
    assert_eq!(paths, vec![dir.path().join("pkg")]);

    let files = FileCollector::new().collect(&paths[0]).unwrap();
    assert_eq!(files.len(), 2);
  }

  #[test]
  fn test_glob_root_without_matches() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/nothing-*", dir.path().display());
    assert!(expand_root(&pattern).is_err());
  }

  #[test]
  fn test_glob_root_skips_vcs_dir() {
    let dir = make_tree();

    let paths = expand_root(&format!("{}/*", dir.path().display())).unwrap();
    assert!(!paths.contains(&dir.path().join(".git")));
    assert!(paths.contains(&dir.path().join("pkg")));

    let go_files = expand_root(&format!("{}/**/*.go", dir.path().display())).unwrap();
    assert_eq!(go_files, vec![dir.path().join("main.go")]);
  }

  #[test]
  fn test_glob_root_drops_nested_matches() {
    let dir = make_tree();
    let paths = expand_root(&format!("{}/pkg/**/*", dir.path().display())).unwrap();
    assert_eq!(paths, vec![dir.path().join("pkg/inner"), dir.path().join("pkg/util.c")]);
  }

  #[test]
  fn test_vcs_dir_as_root_yields_nothing() {
    let dir = make_tree();
    let files = FileCollector::new().collect(&dir.path().join(".git")).unwrap();
    assert!(files.is_empty());
  }

  #[test]
  fn test_normalize_relative_path() {
    assert_eq!(normalize_relative_path(Path::new("./a/b.go")), PathBuf::from("a/b.go"));
    assert_eq!(normalize_relative_path(Path::new("a/./b.go")), PathBuf::from("a/b.go"));
    assert_eq!(normalize_relative_path(Path::new(".")), PathBuf::from("."));
    assert_eq!(normalize_relative_path(Path::new("/abs/x.c")), PathBuf::from("/abs/x.c"));
  }
}
