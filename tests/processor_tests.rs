mod common;

use std::fs;

use anyhow::Result;
use common::{C_HEADER, GO_HEADER, create_processor, read_file, write_file};
use liccor::processor::{FileCollector, normalize_relative_path};
use tempfile::tempdir;

fn root_of(dir: &std::path::Path) -> Vec<String> {
  vec![dir.display().to_string()]
}

#[test]
fn test_mixed_tree_is_corrected() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "main.go", "package main\n")?;
  write_file(root, "lib/old.c", "/* Copyright 1999 Someone Else */\nint x;\n")?;
  write_file(root, "lib/done.h", &format!("{}#pragma once\n", C_HEADER))?;
  write_file(root, "web/app.tsx", "export {};\n")?;
  write_file(root, "README.md", "# Readme\n")?;
  write_file(root, ".git/hooks/pre-commit.go", "package hooks\n")?;
  write_file(root, "vendor/dep.c", "int dep;\n")?;

  let processor = create_processor(root, "vendor/\n", false, None)?;
  let summary = processor.process(&root_of(root));

  assert_eq!(read_file(root, "main.go")?, format!("{}package main\n", GO_HEADER));
  assert_eq!(read_file(root, "lib/old.c")?, format!("{}int x;\n", C_HEADER));
  assert_eq!(read_file(root, "lib/done.h")?, format!("{}#pragma once\n", C_HEADER));
  assert_eq!(read_file(root, "web/app.tsx")?, format!("{}export {{}};\n", C_HEADER));
  assert_eq!(read_file(root, "README.md")?, "# Readme\n");
  assert_eq!(read_file(root, ".git/hooks/pre-commit.go")?, "package hooks\n");
  assert_eq!(read_file(root, "vendor/dep.c")?, "int dep;\n");

  assert_eq!(summary.corrected, 3);
  assert_eq!(summary.unchanged, 1);
  assert_eq!(summary.ignored, 1);
  assert!(summary.all_succeeded());
  assert!(!summary.has_errors());

  Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "a.java", "  \n/* stale */\nclass A {}\n")?;
  write_file(root, "b.go", "\n\npackage b\n")?;

  let processor = create_processor(root, "", false, None)?;
  let first = processor.process(&root_of(root));
  assert_eq!(first.corrected, 2);

  let after_first = (read_file(root, "a.java")?, read_file(root, "b.go")?);
  let second = processor.process(&root_of(root));
  assert_eq!(second.corrected, 0);
  assert_eq!(second.unchanged, 2);
  assert_eq!((read_file(root, "a.java")?, read_file(root, "b.go")?), after_first);

  Ok(())
}

#[test]
fn test_leading_whitespace_is_dropped_with_old_header() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "x.cpp", " \t\n/* old */\nint main() {}\n")?;

  create_processor(root, "", false, None)?.process(&root_of(root));

  assert_eq!(read_file(root, "x.cpp")?, format!("{}int main() {{}}\n", C_HEADER));
  Ok(())
}

#[test]
fn test_comment_after_code_is_not_a_header() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "x.js", "'use strict';\n/* not a header */\n")?;

  create_processor(root, "", false, None)?.process(&root_of(root));

  assert_eq!(
    read_file(root, "x.js")?,
    format!("{}'use strict';\n/* not a header */\n", C_HEADER)
  );
  Ok(())
}

#[test]
fn test_check_mode_reports_without_writing() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path().join("src");
  write_file(&root, "main.go", "package main\n")?;
  write_file(&root, "ok.c", &format!("{}int ok;\n", C_HEADER))?;
  let diff_path = temp_dir.path().join("changes.diff");

  let processor = create_processor(&root, "", true, Some(diff_path.clone()))?;
  let summary = processor.process(&root_of(&root));

  assert_eq!(summary.would_correct, 1);
  assert_eq!(summary.unchanged, 1);
  assert_eq!(summary.corrected, 0);
  assert_eq!(read_file(&root, "main.go")?, "package main\n");

  let diff = fs::read_to_string(&diff_path)?;
  assert!(diff.contains("main.go:"));
  assert!(diff.contains("+   Copyright 2025 Test Company\n"));
  assert!(diff.contains(" package main\n"));

  Ok(())
}

#[test]
fn test_roots_may_be_files_and_globs() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "one.go", "package one\n")?;
  write_file(root, "two.go", "package two\n")?;
  write_file(root, "three.c", "int three;\n")?;
  write_file(root, "skip.h", "int skip;\n")?;

  let roots = vec![
    root.join("three.c").display().to_string(),
    format!("{}/*.go", root.display()),
  ];
  let summary = create_processor(root, "", false, None)?.process(&roots);

  assert_eq!(summary.corrected, 3);
  assert_eq!(read_file(root, "skip.h")?, "int skip;\n");
  Ok(())
}

#[test]
fn test_failed_root_does_not_stop_the_run() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "ok/a.c", "int a;\n")?;

  let roots = vec![
    root.join("missing").display().to_string(),
    format!("{}/nothing-*", root.display()),
    root.join("ok").display().to_string(),
  ];
  let summary = create_processor(root, "", false, None)?.process(&roots);

  assert_eq!(summary.failed_roots, 2);
  assert_eq!(summary.corrected, 1);
  assert!(summary.all_succeeded());
  assert!(summary.has_errors());
  Ok(())
}

#[test]
fn test_non_utf8_content_is_preserved() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("latin1.c");
  fs::write(&path, b"/* alt */\nchar *s = \"\xe9t\xe9\";\n")?;

  create_processor(temp_dir.path(), "", false, None)?.process(&root_of(temp_dir.path()));

  let mut expected = C_HEADER.as_bytes().to_vec();
  expected.extend_from_slice(b"char *s = \"\xe9t\xe9\";\n");
  assert_eq!(fs::read(&path)?, expected);
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_followed() -> Result<()> {
  let temp_dir = tempdir()?;
  let outside = tempdir()?;
  write_file(outside.path(), "target.c", "int target;\n")?;
  write_file(temp_dir.path(), "real.c", "int real;\n")?;
  std::os::unix::fs::symlink(outside.path().join("target.c"), temp_dir.path().join("link.c"))?;
  std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked-dir"))?;

  let summary = create_processor(temp_dir.path(), "", false, None)?.process(&root_of(temp_dir.path()));

  assert_eq!(summary.corrected, 1);
  assert_eq!(read_file(outside.path(), "target.c")?, "int target;\n");
  Ok(())
}

#[test]
fn test_collector_finds_each_file_once() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "b.ts", "")?;
  write_file(root, "a/c.hpp", "")?;
  write_file(root, "a/d.cxx", "")?;
  write_file(root, "a/.git/e.c", "")?;
  write_file(root, "a/notes.txt", "")?;

  let files = FileCollector::new().collect(root)?;
  let mut names: Vec<_> = files
    .iter()
    .map(|f| normalize_relative_path(f.path.strip_prefix(root).unwrap_or(f.path.as_path())))
    .map(|p| p.display().to_string())
    .collect();
  names.sort();

  assert_eq!(names, vec!["a/c.hpp", "a/d.cxx", "b.ts"]);
  Ok(())
}
