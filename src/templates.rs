//! # Templates Module
//!
//! This module turns the raw copyright notice into the comment blocks that get
//! written at the top of source files.
//!
//! The module includes:
//! - [`Notice`] for the raw notice text and its optional before/after wrapping
//! - [`LicenseData`] for providing data to fill in the notice
//! - [`FormattedHeaders`] for the per-run cache of rendered comment blocks
//!
//! ## Example
//!
//! ```rust
//! use liccor::language::Language;
//! use liccor::templates::{FormattedHeaders, LicenseData, Notice};
//!
//! # fn main() -> anyhow::Result<()> {
//! let notice = Notice::new("Copyright {{year}} Example Corp")
//!   .with_after("SPDX-License-Identifier: Apache-2.0")
//!   .render(&LicenseData { year: "2025".to_string() });
//!
//! let headers = FormattedHeaders::new(&notice)?;
//! assert_eq!(
//!   headers.for_language(Language::CLike),
//!   "/*\n * Copyright 2025 Example Corp\n * SPDX-License-Identifier: Apache-2.0\n */\n"
//! );
//! # Ok(())
//! # }
//! ```

use crate::language::Language;

/// Data used to fill out the notice.
///
/// # Fields
///
/// * `year` - The copyright year to use in the notice
pub struct LicenseData {
  /// The copyright year substituted for `{{year}}`
  pub year: String,
}

/// Errors raised while preparing a notice for formatting.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoticeError {
  /// The notice would close the comment block it is written into.
  #[error("copyright notice must not contain the comment terminator \"*/\" (line {line})")]
  ContainsCommentTerminator { line: usize },
}

/// The copyright notice for a run.
///
/// The text carries no trailing newline; [`Notice::with_before`] and
/// [`Notice::with_after`] add free text joined by a single newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  text: String,
}

impl Notice {
  /// Creates a notice from raw text.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Places `before` on its own line(s) ahead of the notice. Empty text is a
  /// no-op.
  pub fn with_before(self, before: &str) -> Self {
    if before.is_empty() {
      return self;
    }
    Self {
      text: format!("{}\n{}", before, self.text),
    }
  }

  /// Places `after` on its own line(s) after the notice. Empty text is a
  /// no-op.
  pub fn with_after(self, after: &str) -> Self {
    if after.is_empty() {
      return self;
    }
    Self {
      text: format!("{}\n{}", self.text, after),
    }
  }

  /// Replaces `{{year}}` placeholders with the year from `data`.
  pub fn render(self, data: &LicenseData) -> Self {
    if !self.text.contains("{{year}}") {
      return self;
    }
    Self {
      text: self.text.replace("{{year}}", &data.year),
    }
  }

  /// The notice text.
  pub fn text(&self) -> &str {
    &self.text
  }
}

/// Notice rendered into every supported comment layout.
///
/// Built once per run and shared read-only by every correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedHeaders {
  c_like: String,
  go: String,
}

impl FormattedHeaders {
  /// Renders `notice` for each comment family.
  ///
  /// # Errors
  ///
  /// Returns [`NoticeError::ContainsCommentTerminator`] if the notice contains
  /// `*/`, which would end the comment early.
  pub fn new(notice: &Notice) -> Result<Self, NoticeError> {
    if let Some(index) = notice.text().lines().position(|line| line.contains("*/")) {
      return Err(NoticeError::ContainsCommentTerminator { line: index + 1 });
    }

    Ok(Self {
      c_like: format_c_like(notice.text()),
      go: format_go(notice.text()),
    })
  }

  /// The header to prepend to a file of the given language.
  pub fn for_language(&self, language: Language) -> &str {
    match language {
      Language::Go => &self.go,
      Language::CLike => &self.c_like,
    }
  }
}

/// Formats the notice as a C-style block with ` * ` prefixed lines.
///
/// Blank notice lines become ` *` so no line ends in whitespace.
pub fn format_c_like(notice: &str) -> String {
  let block = format!("/*\n * {}\n */\n", notice.replace('\n', "\n * "));
  collapse_blank_lines(&block, "\n * \n", "\n *\n")
}

/// Formats the notice as a Go-style block with three-space indented lines.
///
/// Blank notice lines stay empty instead of holding three spaces.
pub fn format_go(notice: &str) -> String {
  let block = format!("/*\n   {}\n*/\n", notice.replace('\n', "\n   "));
  collapse_blank_lines(&block, "\n   \n", "\n\n")
}

// `str::replace` does not revisit the newline it just wrote, so consecutive
// blank lines need more than one pass.
fn collapse_blank_lines(block: &str, blank: &str, collapsed: &str) -> String {
  let mut result = block.to_string();
  while result.contains(blank) {
    result = result.replace(blank, collapsed);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_c_like_single_line() {
    assert_eq!(format_c_like("Copyright 2025 Me"), "/*\n * Copyright 2025 Me\n */\n");
  }

  #[test]
  fn test_go_single_line() {
    assert_eq!(format_go("Copyright 2025 Me"), "/*\n   Copyright 2025 Me\n*/\n");
  }

  #[test]
  fn test_blank_line_rendering() {
    assert_eq!(format_c_like("A\n\nB"), "/*\n * A\n *\n * B\n */\n");
    assert_eq!(format_go("A\n\nB"), "/*\n   A\n\n   B\n*/\n");
  }

  #[test]
  fn test_consecutive_blank_lines() {
    assert_eq!(format_c_like("A\n\n\nB"), "/*\n * A\n *\n *\n * B\n */\n");
    assert_eq!(format_go("A\n\n\nB"), "/*\n   A\n\n\n   B\n*/\n");
  }

  #[test]
  fn test_indented_notice_lines_are_kept() {
    assert_eq!(
      format_go("Licensed under:\n\n  http://example.com/LICENSE"),
      "/*\n   Licensed under:\n\n     http://example.com/LICENSE\n*/\n"
    );
  }

  #[test]
  fn test_before_and_after_wrapping() {
    let notice = Notice::new("Body").with_before("Top").with_after("Bottom");
    assert_eq!(notice.text(), "Top\nBody\nBottom");
  }

  #[test]
  fn test_empty_wrapping_is_ignored() {
    let notice = Notice::new("Body").with_before("").with_after("");
    assert_eq!(notice.text(), "Body");
  }

  #[test]
  fn test_render_year() {
    let data = LicenseData {
      year: "2031".to_string(),
    };
    let notice = Notice::new("Copyright {{year}} Me").render(&data);
    assert_eq!(notice.text(), "Copyright 2031 Me");

    let untouched = Notice::new("Copyright 2011 Me").render(&data);
    assert_eq!(untouched.text(), "Copyright 2011 Me");
  }

  #[test]
  fn test_headers_per_language() {
    let headers = FormattedHeaders::new(&Notice::new("N")).unwrap();
    assert_eq!(headers.for_language(Language::CLike), "/*\n * N\n */\n");
    assert_eq!(headers.for_language(Language::Go), "/*\n   N\n*/\n");
  }

  #[test]
  fn test_terminator_in_notice_is_rejected() {
    let err = FormattedHeaders::new(&Notice::new("fine\nnot */ fine")).unwrap_err();
    assert_eq!(err, NoticeError::ContainsCommentTerminator { line: 2 });
  }
}
