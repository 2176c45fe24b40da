//! Text helpers shared by the slugifier and the renderer.
use std::sync::LazyLock;

use regex::Regex;

static LINK_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\[([^\]]+)\](?:\(.*\))?$").unwrap_or_else(|e| {
    log::error!("Failed to compile LINK_TITLE_RE regex: {e}");
    never_matching_regex()
  })
});

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"</?[A-Za-z][^<>]*>").unwrap_or_else(|e| {
    log::error!("Failed to compile HTML_TAG_RE regex: {e}");
    never_matching_regex()
  })
});

static ANSI_ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap_or_else(|e| {
    log::error!("Failed to compile ANSI_ESCAPE_RE regex: {e}");
    never_matching_regex()
  })
});

static INNER_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[ \t]+").unwrap_or_else(|e| {
    log::error!("Failed to compile INNER_WHITESPACE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Return the label of Markdown-link-like text.
///
/// `[label](target)` and `[label]` both yield `label`, anything else is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use marktoc_core::utils::link_title;
///
/// assert_eq!(link_title("[Install](#install)"), "Install");
/// assert_eq!(link_title("[Install]"), "Install");
/// assert_eq!(link_title("Install"), "Install");
/// ```
#[must_use]
pub fn link_title(text: &str) -> &str {
  LINK_TITLE_RE
    .captures(text)
    .and_then(|caps| caps.get(1))
    .map_or(text, |m| m.as_str())
}

/// Remove HTML-like tags such as `<span>` or `</code>`.
#[must_use]
pub fn strip_html_tags(text: &str) -> String {
  HTML_TAG_RE.replace_all(text, "").into_owned()
}

/// Remove terminal color escape sequences.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
  ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Collapse every run of spaces or tabs, a lone tab included, into a single
/// space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
  INNER_WHITESPACE_RE.replace_all(text, " ").into_owned()
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a pattern fails to compile.
///
/// # Panics
///
/// Panics if the fallback pattern `^\b$` fails to compile, which should never
/// happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(
      clippy::unwrap_used,
      reason = "This pattern is guaranteed to be valid"
    )]
    Regex::new(r"^\b$").unwrap()
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_link_title_requires_whole_link() {
    assert_eq!(link_title("[a](b) and more"), "[a](b) and more");
    assert_eq!(link_title("[]"), "[]");
  }

  #[test]
  fn test_strip_html_tags() {
    assert_eq!(strip_html_tags("Hello <span>world</span>"), "Hello world");
    assert_eq!(strip_html_tags("a < b > c"), "a < b > c");
    assert_eq!(strip_html_tags("<br/>line"), "line");
  }

  #[test]
  fn test_strip_ansi() {
    assert_eq!(strip_ansi("\u{1b}[31mred\u{1b}[0m text"), "red text");
  }

  #[test]
  fn test_collapse_whitespace_keeps_single_spaces() {
    assert_eq!(collapse_whitespace("a  b\t\tc d"), "a b c d");
  }

  #[test]
  fn test_collapse_whitespace_replaces_lone_tab() {
    assert_eq!(collapse_whitespace("a\tb"), "a b");
  }

  #[test]
  fn test_never_matching_regex() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything"));
  }
}
