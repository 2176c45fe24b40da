//! Anchor slug generation for heading text.
use std::fmt::Write as _;

use crate::{
  diacritics,
  processor::Slugify,
  utils::{link_title, strip_ansi, strip_html_tags},
};

/// Punctuation and symbols that never appear in a slug.
const STRIPPED_PUNCTUATION: &[char] = &[
  '|', '$', '&', '`', '~', '=', '\\', '/', '@', '+', '*', '!', '?', '(', '{',
  '[', ']', '}', ')', '<', '>', '.', ',', ';', ':', '\'', '"', '^',
];

/// Full-width and CJK punctuation that never appears in a slug.
const STRIPPED_CJK_PUNCTUATION: &[char] = &[
  '。', '？', '！', '，', '、', '；', '：', '“', '”', '【', '】', '（', '）',
  '〔', '〕', '［', '］', '﹃', '﹄', '‘', '’', '﹁', '﹂', '—', '…', '－', '～',
  '《', '》', '〈', '〉', '「', '」',
];

/// Slug used when every character of a heading was stripped.
const EMPTY_SLUG_FALLBACK: &str = "heading";

/// Settings for a single [`slugify`] call.
#[derive(Debug, Clone)]
pub struct SlugOptions {
  /// Built-in algorithm, no slugification, or a custom function.
  pub strategy:           Slugify,
  /// Remove HTML-like tags before stripping punctuation.
  pub strip_heading_tags: bool,
  /// Disambiguator appended as `-N` when non-zero.
  pub num:                usize,
}

impl Default for SlugOptions {
  fn default() -> Self {
    Self {
      strategy:           Slugify::Default,
      strip_heading_tags: true,
      num:                0,
    }
  }
}

impl SlugOptions {
  /// Options with the given disambiguator and everything else default.
  #[must_use]
  pub fn with_num(num: usize) -> Self {
    Self {
      num,
      ..Self::default()
    }
  }
}

/// Turn heading text into a URL-safe anchor identifier.
///
/// The built-in algorithm takes the label of link-like text, drops terminal
/// color codes, lowercases, removes HTML-like tags, punctuation and CJK
/// punctuation, turns whitespace into hyphens (each tab into two), folds
/// accented letters and finally appends `-N` for a non-zero disambiguator.
///
/// # Examples
///
/// ```
/// use marktoc_core::{SlugOptions, slugify};
///
/// let options = SlugOptions::default();
/// assert_eq!(slugify("Hello World!", &options), "hello-world");
/// assert_eq!(slugify("C++ & Go", &options), "c-go");
/// assert_eq!(slugify("Hello World!", &SlugOptions::with_num(2)), "hello-world-2");
/// ```
#[must_use]
pub fn slugify(text: &str, options: &SlugOptions) -> String {
  match &options.strategy {
    Slugify::Custom(custom) => return custom(text, options),
    Slugify::Disabled => return link_title(text).to_string(),
    Slugify::Default => {},
  }

  let mut slug = strip_ansi(link_title(text)).to_lowercase();
  if options.strip_heading_tags {
    slug = strip_html_tags(&slug);
  }

  // Punctuation goes before hyphenation so "a & b" collapses to "a-b".
  slug.retain(|c| {
    !STRIPPED_PUNCTUATION.contains(&c) && !STRIPPED_CJK_PUNCTUATION.contains(&c)
  });

  let mut slug = diacritics::fold(&hyphenate(&slug));
  if slug.is_empty() {
    slug.push_str(EMPTY_SLUG_FALLBACK);
  }
  if options.num > 0 {
    let _ = write!(slug, "-{}", options.num);
  }
  slug
}

/// Replace each whitespace run with `-`, or with `--` per tab when the run
/// contains tabs.
fn hyphenate(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut chars = text.chars().peekable();

  while let Some(c) = chars.next() {
    if !c.is_whitespace() {
      out.push(c);
      continue;
    }

    let mut tabs = usize::from(c == '\t');
    while let Some(&next) = chars.peek() {
      if !next.is_whitespace() {
        break;
      }
      tabs += usize::from(next == '\t');
      chars.next();
    }

    if tabs == 0 {
      out.push('-');
    } else {
      out.push_str(&"--".repeat(tabs));
    }
  }

  out
}
