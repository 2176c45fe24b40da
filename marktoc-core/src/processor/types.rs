//! Type definitions for the TOC processor.
//!
//! Contains the resolved option set ([`TocOptions`]), its builder, the hook
//! types callers can plug in, and the [`TocGenerator`] itself.
//!
//! # Examples
//!
//! ```
//! use marktoc_core::{TocGenerator, TocOptions};
//!
//! let options = TocOptions {
//!   maxdepth: 3,
//!   indent: "    ".to_string(),
//!   ..Default::default()
//! };
//!
//! let generator = TocGenerator::new(options);
//! ```

use std::{fmt, sync::Arc};

use regex::Regex;

use crate::{Heading, error::TocResult, slug::SlugOptions, tokens::TokenizerOptions};

/// Predicate deciding whether a heading is listed. Receives the heading
/// content, the heading and the full list being filtered.
pub type FilterFn = Arc<dyn Fn(&str, &Heading, &[Heading]) -> bool + Send + Sync>;

/// Custom slug function. Receives the heading text and the slug options.
pub type SlugifyFn = Arc<dyn Fn(&str, &SlugOptions) -> String + Send + Sync>;

/// Custom link emitter. Receives the heading and its display text and returns
/// the text placed after the bullet.
pub type LinkifyFn = Arc<dyn Fn(&Heading, &str) -> String + Send + Sync>;

/// Custom text transformation used for titleizing and stripping.
pub type TextFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How anchor slugs are produced.
#[derive(Clone, Default)]
pub enum Slugify {
  /// The built-in slug algorithm.
  #[default]
  Default,
  /// Use the heading's link title as-is.
  Disabled,
  /// Delegate entirely to a caller-supplied function.
  Custom(SlugifyFn),
}

/// How list items are emitted.
#[derive(Clone, Default)]
pub enum Linkify {
  /// `[text](#slug)`.
  #[default]
  Enabled,
  /// The plain heading content.
  Disabled,
  /// Delegate to a caller-supplied function.
  Custom(LinkifyFn),
}

/// How link text is derived from heading content.
#[derive(Clone, Default)]
pub enum Titleize {
  /// Strip HTML-like tags, collapse whitespace and trim.
  #[default]
  Enabled,
  /// Use the content unchanged.
  Disabled,
  /// Delegate to a caller-supplied function.
  Custom(TextFn),
}

/// Words removed from link text before it is titleized.
#[derive(Clone)]
pub enum Strip {
  /// Remove every occurrence of each word, then trim leading and trailing
  /// `-`.
  Words(Vec<String>),
  /// Delegate to a caller-supplied function.
  Custom(TextFn),
}

impl fmt::Debug for Slugify {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Default => f.write_str("Default"),
      Self::Disabled => f.write_str("Disabled"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

impl fmt::Debug for Linkify {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Enabled => f.write_str("Enabled"),
      Self::Disabled => f.write_str("Disabled"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

impl fmt::Debug for Titleize {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Enabled => f.write_str("Enabled"),
      Self::Disabled => f.write_str("Disabled"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

impl fmt::Debug for Strip {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Words(words) => f.debug_tuple("Words").field(words).finish(),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

/// Default opening text written in front of an inserted TOC.
pub const DEFAULT_OPEN: &str = "<!-- toc -->\n\n";

/// Default closing marker written after an inserted TOC.
pub const DEFAULT_CLOSE: &str = "<!-- tocstop -->";

/// Pattern matching both the opening and the closing marker.
pub const DEFAULT_MARKER_PATTERN: &str = r"<!-- toc(?:\s*stop)?\s*-->";

/// Options for generating and inserting a table of contents.
#[derive(Clone)]
pub struct TocOptions {
  /// Include the first heading of the document.
  pub firsth1: bool,

  /// Remove HTML-like tags from headings before slugifying.
  pub strip_heading_tags: bool,

  /// Deepest heading level listed (inclusive).
  pub maxdepth: u8,

  /// Bullet glyph per heading level. The last glyph is reused for deeper
  /// levels.
  pub bullets: Vec<String>,

  /// Indentation added per nesting step.
  pub indent: String,

  /// Line added after the list.
  pub append: Option<String>,

  /// Only headings accepted by this predicate are listed.
  pub filter: Option<FilterFn>,

  pub slugify: Slugify,

  pub linkify: Linkify,

  pub titleize: Titleize,

  /// Words stripped from link text.
  pub strip: Option<Strip>,

  /// Text written before an inserted TOC.
  pub open: String,

  /// Text written after an inserted TOC.
  pub close: String,

  /// Pattern matching TOC markers. [`DEFAULT_MARKER_PATTERN`] when `None`.
  pub marker: Option<Regex>,

  /// Pre-rendered TOC used when replacing an existing one.
  pub toc: Option<String>,

  /// Options for the Markdown tokenizer.
  pub tokenizer: TokenizerOptions,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      firsth1:            true,
      strip_heading_tags: true,
      maxdepth:           6,
      bullets:            vec!["-".to_string(), "*".to_string(), "+".to_string()],
      indent:             "  ".to_string(),
      append:             None,
      filter:             None,
      slugify:            Slugify::Default,
      linkify:            Linkify::Enabled,
      titleize:           Titleize::Enabled,
      strip:              None,
      open:               DEFAULT_OPEN.to_string(),
      close:              DEFAULT_CLOSE.to_string(),
      marker:             None,
      toc:                None,
      tokenizer:          TokenizerOptions::default(),
    }
  }
}

impl fmt::Debug for TocOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TocOptions")
      .field("firsth1", &self.firsth1)
      .field("strip_heading_tags", &self.strip_heading_tags)
      .field("maxdepth", &self.maxdepth)
      .field("bullets", &self.bullets)
      .field("indent", &self.indent)
      .field("append", &self.append)
      .field("filter", &self.filter.as_ref().map(|_| ".."))
      .field("slugify", &self.slugify)
      .field("linkify", &self.linkify)
      .field("titleize", &self.titleize)
      .field("strip", &self.strip)
      .field("open", &self.open)
      .field("close", &self.close)
      .field("marker", &self.marker.as_ref().map(Regex::as_str))
      .field("toc", &self.toc)
      .field("tokenizer", &self.tokenizer)
      .finish()
  }
}

impl TocOptions {
  /// Slug options for a heading with the given disambiguator.
  #[must_use]
  pub fn slug_options(&self, num: usize) -> SlugOptions {
    SlugOptions {
      strategy: self.slugify.clone(),
      strip_heading_tags: self.strip_heading_tags,
      num,
    }
  }
}

/// Main table of contents generator.
///
/// Cheap to clone; hooks are reference counted.
#[derive(Debug, Clone, Default)]
pub struct TocGenerator {
  pub(crate) options: TocOptions,
}

/// Builder for constructing [`TocOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct TocOptionsBuilder {
  options: TocOptions,
}

impl TocOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Include or drop the first heading.
  #[must_use]
  pub const fn firsth1(mut self, enabled: bool) -> Self {
    self.options.firsth1 = enabled;
    self
  }

  /// Strip HTML-like tags from headings before slugifying.
  #[must_use]
  pub const fn strip_heading_tags(mut self, enabled: bool) -> Self {
    self.options.strip_heading_tags = enabled;
    self
  }

  /// Set the deepest heading level listed.
  #[must_use]
  pub const fn maxdepth(mut self, depth: u8) -> Self {
    self.options.maxdepth = depth;
    self
  }

  /// Set the bullet glyphs, one per level.
  #[must_use]
  pub fn bullets<I, S>(mut self, bullets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.options.bullets = bullets.into_iter().map(Into::into).collect();
    self
  }

  /// Set the indentation unit.
  #[must_use]
  pub fn indent<S: Into<String>>(mut self, indent: S) -> Self {
    self.options.indent = indent.into();
    self
  }

  /// Set a line appended after the list.
  #[must_use]
  pub fn append<S: Into<String>>(mut self, append: Option<S>) -> Self {
    self.options.append = append.map(Into::into);
    self
  }

  /// Only list headings accepted by the predicate.
  #[must_use]
  pub fn filter<F>(mut self, filter: F) -> Self
  where
    F: Fn(&str, &Heading, &[Heading]) -> bool + Send + Sync + 'static,
  {
    self.options.filter = Some(Arc::new(filter));
    self
  }

  #[must_use]
  pub fn slugify(mut self, slugify: Slugify) -> Self {
    self.options.slugify = slugify;
    self
  }

  #[must_use]
  pub fn linkify(mut self, linkify: Linkify) -> Self {
    self.options.linkify = linkify;
    self
  }

  #[must_use]
  pub fn titleize(mut self, titleize: Titleize) -> Self {
    self.options.titleize = titleize;
    self
  }

  /// Strip the given words from link text.
  #[must_use]
  pub fn strip<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let words: Vec<String> = words.into_iter().map(Into::into).collect();
    self.options.strip = (!words.is_empty()).then_some(Strip::Words(words));
    self
  }

  /// Set the text written before an inserted TOC.
  #[must_use]
  pub fn open<S: Into<String>>(mut self, open: S) -> Self {
    self.options.open = open.into();
    self
  }

  /// Set the text written after an inserted TOC.
  #[must_use]
  pub fn close<S: Into<String>>(mut self, close: S) -> Self {
    self.options.close = close.into();
    self
  }

  /// Use a custom pattern for locating TOC markers.
  ///
  /// # Errors
  ///
  /// Returns an error if the pattern is not a valid regular expression.
  pub fn marker(mut self, pattern: &str) -> TocResult<Self> {
    self.options.marker = Some(Regex::new(pattern)?);
    Ok(self)
  }

  /// Use a pre-rendered TOC when replacing an existing one.
  #[must_use]
  pub fn toc<S: Into<String>>(mut self, toc: Option<S>) -> Self {
    self.options.toc = toc.map(Into::into);
    self
  }

  /// Enable or disable GitHub Flavored Markdown in the tokenizer.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.tokenizer.gfm = enabled;
    self
  }

  /// Build the final [`TocOptions`].
  #[must_use]
  pub fn build(self) -> TocOptions {
    self.options
  }
}
