//! Core implementation of the TOC generator.
//!
//! Holds `TocGenerator`'s pipeline (tokenize, extract, render) and the
//! heading extraction pass.
use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::{insert, render, types::{TocGenerator, TocOptions}};
use crate::{
  error::TocResult,
  front_matter,
  slug::slugify,
  tokens::{Token, tokenize},
  types::{Heading, RenderedToc, TocOutput},
};

impl TocGenerator {
  /// Create a new `TocGenerator` with the given options.
  #[must_use]
  pub const fn new(options: TocOptions) -> Self {
    Self { options }
  }

  /// Access generator options.
  #[must_use]
  pub const fn options(&self) -> &TocOptions {
    &self.options
  }

  /// Generate the table of contents for a Markdown document.
  ///
  /// Front-matter is skipped so its delimiters are never read as headings.
  ///
  /// # Errors
  ///
  /// Returns an error if the tokenizer fails on the input.
  pub fn generate(&self, markdown: &str) -> TocResult<TocOutput> {
    let (_, body) = front_matter::split(markdown);
    self.generate_body(body)
  }

  /// Generate the table of contents for text known to carry no front-matter.
  pub(crate) fn generate_body(&self, body: &str) -> TocResult<TocOutput> {
    let tokens = tokenize(body, &self.options.tokenizer)?;
    let headings = self.extract(&tokens);
    let rendered = self.render(headings);
    Ok(TocOutput::new(rendered, tokens))
  }

  /// Extract heading records from a token tree.
  #[must_use]
  pub fn extract(&self, tokens: &[Token]) -> Vec<Heading> {
    extract_headings(tokens, &self.options)
  }

  /// Render heading records as a bullet list.
  #[must_use]
  pub fn render(&self, headings: Vec<Heading>) -> RenderedToc {
    render::render(headings, &self.options)
  }

  /// Insert or refresh the TOC between the markers of a document.
  ///
  /// # Errors
  ///
  /// Returns an error if the document has no marker or more than one TOC, or
  /// if the tokenizer fails.
  pub fn insert(&self, document: &str) -> TocResult<String> {
    insert::insert(self, document)
  }
}

/// Per-call extraction state.
#[derive(Default)]
struct Extraction {
  /// Next duplicate ordinal per heading content.
  seen:     HashMap<String, usize>,
  /// Slugs handed out so far.
  issued:   HashSet<String>,
  headings: Vec<Heading>,
}

impl Extraction {
  fn push(&mut self, level: u8, content: String, options: &TocOptions) {
    let ordinal = self.seen.entry(content.clone()).or_insert(0);
    let duplicate_ordinal = *ordinal;
    *ordinal += 1;

    let slug = self.unique_slug(&content, duplicate_ordinal, options);
    trace!("Heading h{level} {content:?} -> #{slug}");

    self.headings.push(Heading {
      content,
      slug,
      level,
      index: self.headings.len(),
      duplicate_ordinal,
    });
  }

  /// Slug for `content`, starting from its duplicate ordinal and bumped
  /// until it differs from every slug already issued.
  fn unique_slug(
    &mut self,
    content: &str,
    duplicate_ordinal: usize,
    options: &TocOptions,
  ) -> String {
    let mut num = duplicate_ordinal;
    let mut slug = slugify(content, &options.slug_options(num));
    while self.issued.contains(&slug) {
      num += 1;
      let next = slugify(content, &options.slug_options(num));
      // The strategy ignores the disambiguator.
      if next == slug {
        break;
      }
      slug = next;
    }
    self.issued.insert(slug.clone());
    slug
  }

  /// Collect headings nested in a heading's children. `nesting` counts
  /// heading levels below the top-level heading (1 for its direct children),
  /// not the document heading level.
  fn walk_nested(&mut self, tokens: &[Token], nesting: u8, options: &TocOptions) {
    for token in tokens {
      if let Token::Heading {
        level, children, ..
      } = token
      {
        if nesting <= options.maxdepth && *level <= options.maxdepth {
          self.push(*level, token.plain_text().trim().to_string(), options);
        }
        self.walk_nested(children, nesting.saturating_add(1), options);
      } else {
        self.walk_nested(token.children(), nesting, options);
      }
    }
  }
}

/// Extract heading records from the top-level tokens of a document.
///
/// Headings deeper than `options.maxdepth` are skipped. Indices are dense and
/// in document order; duplicate ordinals count earlier headings with the same
/// content, and no two records share a slug.
#[must_use]
pub fn extract_headings(tokens: &[Token], options: &TocOptions) -> Vec<Heading> {
  let mut extraction = Extraction::default();

  for token in tokens {
    let Token::Heading {
      level, children, ..
    } = token
    else {
      continue;
    };
    if *level > options.maxdepth {
      continue;
    }

    extraction.push(*level, token.plain_text().trim().to_string(), options);
    extraction.walk_nested(children, 1, options);
  }

  debug!("Extracted {} headings", extraction.headings.len());
  extraction.headings
}
