//! Types for marktoc-core public API and internal use.
use serde::{Deserialize, Serialize};

use crate::tokens::Token;

/// A heading extracted from a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
  /// Heading text with inline formatting reduced to plain text.
  pub content:           String,
  /// Anchor identifier the TOC links to.
  pub slug:              String,
  /// Heading level (1-6).
  pub level:             u8,
  /// Position among all extracted headings, in document order.
  pub index:             usize,
  /// How many earlier headings had exactly the same content.
  pub duplicate_ordinal: usize,
}

/// Output of rendering a list of headings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedToc {
  /// The Markdown bullet list, lines joined by `\n`, without a trailing
  /// newline.
  pub content: String,

  /// Headings that made it into the list, after truncation and filtering.
  pub json: Vec<Heading>,

  /// Smallest heading level in `json`, or 0 when it is empty.
  pub highest: u8,
}

/// Result of generating a table of contents for a whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocOutput {
  /// Rendered Markdown list.
  pub content: String,

  /// Structured form of the listed headings.
  pub json: Vec<Heading>,

  /// Root level used for indentation.
  pub highest: u8,

  /// Raw tokenizer output the headings were taken from.
  pub tokens: Vec<Token>,
}

impl TocOutput {
  pub(crate) fn new(rendered: RenderedToc, tokens: Vec<Token>) -> Self {
    Self {
      content: rendered.content,
      json: rendered.json,
      highest: rendered.highest,
      tokens,
    }
  }
}
