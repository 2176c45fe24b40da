//! Error types for TOC generation and insertion.

/// Result type for marktoc operations.
pub type TocResult<T> = Result<T, TocError>;

/// Errors that can occur while generating or inserting a table of contents.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
  #[error(
    "Only one table of contents per document is supported, found {markers} \
     TOC markers"
  )]
  MultipleTocs { markers: usize },

  #[error(
    "No TOC marker found. Add `<!-- toc -->` where the table of contents \
     should go"
  )]
  MissingMarker,

  #[error("Markdown tokenizer failed: {0}")]
  Tokenizer(String),

  #[error("Invalid marker pattern: {0}")]
  Regex(#[from] regex::Error),
}
