//! # marktoc - Markdown table of contents generation
//!
//! Turns the headings of a Markdown document into a nested bullet list of
//! anchor links, and keeps such a list up to date inside a document between
//! `<!-- toc -->` and `<!-- tocstop -->` markers.
//!
//! ## Quick Start
//!
//! ```rust
//! use marktoc_core::{TocGenerator, TocOptions};
//!
//! let generator = TocGenerator::new(TocOptions::default());
//! let toc = generator.generate("# Title\n\n## Install\n\n## Usage\n")?;
//!
//! assert_eq!(
//!   toc.content,
//!   "- [Title](#title)\n  * [Install](#install)\n  * [Usage](#usage)"
//! );
//! # Ok::<(), marktoc_core::TocError>(())
//! ```
//!
//! ## Updating a document in place
//!
//! ```rust
//! use marktoc_core::{TocGenerator, TocOptions};
//!
//! let generator = TocGenerator::new(TocOptions::default());
//! let updated = generator.insert("<!-- toc -->\n\n## A\n\n## B\n")?;
//!
//! assert!(updated.starts_with("<!-- toc -->\n\n* [A](#a)\n* [B](#b)"));
//! # Ok::<(), marktoc_core::TocError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use marktoc_core::{TocGenerator, TocOptionsBuilder};
//!
//! let options = TocOptionsBuilder::new()
//!   .firsth1(false)
//!   .maxdepth(3)
//!   .bullets(["*"])
//!   .build();
//!
//! let generator = TocGenerator::new(options);
//! ```

mod diacritics;
pub mod error;
pub mod front_matter;
pub mod processor;
pub mod slug;
pub mod tokens;
mod types;
pub mod utils;

pub use crate::{
  error::{TocError, TocResult},
  front_matter::FrontMatter,
  processor::{
    Linkify,
    Slugify,
    Strip,
    Titleize,
    TocGenerator,
    TocOptions,
    TocOptionsBuilder,
  },
  slug::{SlugOptions, slugify},
  tokens::{Token, TokenizerOptions, tokenize},
  types::{Heading, RenderedToc, TocOutput},
};
