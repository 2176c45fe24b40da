//! TOC processing with modular organization.
//!
//! # Architecture
//!
//! - [`core`]: `TocGenerator` pipeline and heading extraction
//! - [`render`]: bullet list rendering, titleizing and linking
//! - [`insert`]: splicing a TOC into a document between markers
//! - [`types`]: options, hooks and the generator type
pub mod core;
mod insert;
pub mod render;
pub mod types;

pub use core::extract_headings;

pub use render::{bullets, linkify, render, titleize};
pub use types::{
  DEFAULT_CLOSE,
  DEFAULT_MARKER_PATTERN,
  DEFAULT_OPEN,
  FilterFn,
  Linkify,
  LinkifyFn,
  Slugify,
  SlugifyFn,
  Strip,
  TextFn,
  Titleize,
  TocGenerator,
  TocOptions,
  TocOptionsBuilder,
};
