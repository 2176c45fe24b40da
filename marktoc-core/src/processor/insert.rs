//! In-place TOC insertion between `<!-- toc -->` markers.
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::types::{DEFAULT_MARKER_PATTERN, TocGenerator};
use crate::{
  error::{TocError, TocResult},
  front_matter,
  utils::never_matching_regex,
};

static DEFAULT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(DEFAULT_MARKER_PATTERN).unwrap_or_else(|e| {
    log::error!("Failed to compile DEFAULT_MARKER_RE regex: {e}");
    never_matching_regex()
  })
});

/// Insert a fresh TOC into `document`, or replace the one already there.
///
/// The document is cut at every marker and each piece trimmed. With an
/// opening marker only, a new TOC and closing marker are added after it. With
/// an existing TOC, the text between the markers is replaced. Either way the
/// TOC lists the headings after the markers. Front-matter and the trailing
/// newlines of the document are kept as they were.
pub(crate) fn insert(
  generator: &TocGenerator,
  document: &str,
) -> TocResult<String> {
  let options = &generator.options;
  let marker = options.marker.as_ref().unwrap_or(&*DEFAULT_MARKER_RE);

  let trailing_newlines =
    &document[document.trim_end_matches('\n').len()..];
  let (front_matter, body) = front_matter::split(document);

  let mut sections: Vec<String> = marker
    .split(body)
    .map(|section| section.trim().to_string())
    .collect();
  debug!("Document splits into {} sections at TOC markers", sections.len());

  match sections.len() {
    3 => {
      let toc = match &options.toc {
        Some(toc) => toc.clone(),
        None => generator.generate_body(&sections[2])?.content,
      };
      sections[1] = format!("{}{toc}", options.open);
      sections.insert(2, options.close.clone());
    },
    2 => {
      let toc = generator.generate_body(&sections[1])?.content;
      sections.insert(1, format!("{}{toc}\n\n{}", options.open, options.close));
    },
    n if n > 3 => return Err(TocError::MultipleTocs { markers: n - 1 }),
    _ => return Err(TocError::MissingMarker),
  }

  if sections.first().is_some_and(String::is_empty) {
    sections.remove(0);
  }

  let mut result = sections.join("\n\n");
  result.push_str(trailing_newlines);

  Ok(match front_matter {
    Some(front_matter) => front_matter::join(&result, &front_matter),
    None => result,
  })
}
