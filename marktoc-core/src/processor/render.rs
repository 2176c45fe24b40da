//! Rendering heading records as an indented Markdown bullet list.
use log::debug;

use super::types::{Linkify, Strip, Titleize, TocOptions};
use crate::{
  types::{Heading, RenderedToc},
  utils::{collapse_whitespace, link_title, strip_html_tags},
};

/// Bullet used when the configured glyph is missing or empty.
const FALLBACK_BULLET: &str = "-";

/// Render heading records into a TOC.
///
/// Drops the first heading when `firsth1` is off, applies the filter, drops
/// headings deeper than `maxdepth`, then indents every heading relative to the
/// smallest remaining level. `json` and `highest` describe exactly the listed
/// headings.
#[must_use]
pub fn render(mut headings: Vec<Heading>, options: &TocOptions) -> RenderedToc {
  if !options.firsth1 && !headings.is_empty() {
    headings.remove(0);
  }

  let headings: Vec<Heading> = match &options.filter {
    Some(filter) => {
      headings
        .iter()
        .filter(|heading| filter(&heading.content, heading, &headings))
        .cloned()
        .collect()
    },
    None => headings,
  }
  .into_iter()
  .filter(|heading| heading.level <= options.maxdepth)
  .collect();

  let items: Vec<(u8, String)> = headings
    .iter()
    .map(|heading| (heading.level, list_item(heading, options)))
    .collect();

  let mut content = bullets(&items, options);
  if let Some(append) = &options.append {
    if !content.is_empty() {
      content.push('\n');
    }
    content.push_str(append);
  }

  let highest = highest_level(&headings);
  debug!("Rendered {} headings, root level {highest}", headings.len());

  RenderedToc {
    content,
    json: headings,
    highest,
  }
}

/// Render `(level, text)` pairs as a bullet list.
///
/// Items at the smallest level are not indented, every level below adds one
/// `options.indent`. The bullet is picked by absolute level, reusing the last
/// glyph for levels past the end of `options.bullets`.
///
/// # Examples
///
/// ```
/// use marktoc_core::{TocOptions, processor::bullets};
///
/// let items = [(2, "a".to_string()), (3, "b".to_string()), (2, "c".to_string())];
/// assert_eq!(bullets(&items, &TocOptions::default()), "* a\n  + b\n* c");
/// ```
#[must_use]
pub fn bullets(items: &[(u8, String)], options: &TocOptions) -> String {
  let highest = items.iter().map(|(level, _)| *level).min().unwrap_or(0);

  items
    .iter()
    .map(|(level, text)| {
      let depth = usize::from(level.saturating_sub(highest));
      format!(
        "{}{} {text}",
        options.indent.repeat(depth),
        bullet_for(*level, &options.bullets)
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn bullet_for(level: u8, bullets: &[String]) -> &str {
  let Some(last) = bullets.len().checked_sub(1) else {
    return FALLBACK_BULLET;
  };
  let index = usize::from(level.saturating_sub(1)).min(last);
  bullets
    .get(index)
    .map(String::as_str)
    .filter(|bullet| !bullet.is_empty())
    .unwrap_or(FALLBACK_BULLET)
}

fn highest_level(headings: &[Heading]) -> u8 {
  headings.iter().map(|heading| heading.level).min().unwrap_or(0)
}

/// Text placed after the bullet for a single heading.
fn list_item(heading: &Heading, options: &TocOptions) -> String {
  match &options.linkify {
    Linkify::Enabled => {
      linkify(&heading_text(&heading.content, options), &heading.slug)
    },
    Linkify::Custom(custom) => {
      custom(heading, &heading_text(&heading.content, options))
    },
    Linkify::Disabled => heading.content.clone(),
  }
}

/// Link text for heading content: stripped words removed, then titleized.
fn heading_text(content: &str, options: &TocOptions) -> String {
  let stripped = match &options.strip {
    Some(strip) => strip_words(content, strip),
    None => content.to_string(),
  };
  titleize(&stripped, &options.titleize)
}

/// Format a single `[text](#slug)` link.
///
/// # Examples
///
/// ```
/// use marktoc_core::processor::linkify;
///
/// assert_eq!(linkify("Getting Started", "getting-started"), "[Getting Started](#getting-started)");
/// ```
#[must_use]
pub fn linkify(text: &str, slug: &str) -> String {
  format!("[{text}](#{slug})")
}

/// Derive link text from heading content.
///
/// # Examples
///
/// ```
/// use marktoc_core::{Titleize, processor::titleize};
///
/// assert_eq!(titleize("  Hello   <em>world</em> ", &Titleize::Enabled), "Hello world");
/// assert_eq!(titleize("[Docs](#docs)", &Titleize::Enabled), "Docs");
/// assert_eq!(titleize(" raw ", &Titleize::Disabled), " raw ");
/// ```
#[must_use]
pub fn titleize(content: &str, titleize: &Titleize) -> String {
  match titleize {
    Titleize::Disabled => content.to_string(),
    Titleize::Custom(custom) => custom(content),
    Titleize::Enabled => {
      let title = strip_html_tags(link_title(content));
      collapse_whitespace(&title).trim().to_string()
    },
  }
}

/// Remove stripped words from link text.
fn strip_words(text: &str, strip: &Strip) -> String {
  match strip {
    Strip::Custom(custom) => custom(text),
    Strip::Words(words) => {
      let mut stripped = text.trim().to_string();
      for word in words.iter().filter(|word| !word.is_empty()) {
        stripped = stripped.replace(word.as_str(), "");
      }
      let stripped = stripped.strip_prefix('-').unwrap_or(&stripped);
      stripped.strip_suffix('-').unwrap_or(stripped).to_string()
    },
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  fn heading(content: &str, level: u8, index: usize) -> Heading {
    Heading {
      content: content.to_string(),
      slug: crate::slugify(content, &crate::SlugOptions::default()),
      level,
      index,
      duplicate_ordinal: 0,
    }
  }

  fn sample() -> Vec<Heading> {
    vec![
      heading("Title", 1, 0),
      heading("Section A", 2, 1),
      heading("Detail", 3, 2),
      heading("Section B", 2, 3),
    ]
  }

  #[test]
  fn test_default_render() {
    let toc = render(sample(), &TocOptions::default());
    assert_eq!(
      toc.content,
      "- [Title](#title)\n  * [Section A](#section-a)\n    + \
       [Detail](#detail)\n  * [Section B](#section-b)"
    );
    assert_eq!(toc.highest, 1);
    assert_eq!(toc.json.len(), 4);
  }

  #[test]
  fn test_firsth1_false_drops_first_entry_only() {
    let options = TocOptions {
      firsth1: false,
      ..TocOptions::default()
    };
    let toc = render(sample(), &options);
    assert_eq!(
      toc.content,
      "* [Section A](#section-a)\n  + [Detail](#detail)\n* [Section B](#section-b)"
    );
    assert_eq!(toc.highest, 2);
    assert_eq!(toc.json[0].index, 1);
  }

  #[test]
  fn test_firsth1_false_drops_positional_first() {
    let options = TocOptions {
      firsth1: false,
      ..TocOptions::default()
    };
    let toc = render(vec![heading("Intro", 2, 0), heading("Top", 1, 1)], &options);
    assert_eq!(toc.content, "- [Top](#top)");
  }

  #[test]
  fn test_empty_input() {
    let toc = render(Vec::new(), &TocOptions::default());
    assert_eq!(toc, RenderedToc::default());
  }

  #[test]
  fn test_filter_sees_truncated_list() {
    let options = TocOptions {
      firsth1: false,
      filter: Some(Arc::new(|content: &str, _heading: &Heading, all: &[Heading]| {
        assert_eq!(all.len(), 3);
        content != "Detail"
      })),
      ..TocOptions::default()
    };
    let toc = render(sample(), &options);
    assert_eq!(toc.content, "* [Section A](#section-a)\n* [Section B](#section-b)");
    assert_eq!(toc.json.len(), 2);
  }

  #[test]
  fn test_highest_comes_from_filtered_list() {
    let options = TocOptions {
      filter: Some(Arc::new(|_: &str, heading: &Heading, _: &[Heading]| {
        heading.level > 1
      })),
      ..TocOptions::default()
    };
    let toc = render(sample(), &options);
    assert_eq!(toc.highest, 2);
    assert!(toc.content.starts_with("* [Section A]"));
  }

  #[test]
  fn test_maxdepth_applies_to_json_and_highest() {
    let options = TocOptions {
      maxdepth: 2,
      ..TocOptions::default()
    };
    let toc = render(vec![heading("Deep", 4, 0), heading("Top", 2, 1)], &options);
    assert_eq!(toc.content, "* [Top](#top)");
    assert_eq!(toc.json.len(), 1);
    assert_eq!(toc.json[0].content, "Top");
    assert_eq!(toc.highest, 2);
  }

  #[test]
  fn test_bullet_reuse_and_fallback() {
    let options = TocOptions {
      bullets: vec!["*".to_string()],
      ..TocOptions::default()
    };
    assert_eq!(bullets(&[(1, "a".to_string()), (4, "b".to_string())], &options), "* a\n      * b");

    let options = TocOptions {
      bullets: vec![String::new(), "+".to_string()],
      ..TocOptions::default()
    };
    assert_eq!(bullets(&[(1, "a".to_string()), (2, "b".to_string())], &options), "- a\n  + b");

    let options = TocOptions {
      bullets: Vec::new(),
      ..TocOptions::default()
    };
    assert_eq!(bullets(&[(3, "a".to_string())], &options), "- a");
  }

  #[test]
  fn test_custom_indent() {
    let options = TocOptions {
      indent: "\t".to_string(),
      ..TocOptions::default()
    };
    let toc = render(sample(), &options);
    assert!(toc.content.contains("\n\t\t+ [Detail](#detail)"));
  }

  #[test]
  fn test_linkify_disabled_uses_raw_content() {
    let options = TocOptions {
      linkify: Linkify::Disabled,
      ..TocOptions::default()
    };
    let toc = render(vec![heading("A  <b>bold</b> move", 1, 0)], &options);
    assert_eq!(toc.content, "- A  <b>bold</b> move");
  }

  #[test]
  fn test_custom_linkify() {
    let options = TocOptions {
      linkify: Linkify::Custom(Arc::new(|heading: &Heading, text: &str| {
        format!("<a href=\"#{}\">{text}</a>", heading.slug)
      })),
      ..TocOptions::default()
    };
    let toc = render(vec![heading("Intro", 1, 0)], &options);
    assert_eq!(toc.content, "- <a href=\"#intro\">Intro</a>");
  }

  #[test]
  fn test_titleize_strips_tags() {
    let toc = render(vec![heading("Hello <code>world</code>", 2, 0)], &TocOptions::default());
    assert_eq!(toc.content, "* [Hello world](#hello-world)");
  }

  #[test]
  fn test_titleize_replaces_tab() {
    assert_eq!(titleize("Tab\tseparated", &Titleize::Enabled), "Tab separated");
  }

  #[test]
  fn test_append() {
    let options = TocOptions {
      append: Some("_(generated)_".to_string()),
      ..TocOptions::default()
    };
    let toc = render(vec![heading("Intro", 1, 0)], &options);
    assert_eq!(toc.content, "- [Intro](#intro)\n_(generated)_");
  }

  #[test]
  fn test_strip_words() {
    let options = TocOptions {
      strip: Some(Strip::Words(vec!["foo".to_string()])),
      ..TocOptions::default()
    };
    let toc = render(vec![heading("foo-Setup", 1, 0)], &options);
    assert_eq!(toc.content, "- [Setup](#foo-setup)");
  }

  #[test]
  fn test_strip_custom() {
    let options = TocOptions {
      strip: Some(Strip::Custom(Arc::new(|text: &str| text.to_uppercase()))),
      ..TocOptions::default()
    };
    let toc = render(vec![heading("Intro", 1, 0)], &options);
    assert_eq!(toc.content, "- [INTRO](#intro)");
  }
}
