//! Front-matter handling.
//!
//! A document has front-matter when its first line is exactly `---` and a
//! later line is `---` or `...`. The block is kept byte for byte so that
//! [`join`] restores the original document.
use log::{debug, warn};

/// A front-matter block split off a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
  /// The block as written, both delimiter lines and the newline after the
  /// closing one included.
  pub raw:  String,
  /// Parsed YAML, `Null` when the block is empty or not valid YAML.
  pub data: serde_yaml::Value,
}

/// Return true if the document starts with a front-matter delimiter.
#[must_use]
pub fn has_front_matter(document: &str) -> bool {
  document.starts_with("---")
}

/// Split a document into its front-matter block (if any) and body.
///
/// # Examples
///
/// ```
/// use marktoc_core::front_matter;
///
/// let doc = "---\ntitle: Demo\n---\n# Heading\n";
/// let (meta, body) = front_matter::split(doc);
///
/// let meta = meta.expect("front-matter present");
/// assert_eq!(meta.data["title"], "Demo");
/// assert_eq!(body, "# Heading\n");
/// assert_eq!(front_matter::join(body, &meta), doc);
/// ```
#[must_use]
pub fn split(document: &str) -> (Option<FrontMatter>, &str) {
  if !has_front_matter(document) {
    return (None, document);
  }

  let mut lines = document.split_inclusive('\n');
  let Some(opening) = lines.next() else {
    return (None, document);
  };
  if opening.trim_end_matches(['\r', '\n']) != "---" || !opening.ends_with('\n')
  {
    return (None, document);
  }

  let yaml_start = opening.len();
  let mut offset = yaml_start;
  for line in lines {
    let end = offset + line.len();
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed == "---" || trimmed == "..." {
      let data = parse_yaml(&document[yaml_start..offset]);
      let front_matter = FrontMatter {
        raw: document[..end].to_string(),
        data,
      };
      debug!("Split off {} bytes of front-matter", end);
      return (Some(front_matter), &document[end..]);
    }
    offset = end;
  }

  warn!("Document starts with `---` but the front-matter block is never closed");
  (None, document)
}

/// Reattach a front-matter block to a body.
#[must_use]
pub fn join(body: &str, front_matter: &FrontMatter) -> String {
  let mut document = String::with_capacity(front_matter.raw.len() + body.len());
  document.push_str(&front_matter.raw);
  document.push_str(body);
  document
}

fn parse_yaml(yaml: &str) -> serde_yaml::Value {
  if yaml.trim().is_empty() {
    return serde_yaml::Value::Null;
  }
  match serde_yaml::from_str(yaml) {
    Ok(value) => value,
    Err(e) => {
      warn!("Error parsing front matter: {e}");
      serde_yaml::Value::Null
    },
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_no_front_matter() {
    let (meta, body) = split("# Title\n---\n");
    assert!(meta.is_none());
    assert_eq!(body, "# Title\n---\n");
  }

  #[test]
  fn test_unclosed_front_matter_is_body() {
    let (meta, body) = split("---\ntitle: x\n# Title\n");
    assert!(meta.is_none());
    assert_eq!(body, "---\ntitle: x\n# Title\n");
  }

  #[test]
  fn test_opening_must_be_exact() {
    let (meta, _) = split("----\na: 1\n---\n");
    assert!(meta.is_none());
  }

  #[test]
  fn test_dots_close_block() {
    let (meta, body) = split("---\na: 1\n...\nbody");
    let meta = meta.unwrap();
    assert_eq!(meta.raw, "---\na: 1\n...\n");
    assert_eq!(meta.data["a"], 1);
    assert_eq!(body, "body");
  }

  #[test]
  fn test_crlf_front_matter_round_trips() {
    let doc = "---\r\na: 1\r\n---\r\n# T\r\n";
    let (meta, body) = split(doc);
    let meta = meta.unwrap();
    assert_eq!(body, "# T\r\n");
    assert_eq!(join(body, &meta), doc);
  }

  #[test]
  fn test_invalid_yaml_is_preserved() {
    let doc = "---\n: : :\n  - [\n---\ntext\n";
    let (meta, body) = split(doc);
    let meta = meta.unwrap();
    assert_eq!(meta.data, serde_yaml::Value::Null);
    assert_eq!(join(body, &meta), doc);
  }

  #[test]
  fn test_empty_front_matter() {
    let (meta, body) = split("---\n---\nbody\n");
    let meta = meta.unwrap();
    assert_eq!(meta.data, serde_yaml::Value::Null);
    assert_eq!(body, "body\n");
  }
}
