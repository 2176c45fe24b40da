//! Owned token tree produced from the comrak AST.
//!
//! Comrak's arena nodes only live as long as their arena, so the parsed
//! document is converted into [`Token`], a plain sum type that headings can be
//! extracted from and that serializes to JSON for callers who want the raw
//! tokens.
use std::panic::{AssertUnwindSafe, catch_unwind};

use comrak::{
  Arena,
  nodes::{AstNode, NodeValue},
  options::Options,
  parse_document,
};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{TocError, TocResult};

/// A node of the tokenized document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
  /// ATX or setext heading.
  Heading {
    level:    u8,
    /// Heading source as written, markers included.
    source:   String,
    /// 1-based line the heading starts on.
    line:     usize,
    children: Vec<Token>,
  },
  Text {
    text: String,
  },
  CodeSpan {
    text: String,
  },
  /// Inline HTML, kept as written.
  Html {
    text: String,
  },
  Link {
    href:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text:     Option<String>,
    children: Vec<Token>,
  },
  Emphasis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text:     Option<String>,
    children: Vec<Token>,
  },
  Strong {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text:     Option<String>,
    children: Vec<Token>,
  },
  Strikethrough {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text:     Option<String>,
    children: Vec<Token>,
  },
  Image {
    src: String,
    alt: String,
  },
  /// Any other block or inline node.
  Other {
    kind:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text:     Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Token>,
  },
}

impl Token {
  /// Child tokens, empty for leaf tokens.
  #[must_use]
  pub fn children(&self) -> &[Self] {
    match self {
      Self::Heading { children, .. }
      | Self::Link { children, .. }
      | Self::Emphasis { children, .. }
      | Self::Strong { children, .. }
      | Self::Strikethrough { children, .. }
      | Self::Other { children, .. } => children,
      Self::Text { .. }
      | Self::CodeSpan { .. }
      | Self::Html { .. }
      | Self::Image { .. } => &[],
    }
  }

  /// Recover the plain text of this token and its descendants.
  ///
  /// Links prefer their own text, then their children, then the link target.
  /// Images contribute nothing.
  #[must_use]
  pub fn plain_text(&self) -> String {
    match self {
      Self::Heading { children, .. } => concat_text(children),
      Self::Text { text } | Self::CodeSpan { text } | Self::Html { text } => {
        text.clone()
      },
      Self::Link {
        href,
        text,
        children,
      } => {
        if let Some(text) = text.as_ref().filter(|t| !t.is_empty()) {
          return text.clone();
        }
        let inner = concat_text(children);
        if inner.is_empty() { href.clone() } else { inner }
      },
      Self::Emphasis { text, children }
      | Self::Strong { text, children }
      | Self::Strikethrough { text, children } => {
        text.clone().unwrap_or_else(|| concat_text(children))
      },
      Self::Image { .. } => String::new(),
      Self::Other { text, children, .. } => {
        if children.is_empty() {
          text.clone().unwrap_or_default()
        } else {
          concat_text(children)
        }
      },
    }
  }
}

/// Concatenated text of `tokens`. Nested headings are records of their own
/// and contribute nothing.
fn concat_text(tokens: &[Token]) -> String {
  tokens
    .iter()
    .filter(|token| !matches!(token, Token::Heading { .. }))
    .map(Token::plain_text)
    .collect()
}

/// Options for the comrak tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
  /// Enable GitHub Flavored Markdown extensions.
  pub gfm: bool,
}

impl Default for TokenizerOptions {
  fn default() -> Self {
    Self {
      gfm: cfg!(feature = "gfm"),
    }
  }
}

impl TokenizerOptions {
  fn comrak_options(self) -> Options<'static> {
    let mut options = Options::default();
    if self.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    options.extension.header_ids = None;
    options
  }
}

/// Tokenize a Markdown document into its top-level block tokens.
///
/// # Errors
///
/// Returns [`TocError::Tokenizer`] if the parser panics on the input.
pub fn tokenize(
  markdown: &str,
  options: &TokenizerOptions,
) -> TocResult<Vec<Token>> {
  let comrak_options = options.comrak_options();
  let lines: Vec<&str> = markdown.lines().collect();

  let tokens = catch_unwind(AssertUnwindSafe(|| {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &comrak_options);
    root
      .children()
      .map(|node| convert(node, &lines))
      .collect::<Vec<_>>()
  }))
  .map_err(|payload| {
    let message = payload
      .downcast_ref::<&str>()
      .map(ToString::to_string)
      .or_else(|| payload.downcast_ref::<String>().cloned())
      .unwrap_or_else(|| "unknown panic".to_string());
    log::error!("Panic while tokenizing markdown: {message}");
    TocError::Tokenizer(message)
  })?;

  trace!("Tokenized {} top-level blocks", tokens.len());
  Ok(tokens)
}

fn convert<'a>(node: &'a AstNode<'a>, lines: &[&str]) -> Token {
  let children = || -> Vec<Token> {
    node.children().map(|child| convert(child, lines)).collect()
  };
  let ast = node.data.borrow();

  match &ast.value {
    NodeValue::Heading(heading) => {
      let start = ast.sourcepos.start.line;
      let end = ast.sourcepos.end.line.max(start);
      let source = lines
        .get(start.saturating_sub(1)..end.min(lines.len()))
        .map(|span| span.join("\n"))
        .unwrap_or_default();
      Token::Heading {
        level: heading.level,
        source,
        line: start,
        children: children(),
      }
    },
    NodeValue::Text(text) => {
      Token::Text {
        text: text.to_string(),
      }
    },
    NodeValue::Code(code) => {
      Token::CodeSpan {
        text: code.literal.clone(),
      }
    },
    NodeValue::HtmlInline(html) => Token::Html { text: html.to_string() },
    NodeValue::Link(link) => {
      Token::Link {
        href:     link.url.clone(),
        text:     None,
        children: children(),
      }
    },
    NodeValue::Image(link) => {
      Token::Image {
        src: link.url.clone(),
        alt: concat_text(&children()),
      }
    },
    NodeValue::Emph => {
      Token::Emphasis {
        text:     None,
        children: children(),
      }
    },
    NodeValue::Strong => {
      Token::Strong {
        text:     None,
        children: children(),
      }
    },
    NodeValue::Strikethrough => {
      Token::Strikethrough {
        text:     None,
        children: children(),
      }
    },
    NodeValue::SoftBreak | NodeValue::LineBreak => {
      Token::Other {
        kind:     ast.value.xml_node_name().to_string(),
        text:     Some(" ".to_string()),
        children: Vec::new(),
      }
    },
    other => {
      Token::Other {
        kind:     other.xml_node_name().to_string(),
        text:     None,
        children: children(),
      }
    },
  }
}
