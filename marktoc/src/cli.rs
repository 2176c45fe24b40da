use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use marktoc_config::Config;

/// Command line interface for marktoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Generate a Markdown table of contents, or insert one between \
           <!-- toc --> markers"
)]
pub struct Cli {
  /// Markdown file to read. Reads standard input when absent or `-`.
  #[arg(value_name = "INPUT")]
  pub input: Option<PathBuf>,

  /// Rewrite INPUT in place, placing the TOC between its markers.
  #[arg(short, long, requires = "input", conflicts_with = "json")]
  pub insert: bool,

  /// Print the headings, highest level and tokens as JSON.
  #[arg(long)]
  pub json: bool,

  /// Line appended after the generated list.
  #[arg(long)]
  pub append: Option<String>,

  /// Bullet glyph for each heading level (can be specified multiple times).
  #[arg(long, action = clap::ArgAction::Append)]
  pub bullets: Vec<String>,

  /// Indentation added for each nesting level.
  #[arg(long)]
  pub indent: Option<String>,

  /// Deepest heading level to list.
  #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
  pub maxdepth: Option<u8>,

  /// Leave out the first heading of the document.
  #[arg(long = "no-firsth1")]
  pub no_firsth1: bool,

  /// Keep HTML tags in headings when building slugs.
  #[arg(long = "no-strip-heading-tags")]
  pub no_strip_heading_tags: bool,

  /// List heading text without links.
  #[arg(long = "no-linkify")]
  pub no_linkify: bool,

  /// Use heading text as-is for link text.
  #[arg(long = "no-titleize")]
  pub no_titleize: bool,

  /// Word to strip from link text (can be specified multiple times).
  #[arg(long, action = clap::ArgAction::Append)]
  pub strip: Vec<String>,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  #[command(flatten)]
  pub verbosity: Verbosity<InfoLevel>,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// The input file, or `None` when reading standard input.
  #[must_use]
  pub fn input_path(&self) -> Option<&Path> {
    self
      .input
      .as_deref()
      .filter(|path| path.as_os_str() != "-")
  }

  /// Apply the flags given on the command line on top of `config`.
  ///
  /// Only flags that were actually passed touch the configuration, so values
  /// from config files and `--config` overrides survive otherwise.
  pub fn merge_into(&self, config: &mut Config) {
    if let Some(append) = &self.append {
      config.append = Some(append.clone());
    }
    if !self.bullets.is_empty() {
      config.bullets.clone_from(&self.bullets);
    }
    if let Some(indent) = &self.indent {
      config.indent.clone_from(indent);
    }
    if let Some(maxdepth) = self.maxdepth {
      config.maxdepth = maxdepth;
    }
    if !self.strip.is_empty() {
      config.strip.clone_from(&self.strip);
    }

    if self.no_firsth1 {
      config.firsth1 = false;
    }
    if self.no_strip_heading_tags {
      config.strip_heading_tags = false;
    }
    if self.no_linkify {
      config.linkify = false;
    }
    if self.no_titleize {
      config.titleize = false;
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_stdin_dash() {
    let cli = Cli::try_parse_from(["marktoc", "-"]).unwrap();
    assert!(cli.input_path().is_none());

    let cli = Cli::try_parse_from(["marktoc"]).unwrap();
    assert!(cli.input_path().is_none());
  }

  #[test]
  fn test_insert_requires_input() {
    assert!(Cli::try_parse_from(["marktoc", "--insert"]).is_err());
  }

  #[test]
  fn test_insert_conflicts_with_json() {
    let result =
      Cli::try_parse_from(["marktoc", "--insert", "--json", "README.md"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_maxdepth_range() {
    assert!(Cli::try_parse_from(["marktoc", "--maxdepth", "7"]).is_err());
    let cli = Cli::try_parse_from(["marktoc", "--maxdepth", "2"]).unwrap();
    assert_eq!(cli.maxdepth, Some(2));
  }

  #[test]
  fn test_flags_override_config() {
    let cli = Cli::try_parse_from([
      "marktoc",
      "--no-firsth1",
      "--bullets",
      "*",
      "--bullets",
      "-",
      "--indent",
      "    ",
    ])
    .unwrap();

    let mut config = Config {
      append: Some("kept".to_string()),
      ..Config::default()
    };
    cli.merge_into(&mut config);

    assert!(!config.firsth1);
    assert_eq!(config.bullets, vec!["*", "-"]);
    assert_eq!(config.indent, "    ");
    assert_eq!(config.append.as_deref(), Some("kept"));
    assert!(config.linkify);
  }
}
