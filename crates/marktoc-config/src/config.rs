use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use marktoc_core::{
  Linkify,
  Slugify,
  Titleize,
  TocOptions,
  TocOptionsBuilder,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for marktoc.
///
/// [`Config`] mirrors the TOC options that can be expressed as plain data.
/// Fields are typically loaded from a TOML or JSON config file, then adjusted
/// via `--config KEY=VALUE` overrides and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Include the first heading of the document.
  pub firsth1: bool,

  /// Remove HTML-like tags from headings before slugifying.
  pub strip_heading_tags: bool,

  /// Deepest heading level listed (1-6).
  pub maxdepth: u8,

  /// Bullet glyph per heading level.
  pub bullets: Vec<String>,

  /// Indentation added per nesting step.
  pub indent: String,

  /// Line added after the list.
  pub append: Option<String>,

  /// Words stripped from link text.
  pub strip: Vec<String>,

  /// Emit `[text](#slug)` links rather than plain text.
  pub linkify: bool,

  /// Clean up link text (tags removed, whitespace collapsed).
  pub titleize: bool,

  /// Slugify headings. When off, the heading text is used as the anchor.
  pub slugify: bool,

  /// Text written before an inserted TOC.
  pub open: Option<String>,

  /// Text written after an inserted TOC.
  pub close: Option<String>,

  /// Regular expression matching TOC markers.
  pub marker: Option<String>,

  /// Enable GitHub Flavored Markdown when tokenizing.
  pub gfm: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      firsth1:            true,
      strip_heading_tags: true,
      maxdepth:           6,
      bullets:            vec!["-".to_string(), "*".to_string(), "+".to_string()],
      indent:             "  ".to_string(),
      append:             None,
      strip:              Vec::new(),
      linkify:            true,
      titleize:           true,
      slugify:            true,
      open:               None,
      close:              None,
      marker:             None,
      gfm:                true,
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// The format is picked from the file extension.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Io`] if the file cannot be read,
  /// [`ConfigError::Toml`] or [`ConfigError::Serde`] if it does not parse, and
  /// [`ConfigError::Config`] for an unsupported extension.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    log::debug!("Reading {format:?} config from {}", path.display());
    let content = fs::read_to_string(path)?;

    let config: Self = match format {
      ConfigFormat::Toml => toml::from_str(&content)?,
      ConfigFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(config)
  }

  /// Load configuration from the given files (or a discovered one) and apply
  /// `KEY=VALUE` overrides.
  ///
  /// Files are merged in order, later files taking precedence. Without any
  /// file, the standard locations are searched, and defaults are used when
  /// nothing is found.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed or
  /// the resulting configuration is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;
      for config_path in rest {
        merged_config.merge(Self::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::debug!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust
  /// use marktoc_config::Config;
  ///
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&["maxdepth=3".to_string(), "bullets=*,-".to_string()])
  ///   .unwrap();
  /// assert_eq!(config.maxdepth, 3);
  /// assert_eq!(config.bullets, vec!["*", "-"]);
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value)?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
      "firsth1" => self.firsth1 = parse_bool(key, value)?,
      "strip_heading_tags" => self.strip_heading_tags = parse_bool(key, value)?,
      "linkify" => self.linkify = parse_bool(key, value)?,
      "titleize" => self.titleize = parse_bool(key, value)?,
      "slugify" => self.slugify = parse_bool(key, value)?,
      "gfm" => self.gfm = parse_bool(key, value)?,
      "maxdepth" => {
        self.maxdepth = value.trim().parse().map_err(|_| {
          ConfigError::Config(format!(
            "Invalid value for '{key}': '{value}'. Expected a number"
          ))
        })?;
      },
      "bullets" => self.bullets = parse_list(value),
      "strip" => self.strip = parse_list(value),
      // Leading and trailing whitespace is significant here.
      "indent" => self.indent = unescape(value),
      "append" => self.append = non_empty(value),
      "open" => self.open = non_empty(value),
      "close" => self.close = non_empty(value),
      "marker" => self.marker = non_empty(value.trim()),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }
    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - [`Vec<T>`] fields: Other's vec replaces this one when non-empty
  /// - Plain fields (String, bool, etc.): Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    self.firsth1 = other.firsth1;
    self.strip_heading_tags = other.strip_heading_tags;
    self.maxdepth = other.maxdepth;
    self.indent = other.indent;
    self.linkify = other.linkify;
    self.titleize = other.titleize;
    self.slugify = other.slugify;
    self.gfm = other.gfm;

    if !other.bullets.is_empty() {
      self.bullets = other.bullets;
    }
    if !other.strip.is_empty() {
      self.strip = other.strip;
    }

    if other.append.is_some() {
      self.append = other.append;
    }
    if other.open.is_some() {
      self.open = other.open;
    }
    if other.close.is_some() {
      self.close = other.close;
    }
    if other.marker.is_some() {
      self.marker = other.marker;
    }
  }

  /// Check value ranges that serde cannot express.
  ///
  /// # Errors
  ///
  /// Returns an error if `maxdepth` is outside 1..=6.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(1..=6).contains(&self.maxdepth) {
      return Err(ConfigError::Config(format!(
        "maxdepth must be between 1 and 6, got {}",
        self.maxdepth
      )));
    }
    Ok(())
  }

  /// Build the TOC options described by this configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the marker pattern
  /// does not compile.
  pub fn to_toc_options(&self) -> Result<TocOptions, ConfigError> {
    self.validate()?;

    let mut builder = TocOptionsBuilder::new()
      .firsth1(self.firsth1)
      .strip_heading_tags(self.strip_heading_tags)
      .maxdepth(self.maxdepth)
      .bullets(self.bullets.iter().cloned())
      .indent(self.indent.clone())
      .append(self.append.clone())
      .strip(self.strip.iter().cloned())
      .gfm(self.gfm)
      .slugify(if self.slugify {
        Slugify::Default
      } else {
        Slugify::Disabled
      })
      .linkify(if self.linkify {
        Linkify::Enabled
      } else {
        Linkify::Disabled
      })
      .titleize(if self.titleize {
        Titleize::Enabled
      } else {
        Titleize::Disabled
      });

    if let Some(open) = &self.open {
      builder = builder.open(open.clone());
    }
    if let Some(close) = &self.close {
      builder = builder.close(close.clone());
    }
    if let Some(marker) = &self.marker {
      builder = builder.marker(marker)?;
    }

    Ok(builder.build())
  }

  /// Search the working directory, then `$XDG_CONFIG_HOME`, for a config
  /// file. The result is computed once per process.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok()?;
        let xdg_config_home =
          std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        discover_config_file(&current_dir, xdg_config_home.as_deref())
      })
      .clone()
  }
}

/// File names looked up in the working directory, in order.
const LOCAL_CONFIG_NAMES: &[&str] = &[
  "marktoc.toml",
  "marktoc.json",
  ".marktoc.toml",
  ".marktoc.json",
];

/// File names looked up in `$XDG_CONFIG_HOME`, in order.
const XDG_CONFIG_NAMES: &[&str] = &["marktoc.toml", "marktoc.json"];

fn discover_config_file(dir: &Path, xdg_config_home: Option<&Path>) -> Option<PathBuf> {
  let local = LOCAL_CONFIG_NAMES.iter().map(|name| dir.join(name));
  let xdg = xdg_config_home
    .into_iter()
    .flat_map(|home| XDG_CONFIG_NAMES.iter().map(move |name| home.join(name)));
  local.chain(xdg).find(|candidate| candidate.is_file())
}

/// Config file formats, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
  Toml,
  Json,
}

impl ConfigFormat {
  fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_ascii_lowercase);

    match extension.as_deref() {
      Some("toml") => Ok(Self::Toml),
      Some("json") => Ok(Self::Json),
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}

fn parse_list(value: &str) -> Vec<String> {
  value
    .split(',')
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .map(ToString::to_string)
    .collect()
}

fn non_empty(value: &str) -> Option<String> {
  (!value.is_empty()).then(|| unescape(value))
}

/// Expand `\n` and `\t` escapes typed on the command line.
fn unescape(value: &str) -> String {
  value.replace("\\n", "\n").replace("\\t", "\t")
}
