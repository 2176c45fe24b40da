//! Drive a single marktoc invocation: resolve configuration, read input and
//! either print a TOC or splice one into a file.
use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::{debug, info};
use marktoc_config::Config;
use marktoc_core::TocGenerator;

use crate::cli::Cli;

/// Resolve the configuration for `cli`: config files (or a discovered one),
/// `--config` overrides, then explicit flags.
///
/// # Errors
///
/// Returns an error if a config file cannot be loaded or the resulting
/// configuration is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
  let mut config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;
  cli.merge_into(&mut config);
  Ok(config)
}

/// Run marktoc as described by `cli`, writing any printed output to `out`.
///
/// # Errors
///
/// Returns an error if configuration, reading, TOC generation or writing
/// fails.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
  let config = resolve_config(cli)?;
  let generator = TocGenerator::new(config.to_toc_options()?);

  if cli.insert {
    let Some(path) = cli.input_path() else {
      bail!("--insert needs a file path, standard input cannot be rewritten");
    };
    return insert_in_place(&generator, path);
  }

  let markdown = read_input(cli.input_path())?;
  let output = generator.generate(&markdown)?;
  debug!(
    "Listed {} headings (highest level {})",
    output.json.len(),
    output.highest
  );

  if cli.json {
    serde_json::to_writer_pretty(&mut *out, &output)
      .wrap_err("Failed to serialize TOC output")?;
    writeln!(out)?;
  } else {
    writeln!(out, "{}", output.content)?;
  }

  Ok(())
}

/// Replace the TOC between the markers of `path`, writing the file back only
/// when its content changed.
fn insert_in_place(generator: &TocGenerator, path: &Path) -> Result<()> {
  let original = fs::read_to_string(path)
    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

  let updated = generator
    .insert(&original)
    .wrap_err_with(|| format!("Failed to insert TOC into {}", path.display()))?;

  if updated == original {
    info!("{} is up to date", path.display());
    return Ok(());
  }

  fs::write(path, updated)
    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
  info!("Updated TOC in {}", path.display());
  Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) => {
      fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
    },
    None => {
      let mut buffer = String::new();
      io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read standard input")?;
      Ok(buffer)
    },
  }
}
