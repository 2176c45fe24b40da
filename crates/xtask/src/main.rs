use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use marktoc_core::{TocGenerator, TocOptions};

const BIN_NAME: &str = "marktoc";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the marktoc CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist", value_parser = clap::value_parser!(std::path::PathBuf))]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpage.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },

  /// Refresh the table of contents in the project README
  Readme {
    /// Markdown file carrying `<!-- toc -->` markers.
    #[arg(default_value = "README.md")]
    path: PathBuf,

    /// Fail instead of writing when the TOC is out of date.
    #[arg(long)]
    check: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
    } => {
      if !manpage_only {
        generate_completions(&output_dir)?;
      }
      if !completions_only {
        generate_manpage(&output_dir)?;
      }
    },
    Commands::Readme { path, check } => refresh_readme(&path, check)?,
  }

  Ok(())
}

/// Generate shell completions for various shells.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = marktoc::cli::Cli::command();
  for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
    generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate the marktoc(1) manpage.
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let man = Man::new(marktoc::cli::Cli::command());
  let file_path = man_dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| "Failed to render manpage")?;
  println!("Manpage generated in {}", man_dir.display());
  Ok(())
}

/// Splice a fresh TOC into `path`. Only headings after the marker are listed.
fn refresh_readme(path: &Path, check: bool) -> Result<()> {
  let original = fs::read_to_string(path)
    .with_context(|| format!("Failed to read {}", path.display()))?;

  let generator = TocGenerator::new(TocOptions::default());
  let updated = generator
    .insert(&original)
    .with_context(|| format!("Failed to update TOC in {}", path.display()))?;

  if updated == original {
    println!("{} is up to date", path.display());
    return Ok(());
  }
  if check {
    bail!("TOC in {} is out of date, run `cargo run -p xtask -- readme`", path.display());
  }

  fs::write(path, updated)?;
  println!("Updated TOC in {}", path.display());
  Ok(())
}
