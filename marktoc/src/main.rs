use std::io;

use color_eyre::eyre::Result;
use marktoc::{cli::Cli, run};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(cli.verbosity.log_level_filter())
    .write_style(env_logger::WriteStyle::Auto)
    .init();

  let stdout = io::stdout();
  run::execute(&cli, &mut stdout.lock())
}
