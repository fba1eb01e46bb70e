use clap::Parser;
use eyre::Result;

use oncorisk_cli::cli::Cli;
use oncorisk_cli::{commands, config, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path = config::resolve_path(cli.config.as_deref())?;
    let mut config = config::load_config(&path)?;
    if let Some(model) = cli.model {
        config.model_path = Some(model);
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    logging::init(&config.log_level, config.log_format);
    tracing::debug!(path = %path.display(), "configuration loaded");

    let output = commands::run(&cli.command, &config, &path)?;
    println!("{output}");
    Ok(())
}
