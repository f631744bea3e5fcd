mod args;
mod commands;
mod settings;

use crate::args::Cli;
use anyhow::Result;
use bitsd::domain::config::MapperConfig;
use bitsd_logger::Logger;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: MapperConfig = settings::load_config(cli.config.as_deref())?;
    if let Some(policy) = cli.content_policy {
        config.mapping.content_policy = policy;
    }

    let _logger = Logger::builder().name(env!("CARGO_BIN_NAME")).apply(&config.logging)?.init()?;

    commands::run(&cli.command, &config, std::io::stdout().lock())
}
