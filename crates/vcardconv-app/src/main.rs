use clap::Parser;
use vcardconv_app::cli::Cli;
use vcardconv_app::{logging, run};
use vcardconv_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    logging::apply_level(&filter_handle, &config.logging.level);

    run::run(&cli, &config)
}
