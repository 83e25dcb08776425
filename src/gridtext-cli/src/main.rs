//! `gridtext` binary entry point.

use anyhow::Result;
use clap::Parser;

use gridtext_cli::cli::Cli;
use gridtext_cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.effective_log_level());

    let config = cli.to_config();
    tracing::debug!(?config, "starting showcase");

    let stdout = std::io::stdout();
    gridtext_cli::run(&config, &mut stdout.lock())
}
