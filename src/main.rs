use anyhow::Context;
use clap::Parser;
use zoo_routine::app::demo::build_demo_zoo;
use zoo_routine::utils::logger;
use zoo_routine::{CliConfig, ConsoleAnnouncer};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let zoo = build_demo_zoo();
    let mut console = ConsoleAnnouncer::stdout();

    zoo.run_routine(&mut console)
        .context("Failed to write the zoo routine to stdout")?;

    Ok(())
}
