use clap::Parser;

/// Nothing here changes the transcript; flags only tune diagnostics.
#[derive(Debug, Clone, Parser)]
#[command(name = "zoo-routine")]
#[command(version, about = "Runs the zoo's morning routine")]
pub struct CliConfig {
    #[arg(long, short, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,
}
