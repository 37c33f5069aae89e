//! MT CLI - Command line tool for browsing the milestones timeline.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mt-cli",
    version,
    about = "Milestones timeline toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mt_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("mt-cli starting");
    mt_cmd::run(cli.command, &mut std::io::stdout().lock())
}
