//! agro-cli - render and inspect the agrofood emissions dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "agro-cli",
    version,
    about = "Emissions and land use dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: agro_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("agro-cli {}", env!("CARGO_PKG_VERSION"));
    agro_cmd::run(cli.command)
}
