//! avo - command line front end for the avocado analytics pipeline.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "avo",
    version,
    about = "Avocado sales analytics: filter options, chart specifications and summaries"
)]
struct Cli {
    /// Path to the avocado sales CSV (optionally gzip-compressed)
    #[arg(short, long, global = true, env = "AVOCADO_DATA", default_value = "avocado.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: avo_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    avo_cmd::run(&cli.data, cli.command)
}
