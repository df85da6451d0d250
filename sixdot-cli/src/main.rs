//! sixdot command-line entry point

use clap::Parser;
use sixdot_cli::commands::Commands;

/// Spanish text to six-dot Braille translator
#[derive(Debug, Parser)]
#[command(name = "sixdot", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
