
mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{reduce, sample};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);
    match &cli.command {
        Commands::Reduce(args) => reduce::run(&cli, args),
        Commands::Sample(args) => sample::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
