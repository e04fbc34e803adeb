//! CLI entry point for the staggered grid rendering tool

use clap::Parser;
use staggrid::io::cli::{Cli, run};

fn main() -> staggrid::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
