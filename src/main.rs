//! CLI entry point for kolam pattern analysis

use clap::Parser;
use kolam::io::cli::{Cli, init_tracing, run};

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
