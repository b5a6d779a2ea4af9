//! calc - a small calculator CLI
//!
//! Computes Fibonacci numbers and factorials, and runs sequences of
//! calculator operations that are recorded in an in-memory history.

use calc::{cli, commands::Commands, common};
use clap::Parser;

#[derive(Parser)]
#[command(name = "calc", about = "Small calculator with an operation history")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
