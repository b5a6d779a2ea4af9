//! CLI command definitions
//!
//! Defines the clap commands for the calculator CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the nth Fibonacci number
    #[command(alias = "fibonacci")]
    Fib {
        /// Index of the term to compute (negative values yield 0)
        n: i64,

        /// Print every term from fib(0) through fib(n)
        #[arg(long)]
        series: bool,
    },

    /// Compute the factorial of n
    #[command(alias = "factorial")]
    Fact {
        /// Value to compute the factorial of (values below 2 yield 1)
        n: i64,
    },

    /// Run a sequence of calculator operations
    Run {
        /// Operations in op:a:b form, e.g. add:5:3 mul:4:7
        #[arg(required = true)]
        ops: Vec<String>,

        /// Output results and history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in demonstration
    Demo,
}
