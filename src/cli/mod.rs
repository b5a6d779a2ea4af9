//! CLI command handling
//!
//! Dispatches parsed commands and formats their output on stdout.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{Calculator, Operation};
use crate::commands::Commands;
use crate::common::{Error, Result};
use crate::math::{self, MAX_FACT, MAX_FIB};

/// Dispatch a CLI command
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Fib { n, series } => {
            check_range("fib", n, MAX_FIB)?;
            debug!(n, series, "computing Fibonacci");

            if series {
                for i in 0..=n.max(0) {
                    println!("fib({i}) = {}", math::fibonacci(i));
                }
            } else {
                println!("fib({n}) = {}", math::fibonacci(n));
            }

            Ok(())
        }

        Commands::Fact { n } => {
            check_range("fact", n, MAX_FACT)?;
            debug!(n, "computing factorial");

            println!("{n}! = {}", math::factorial(n));

            Ok(())
        }

        Commands::Run { ops, json } => {
            let ops = ops
                .iter()
                .map(|s| Operation::parse(s))
                .collect::<Result<Vec<_>>>()?;
            debug!(count = ops.len(), "running calculator operations");

            let mut calc = Calculator::new();
            let results: Vec<f64> = ops.iter().map(|op| op.apply(&mut calc)).collect();

            if json {
                print_json_report(&results, calc.history())?;
            } else {
                for result in &results {
                    println!("{result}");
                }
                println!("History: {:?}", calc.history());
            }

            Ok(())
        }

        Commands::Demo => run_demo(),
    }
}

/// Reject arguments whose result would not fit in a u64
///
/// The guard lives here so the library functions stay free of validation.
fn check_range(what: &'static str, n: i64, max: i64) -> Result<()> {
    if n > max {
        return Err(Error::OutOfRange { what, n, max });
    }
    Ok(())
}

/// JSON document for `run --json`
#[derive(Serialize)]
struct RunReport<'a> {
    results: &'a [f64],
    history: &'a [String],
}

fn print_json_report(results: &[f64], history: &[String]) -> Result<()> {
    let report = RunReport { results, history };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// The fixed demonstration transcript
///
/// Prints ten Fibonacci terms, then performs two calculator operations and
/// prints the accumulated history. Line order is part of the contract.
fn run_demo() -> Result<()> {
    println!("Testing Fibonacci:");
    for i in 0..10 {
        println!("fib({i}) = {}", math::fibonacci(i));
    }

    println!();
    println!("Testing Calculator:");

    let mut calc = Calculator::new();
    println!("{}", calc.add(5.0, 3.0));
    println!("{}", calc.multiply(4.0, 7.0));
    println!("History: {:?}", calc.history());

    Ok(())
}
