//! calc - a small calculator CLI
//!
//! This library provides two numeric sequence functions (Fibonacci and
//! factorial) and a [`Calculator`] that keeps a textual history of the
//! operations performed on it.

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod common;
pub mod math;

// Re-export commonly used types for tests
pub use calculator::{Calculator, Operation};
pub use common::{Error, Result};
