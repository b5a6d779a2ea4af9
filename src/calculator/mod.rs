//! Stateful calculator with an operation history
//!
//! A [`Calculator`] records a human-readable description of every operation
//! performed on it. The history is append-only and keeps insertion order;
//! entries are never mutated or removed once added.

use crate::common::{Error, Result};

/// Calculator that logs each operation as a formatted string
///
/// Operands are `f64`; integral values display without a fractional part,
/// so `add(5.0, 3.0)` records `"5 + 3 = 8"`.
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    /// Create a calculator with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add two numbers, recording the operation
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.history.push(format!("{a} + {b} = {result}"));
        result
    }

    /// Multiply two numbers, recording the operation
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.history.push(format!("{a} * {b} = {result}"));
        result
    }

    /// View of the recorded operations, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// A single calculator operation parsed from its textual `op:a:b` form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add { a: f64, b: f64 },
    Multiply { a: f64, b: f64 },
}

impl Operation {
    /// Parse an operation from `op:a:b` form, e.g. `add:5:3` or `mul:4:7`
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::malformed(s));
        };

        let a: f64 = a.parse().map_err(|_| Error::invalid_operand(s, a))?;
        let b: f64 = b.parse().map_err(|_| Error::invalid_operand(s, b))?;

        match name {
            "add" => Ok(Self::Add { a, b }),
            "mul" | "multiply" => Ok(Self::Multiply { a, b }),
            _ => Err(Error::UnknownOperation {
                name: name.to_string(),
            }),
        }
    }

    /// Apply this operation to a calculator, returning its result
    pub fn apply(&self, calc: &mut Calculator) -> f64 {
        match *self {
            Self::Add { a, b } => calc.add(a, b),
            Self::Multiply { a, b } => calc.multiply(a, b),
        }
    }
}
