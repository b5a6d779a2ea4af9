//! Error types for the calculator CLI
//!
//! Error messages include the accepted syntax or range so a user can
//! correct the invocation without consulting the help text.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the calculator CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Operation Errors ===
    #[error("Unknown operation '{name}'. Supported operations: add, mul")]
    UnknownOperation { name: String },

    #[error("Malformed operation '{input}'. Expected op:a:b, e.g. add:5:3")]
    MalformedOperation { input: String },

    #[error("Invalid operand '{value}' in operation '{input}': not a number")]
    InvalidOperand { input: String, value: String },

    // === Range Errors ===
    #[error("{what}({n}) does not fit in 64 bits. Largest supported argument is {max}")]
    OutOfRange { what: &'static str, n: i64, max: i64 },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed operation error
    pub fn malformed(input: &str) -> Self {
        Self::MalformedOperation {
            input: input.to_string(),
        }
    }

    /// Create an invalid operand error
    pub fn invalid_operand(input: &str, value: &str) -> Self {
        Self::InvalidOperand {
            input: input.to_string(),
            value: value.to_string(),
        }
    }
}
