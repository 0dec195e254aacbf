//! Error types for the arithmetic evaluator

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Arithmetic errors
    #[error("Integer overflow in {operation} of {operand}")]
    Overflow { operation: String, operand: String },

    #[error("Division by zero")]
    DivisionByZero,

    // Type errors
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    // System errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn overflow(operation: &str, operand: impl ToString) -> Self {
        Error::Overflow {
            operation: operation.into(),
            operand: operand.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = Error::overflow("factorial", 13);
        assert_eq!(err.to_string(), "Integer overflow in factorial of 13");
    }
}
