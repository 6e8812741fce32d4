// src/errors.rs
use thiserror::Error;

/// Every way a request (or startup) can fail. The `Display` strings for the
/// three validation variants are the exact messages sent over the wire.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid numbers")]
    InvalidInput,

    #[error("Divide by zero")]
    DivideByZero,

    #[error("Unknown operation")]
    UnknownOperation,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
