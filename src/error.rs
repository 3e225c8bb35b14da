//! Error types for attribute table configuration
//!
//! Parsing itself never fails; only loading configuration can.

use std::io;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed attribute table
    #[error("Invalid attribute table: {0}")]
    Json(#[from] serde_json::Error),

    /// Two of the bold/normal/reverse styles share a code
    #[error("Style codes must be distinct: bold={bold}, normal={normal}, reverse={reverse}")]
    AmbiguousStyle { bold: i32, normal: i32, reverse: i32 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
