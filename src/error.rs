//! Error types for coil nesting and cost estimation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed order or config document (-3)
    ParseError = -3,
    /// Order lines or coil width rejected before computation (E10)
    InvalidInput = 10,
    /// Nested layout with zero pieces per row (E20)
    DegenerateGeometry = 20,
}

/// Main error type for the nesting engine.
#[derive(Debug, Error)]
pub enum NestError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Degenerate geometry on line {line}: width {width} yields no pieces per row on a {coil_width} coil")]
    DegenerateGeometry {
        line: usize,
        width: f64,
        coil_width: f64,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NestError {
    /// Shorthand for an [`NestError::InvalidInput`] with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        NestError::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            NestError::InvalidInput { .. } => ErrorCode::InvalidInput,
            NestError::DegenerateGeometry { .. } => ErrorCode::DegenerateGeometry,
            NestError::FileNotFound { .. } => ErrorCode::FileNotFound,
            NestError::EmptyFile { .. } => ErrorCode::EmptyFile,
            NestError::Json(_) => ErrorCode::ParseError,
            NestError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, NestError>;
