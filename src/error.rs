//! Error types for roster.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("student ID already exists: {0}")]
    DuplicateKey(String),

    #[error("student not found: {0}")]
    NotFound(String),

    #[error("failed to persist {format}: {reason}")]
    Persist { format: &'static str, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "file_not_found",
            Self::Parse(_) => "parse_error",
            Self::DuplicateKey(_) => "duplicate_key",
            Self::NotFound(_) => "not_found",
            Self::Persist { .. } => "persist_failed",
            Self::Serialization(_) => "serialization_error",
            Self::Config(_) => "config_error",
            Self::Csv(_) => "csv_error",
            Self::Io(_) => "io_error",
        }
    }
}
