//! Error types for the dashboard pipeline.

use thiserror::Error;

/// Failure of a single workbook import attempt. Never fatal to the panel:
/// the caller keeps the previous dataset and shows the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("could not decode workbook: {0}")]
    MalformedPayload(String),

    #[error("sheet `{0}` not found in workbook")]
    WrongSheet(String),

    #[error("required column `{0}` not found")]
    MissingColumn(String),
}

impl ImportError {
    /// Stable machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::MalformedPayload(_) => "malformed-payload",
            ImportError::WrongSheet(_) => "wrong-sheet",
            ImportError::MissingColumn(_) => "missing-column",
        }
    }
}

/// Programming-contract violations on the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("unknown theme `{0}` (expected `light` or `dark`)")]
    InvalidTheme(String),

    #[error("ranking size must be non-negative, got {0}")]
    InvalidRankSize(i64),
}
