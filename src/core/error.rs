//! Error types for the sculpting core

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Begin/end called in the wrong interaction mode. The message is
    /// meant to be shown to the user verbatim; no state changes.
    #[error("mode error: {0}")]
    Mode(String),

    /// A mesh handed to reconstruction does not have the expected
    /// 6-vertices-per-face block layout.
    #[error("mesh structure error: {0}")]
    MeshStructure(String),

    /// Asset store failure (missing path, declined save prompt, ...)
    #[error("asset error: {0}")]
    Asset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
