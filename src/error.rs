//! Error types for the patch applier

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the patch applier
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSONC: {0}")]
    InvalidJsonc(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Hideout area not found: {0}")]
    AreaNotFound(String),

    #[error("Trader not found: {0}")]
    TraderNotFound(String),

    #[error("Trader {0} has no assort")]
    AssortMissing(String),

    #[error("Assort item with template {tpl} not found for trader {trader}")]
    AssortItemNotFound { trader: String, tpl: String },

    #[error("Production recipe not found for end product: {0}")]
    RecipeNotFound(String),
}

#[cfg(feature = "python")]
impl From<PatchError> for pyo3::PyErr {
    fn from(err: PatchError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyOSError, PyValueError};

        let msg = err.to_string();
        match err {
            PatchError::ConfigRead { .. } => PyOSError::new_err(msg),
            PatchError::InvalidJsonc(_) | PatchError::Deserialization(_) => {
                PyValueError::new_err(msg)
            }
            PatchError::AreaNotFound(_)
            | PatchError::TraderNotFound(_)
            | PatchError::AssortMissing(_)
            | PatchError::AssortItemNotFound { .. }
            | PatchError::RecipeNotFound(_) => PyKeyError::new_err(msg),
        }
    }
}

/// Result type alias for the patch applier
pub type Result<T> = std::result::Result<T, PatchError>;
