//! Generator errors
//!
//! Placement and shortcut failures are expected outcomes and never surface here.
//! Only configuration problems are errors.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Errors raised before or while setting up a generation run
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Configuration file not found: '{path}'")]
    ConfigNotFound { path: String },

    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "std")]
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl GenError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
