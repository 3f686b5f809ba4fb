//! Errors raised while loading panel configuration.
//!
//! Reading and writing style values never fails; only decoding the JSON that
//! seeds settings, capabilities, side subsets, and stores can.

use thiserror::Error;

/// Failure to decode panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON, or has the wrong shape.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A key that names no known setting path.
    #[error("unknown setting path '{0}'")]
    UnknownSetting(String),
    /// The document root (or a per-type section) is not a JSON object.
    #[error("expected a JSON object at '{0}'")]
    ExpectedObject(String),
}
