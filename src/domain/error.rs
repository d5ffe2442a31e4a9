use thiserror::Error;

/// Reasons a configuration snapshot can be rejected.
///
/// Rejection happens before anything is applied, so the scene keeps
/// rendering its previous collection.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported shape kind: {0:?}")]
    UnsupportedShapeKind(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
