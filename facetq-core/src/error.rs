use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a filter catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to access catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog does not match schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("catalog validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

impl CatalogError {
    /// Individual messages for schema and validation failures
    pub fn details(&self) -> Vec<String> {
        match self {
            CatalogError::Schema(errors) | CatalogError::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
