//! Error types for loading, drawing, and configuring the painter.

use thiserror::Error;

/// An image resource could not be fetched or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct LoadError {
    pub reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The drawing surface rejected an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SurfaceError {
    pub reason: String,
}

impl SurfaceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("no document available to look up #{id}")]
    NoDocument { id: String },

    #[error("element #{id} is missing or is not a canvas")]
    MissingCanvas { id: String },

    #[error("canvas #{id} has no 2d context")]
    NoContext { id: String },

    /// Nothing was drawn; the surface is left as it was.
    #[error("image load failed for {url}: {source}")]
    ImageLoad {
        url: String,
        #[source]
        source: LoadError,
    },

    #[error("drawing failed: {0}")]
    Surface(#[from] SurfaceError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid painter config: {0}")]
    Json(#[from] serde_json::Error),
}
