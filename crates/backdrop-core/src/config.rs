//! Painter configuration.
//!
//! The defaults are the fixed values the browser entry point uses. Embedding
//! hosts may deserialize a partial JSON object; missing fields keep their
//! defaults.

use crate::error::ConfigError;
use crate::model::Polyline;
use serde::{Deserialize, Serialize};

/// Element id of the drawing surface.
pub const CANVAS_ID: &str = "canvas";

/// Remote bitmap painted at the surface origin.
pub const BACKDROP_URL: &str = "https://mdn.mozillademos.org/files/5395/backdrop.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    pub canvas_id: String,
    pub image_url: String,
    pub polyline: Polyline,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            image_url: BACKDROP_URL.to_string(),
            polyline: Polyline::backdrop(),
        }
    }
}

impl PainterConfig {
    /// Parse a config from JSON, filling absent fields from `Default`.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(text)?;
        log::debug!("painter config loaded: {config:?}");
        Ok(config)
    }
}
