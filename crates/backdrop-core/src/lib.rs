pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod painter;
pub mod surface;

pub use config::{BACKDROP_URL, CANVAS_ID, PainterConfig};
pub use error::{ConfigError, LoadError, PaintError, SurfaceError};
pub use loader::ImageLoader;
pub use model::{Polyline, Viewport, ViewportSource};
pub use painter::{PaintReport, Painter, render};
pub use surface::{DrawOp, DrawSurface, Frame, RecordingSurface};

// Re-export kurbo's point so downstream crates don't need a direct dependency
pub use kurbo::Point;
