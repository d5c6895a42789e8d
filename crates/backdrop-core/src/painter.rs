//! The painter: load the backdrop image, then resize and draw.
//!
//! ```text
//! paint() ── load(url) ──► await ──► viewport() ──► set_size ──► draw_image(0,0)
//!                            │                                        │
//!                            └─ Err ─► PaintError::ImageLoad      begin_path
//!                                      (surface untouched)        line_to × N
//!                                                                 stroke
//! ```
//!
//! Nothing touches the surface until the image is in hand. Concurrent paints
//! on one surface are not coordinated: whichever load completes last leaves
//! the visible drawing.

use crate::config::PainterConfig;
use crate::error::PaintError;
use crate::loader::ImageLoader;
use crate::model::{Polyline, Viewport, ViewportSource};
use crate::surface::DrawSurface;
use kurbo::Point;

/// Outcome of a completed paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintReport {
    /// Viewport sampled at load completion; the surface was resized to it.
    pub viewport: Viewport,
    pub polyline: Polyline,
}

#[derive(Debug, Clone, Default)]
pub struct Painter {
    config: PainterConfig,
}

impl Painter {
    pub fn new(config: PainterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Load the configured image and paint it with the overlay polyline.
    ///
    /// The viewport is read only after the load finishes.
    ///
    /// # Errors
    /// `PaintError::ImageLoad` if the loader fails (the surface is not
    /// modified), or `PaintError::Surface` if the surface rejects the image.
    pub async fn paint<S, L, V>(
        &self,
        surface: &S,
        loader: &L,
        viewport: &V,
    ) -> Result<PaintReport, PaintError>
    where
        S: DrawSurface<Image = L::Image>,
        L: ImageLoader,
        V: ViewportSource + ?Sized,
    {
        let url = self.config.image_url.as_str();
        log::debug!("loading backdrop image {url}");

        let image = loader.load(url).await.map_err(|source| {
            log::warn!("backdrop image failed to load from {url}: {source}");
            PaintError::ImageLoad {
                url: url.to_string(),
                source,
            }
        })?;

        let viewport = viewport.viewport();
        render(surface, &image, viewport, &self.config.polyline)?;

        log::debug!(
            "backdrop painted at {}x{}",
            viewport.width,
            viewport.height
        );
        Ok(PaintReport {
            viewport,
            polyline: self.config.polyline.clone(),
        })
    }
}

/// Synchronous drawing pass run once the image is available.
///
/// The path is begun fresh and the first vertex is reached with `line_to`,
/// so it becomes the start point of the stroke.
///
/// # Errors
/// Propagates a surface failure from drawing the image.
pub fn render<S: DrawSurface>(
    surface: &S,
    image: &S::Image,
    viewport: Viewport,
    polyline: &Polyline,
) -> Result<(), PaintError> {
    surface.set_size(viewport.width, viewport.height);
    surface.draw_image(image, Point::ZERO)?;

    surface.begin_path();
    for point in polyline.iter() {
        surface.line_to(point);
    }
    surface.stroke();
    Ok(())
}
