//! Canvas2D drawing surface and window-backed viewport.

use crate::js_message;
use backdrop_core::{DrawSurface, PaintError, Point, SurfaceError, Viewport, ViewportSource};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A `<canvas>` element and its 2d context, looked up once per paint.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn find(id: &str) -> Result<Self, PaintError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PaintError::NoDocument { id: id.to_string() })?;

        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| PaintError::MissingCanvas { id: id.to_string() })?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| PaintError::NoContext { id: id.to_string() })?;

        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn draw_image(&self, image: &HtmlImageElement, at: Point) -> Result<(), SurfaceError> {
        self.ctx
            .draw_image_with_html_image_element(image, at.x, at.y)
            .map_err(|e| SurfaceError::new(js_message(&e)))
    }

    fn begin_path(&self) {
        self.ctx.begin_path();
    }

    fn line_to(&self, to: Point) {
        self.ctx.line_to(to.x, to.y);
    }

    fn stroke(&self) {
        self.ctx.stroke();
    }
}

/// Reads `window.innerWidth` / `window.innerHeight` on demand.
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; using an empty viewport");
            return Viewport::new(0, 0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        Viewport::new(to_pixels(width), to_pixels(height))
    }
}

/// Convert a CSS pixel reading to a backing-buffer dimension.
///
/// Missing, negative, and NaN readings become 0; fractions truncate, the
/// same as assigning to `canvas.width`.
fn to_pixels(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::to_pixels;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_pixels_pass_through() {
        assert_eq!(to_pixels(Some(1280.0)), 1280);
    }

    #[test]
    fn fractional_pixels_truncate() {
        assert_eq!(to_pixels(Some(799.75)), 799);
    }

    #[test]
    fn unusable_readings_become_zero() {
        assert_eq!(to_pixels(None), 0);
        assert_eq!(to_pixels(Some(-4.0)), 0);
        assert_eq!(to_pixels(Some(f64::NAN)), 0);
        assert_eq!(to_pixels(Some(f64::INFINITY)), 0);
    }

    #[test]
    fn huge_readings_saturate() {
        assert_eq!(to_pixels(Some(1e12)), u32::MAX);
    }
}
