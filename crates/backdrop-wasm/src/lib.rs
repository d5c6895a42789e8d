//! WASM bridge for Backdrop — paints the backdrop image onto `#canvas`.
//!
//! Compiled via `wasm-pack build --target web`; the page calls `draw()`
//! (fire-and-forget) or awaits `drawAsync()`.

mod canvas;
mod image;

use backdrop_core::{PaintError, PaintReport, Painter};
use canvas::{CanvasSurface, WindowViewport};
use image::HtmlImageLoader;
use wasm_bindgen::prelude::*;

/// Paint the backdrop and overlay line.
///
/// Returns as soon as the image load is issued. Drawing happens when the
/// image arrives; failures are logged to the console.
#[wasm_bindgen]
pub fn draw() {
    init_runtime();

    let painter = Painter::default();
    let surface = match CanvasSurface::find(&painter.config().canvas_id) {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("backdrop: {err}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = paint(&painter, &surface).await {
            log::error!("backdrop: {err}");
        }
    });
}

/// Like `draw()`, but the returned promise settles once drawing is done.
///
/// Rejects with a message if the canvas is missing or the image fails
/// to load.
#[wasm_bindgen(js_name = drawAsync)]
pub async fn draw_async() -> Result<(), JsValue> {
    init_runtime();

    let painter = Painter::default();
    let result = match CanvasSurface::find(&painter.config().canvas_id) {
        Ok(surface) => paint(&painter, &surface).await,
        Err(err) => Err(err),
    };
    result
        .map(|_| ())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

async fn paint(painter: &Painter, surface: &CanvasSurface) -> Result<PaintReport, PaintError> {
    painter
        .paint(surface, &HtmlImageLoader, &WindowViewport)
        .await
}

fn init_runtime() {
    console_error_panic_hook_setup();
    console_logger_setup();
}

fn console_logger_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_LOGGER: Once = Once::new();
        SET_LOGGER.call_once(|| {
            // Another logger may already be installed by the host page
            let _ = console_log::init_with_level(log::Level::Debug);
        });
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Backdrop WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
