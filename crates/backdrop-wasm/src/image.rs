//! `HtmlImageElement` loader.
//!
//! Wraps the element's `onload`/`onerror` callbacks in a promise so the
//! painter can await the load like any other future.

use crate::js_message;
use backdrop_core::{ImageLoader, LoadError};
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Loads images through the browser, one fresh element per call.
pub struct HtmlImageLoader;

impl ImageLoader for HtmlImageLoader {
    type Image = HtmlImageElement;

    fn load(&self, url: &str) -> impl Future<Output = Result<HtmlImageElement, LoadError>> {
        let url = url.to_string();
        async move {
            let image = HtmlImageElement::new().map_err(|e| LoadError::new(js_message(&e)))?;
            let settled = load_promise(&image);
            image.set_src(&url);

            let loaded = JsFuture::from(settled).await;
            image.set_onload(None);
            image.set_onerror(None);

            loaded.map_err(|_| LoadError::new(format!("browser could not load {url}")))?;
            Ok(image)
        }
    }
}

/// A promise resolving on the image's `load` event and rejecting on `error`.
fn load_promise(image: &HtmlImageElement) -> Promise {
    Promise::new(&mut |resolve: Function, reject: Function| {
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |event: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &event);
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
    })
}
