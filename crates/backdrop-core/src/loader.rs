//! Image loading seam.

use crate::error::LoadError;
use std::future::Future;

/// Fetches an image resource by URL.
///
/// The returned future is the painter's only suspension point. No `Send`
/// bound is required, so browser loaders driven by the JS event loop fit.
pub trait ImageLoader {
    type Image;

    fn load(&self, url: &str) -> impl Future<Output = Result<Self::Image, LoadError>>;
}
