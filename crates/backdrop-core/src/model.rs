//! Painter data model: viewport dimensions and the overlay polyline.
//!
//! Everything here is transient. A `Viewport` is sampled once per paint,
//! at the moment the image finishes loading, and a `Polyline` is a short
//! list of literal pixel coordinates stroked over the image.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// The host window's visible area, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Something that can report the current viewport.
///
/// The painter samples this *after* the image load completes, so a source
/// backed by live window state sees any resize that happened in between.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

impl<F> ViewportSource for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}

// ─── Polyline ───────────────────────────────────────────────────────────

/// Ordered vertices of the overlay line, in surface pixels.
///
/// Vertices are literal coordinates. They are never scaled by the surface
/// or viewport size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    pub points: SmallVec<[Point; 2]>,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The two-segment overlay drawn over the backdrop image.
    pub fn backdrop() -> Self {
        Self {
            points: smallvec![Point::new(103.0, 76.0), Point::new(100.0, 15.0)],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::backdrop()
    }
}
