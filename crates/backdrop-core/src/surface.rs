//! Drawing surface seam and an in-memory recording implementation.
//!
//! `DrawSurface` mirrors the handful of Canvas2D calls the painter makes.
//! Methods take `&self` like a browser rendering context, so several
//! in-flight paints can share one surface; the last one to draw wins.

use crate::error::SurfaceError;
use kurbo::Point;
use std::cell::{Cell, RefCell};

pub trait DrawSurface {
    type Image;

    /// Resize the backing buffer. Clears its contents and any current path.
    fn set_size(&self, width: u32, height: u32);

    fn draw_image(&self, image: &Self::Image, at: Point) -> Result<(), SurfaceError>;

    fn begin_path(&self);

    /// Extend the current subpath. On an empty path this only sets the
    /// starting point.
    fn line_to(&self, to: Point);

    fn stroke(&self);
}

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp<I> {
    SetSize { width: u32, height: u32 },
    DrawImage { image: I, at: Point },
    BeginPath,
    LineTo(Point),
    Stroke,
}

/// What a viewer would currently see on a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<I> {
    pub width: u32,
    pub height: u32,
    /// Images drawn since the last resize, oldest first.
    pub images: Vec<(I, Point)>,
    /// Stroked polylines since the last resize, oldest first.
    pub strokes: Vec<Vec<Point>>,
}

/// Records every call in order and replays them into a `Frame`.
#[derive(Debug)]
pub struct RecordingSurface<I> {
    initial: (u32, u32),
    size: Cell<(u32, u32)>,
    ops: RefCell<Vec<DrawOp<I>>>,
}

impl<I: Clone> RecordingSurface<I> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            initial: (width, height),
            size: Cell::new((width, height)),
            ops: RefCell::new(Vec::new()),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    pub fn ops(&self) -> Vec<DrawOp<I>> {
        self.ops.borrow().clone()
    }

    pub fn is_untouched(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    /// Replay the recorded calls with canvas semantics.
    pub fn frame(&self) -> Frame<I> {
        let (width, height) = self.initial;
        let mut frame = Frame {
            width,
            height,
            images: Vec::new(),
            strokes: Vec::new(),
        };
        let mut path: Vec<Vec<Point>> = Vec::new();

        for op in self.ops.borrow().iter() {
            match op {
                DrawOp::SetSize { width, height } => {
                    frame.width = *width;
                    frame.height = *height;
                    frame.images.clear();
                    frame.strokes.clear();
                    path.clear();
                }
                DrawOp::DrawImage { image, at } => frame.images.push((image.clone(), *at)),
                DrawOp::BeginPath => path.clear(),
                DrawOp::LineTo(p) => match path.last_mut() {
                    Some(sub) => sub.push(*p),
                    None => path.push(vec![*p]),
                },
                DrawOp::Stroke => {
                    // A single point strokes nothing
                    frame
                        .strokes
                        .extend(path.iter().filter(|sub| sub.len() > 1).cloned());
                }
            }
        }
        frame
    }

    fn record(&self, op: DrawOp<I>) {
        self.ops.borrow_mut().push(op);
    }
}

impl<I: Clone> DrawSurface for RecordingSurface<I> {
    type Image = I;

    fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
        self.record(DrawOp::SetSize { width, height });
    }

    fn draw_image(&self, image: &I, at: Point) -> Result<(), SurfaceError> {
        self.record(DrawOp::DrawImage {
            image: image.clone(),
            at,
        });
        Ok(())
    }

    fn begin_path(&self) {
        self.record(DrawOp::BeginPath);
    }

    fn line_to(&self, to: Point) {
        self.record(DrawOp::LineTo(to));
    }

    fn stroke(&self) {
        self.record(DrawOp::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_surface_has_initial_size() {
        let s: RecordingSurface<&str> = RecordingSurface::new(300, 150);
        assert!(s.is_untouched());
        let frame = s.frame();
        assert_eq!((frame.width, frame.height), (300, 150));
        assert!(frame.images.is_empty());
        assert!(frame.strokes.is_empty());
    }

    #[test]
    fn first_line_to_on_empty_path_sets_start() {
        let s: RecordingSurface<&str> = RecordingSurface::new(300, 150);
        s.begin_path();
        s.line_to(Point::new(103.0, 76.0));
        s.line_to(Point::new(100.0, 15.0));
        s.stroke();
        assert_eq!(
            s.frame().strokes,
            vec![vec![Point::new(103.0, 76.0), Point::new(100.0, 15.0)]]
        );
    }

    #[test]
    fn lone_point_strokes_nothing() {
        let s: RecordingSurface<&str> = RecordingSurface::new(300, 150);
        s.begin_path();
        s.line_to(Point::new(5.0, 5.0));
        s.stroke();
        assert!(s.frame().strokes.is_empty());
    }

    #[test]
    fn resize_clears_earlier_drawing() {
        let s = RecordingSurface::new(300, 150);
        s.draw_image(&"old", Point::ZERO).unwrap();
        s.begin_path();
        s.line_to(Point::new(0.0, 0.0));
        s.line_to(Point::new(10.0, 10.0));
        s.stroke();

        s.set_size(1024, 768);
        s.draw_image(&"new", Point::ZERO).unwrap();

        let frame = s.frame();
        assert_eq!((frame.width, frame.height), (1024, 768));
        assert_eq!(frame.images, vec![("new", Point::ZERO)]);
        assert!(frame.strokes.is_empty());
        assert_eq!(s.size(), (1024, 768));
    }
}
