// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::Color;

use crate::{Stroke, Surface};

/// Operation recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp<K> {
    /// The surface was resized.
    Resize(Size),
    /// A rectangle was cleared.
    Clear(Rect),
    /// An image was drawn.
    DrawImage {
        /// Key of the drawn image.
        image: K,
        /// Destination rectangle.
        dest: Rect,
    },
    /// A rectangle was outlined.
    StrokeRect {
        /// Outlined rectangle.
        rect: Rect,
        /// Stroke used.
        stroke: Stroke,
    },
    /// A rectangle was filled.
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill colour.
        color: Color,
    },
}

/// Surface that records operations instead of drawing them.
///
/// Images are recorded by cloning their key `K`, so hosts and tests can use
/// ids rather than bitmaps.
#[derive(Clone, Debug)]
pub struct RecordingSurface<K> {
    size: Size,
    ops: Vec<SurfaceOp<K>>,
}

impl<K> Default for RecordingSurface<K> {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            ops: Vec::new(),
        }
    }
}

impl<K> RecordingSurface<K> {
    /// Creates an empty surface of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Current pixel size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Recorded operations in order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp<K>] {
        &self.ops
    }

    /// Clears the log but keeps the size.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Rectangles filled so far, in order.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Rectangles outlined so far, in order.
    pub fn strokes(&self) -> impl Iterator<Item = (Rect, Stroke)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::StrokeRect { rect, stroke } => Some((*rect, *stroke)),
            _ => None,
        })
    }
}

impl<K: Clone> Surface for RecordingSurface<K> {
    type Image = K;

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.ops.push(SurfaceOp::Resize(size));
    }

    fn clear(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Clear(rect));
    }

    fn draw_image(&mut self, image: &K, dest: Rect) {
        self.ops.push(SurfaceOp::DrawImage {
            image: image.clone(),
            dest,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops.push(SurfaceOp::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }
}
