// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Imaging: the drawing surface used by mini-map overlays.
//!
//! Vantage does not render anything itself. Components that need to draw,
//! such as the mini-map projector, emit a handful of canvas-like primitives
//! against the [`Surface`] trait, and the host maps those onto whatever it
//! renders with (an HTML canvas, Vello, Skia, a software rasterizer).
//!
//! The primitives are deliberately minimal:
//! - [`Surface::resize`] and [`Surface::clear`],
//! - [`Surface::draw_image`] for a host-owned bitmap,
//! - [`Surface::stroke_rect`] and [`Surface::fill_rect`].
//!
//! [`RecordingSurface`] implements the trait by logging [`SurfaceOp`]s. It
//! does **not** rasterize; it exists so tests and debugging tools can assert
//! on exactly what was drawn and in which order.
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use vantage_imaging::{RecordingSurface, Stroke, Surface, SurfaceOp};
//!
//! let mut surface = RecordingSurface::<u32>::default();
//! surface.draw_image(&7, Rect::new(0.0, 0.0, 100.0, 50.0));
//! surface.stroke_rect(Rect::new(10.0, 10.0, 40.0, 30.0), &Stroke::new(2.0, Color::WHITE));
//!
//! assert_eq!(surface.ops().len(), 2);
//! assert!(matches!(surface.ops()[0], SurfaceOp::DrawImage { image: 7, .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod record;

use kurbo::{Rect, Size};
pub use peniko::Color;

pub use record::{RecordingSurface, SurfaceOp};

/// Stroke parameters for outlined rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in surface pixels.
    pub width: f64,
    /// Line colour.
    pub color: Color,
}

impl Stroke {
    /// Creates a stroke.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Canvas-like drawing target.
///
/// Coordinates are surface pixels with the origin at the top-left corner.
/// `Image` is the host's decoded bitmap type; the surface only ever borrows
/// it.
pub trait Surface {
    /// Host bitmap type accepted by [`Surface::draw_image`].
    type Image: ?Sized;

    /// Sets the surface's pixel size. Content is not preserved.
    fn resize(&mut self, size: Size);

    /// Clears `rect` to transparent.
    fn clear(&mut self, rect: Rect);

    /// Draws `image` scaled into `dest`.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);

    /// Outlines `rect`.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Image = S::Image;

    fn resize(&mut self, size: Size) {
        (**self).resize(size);
    }

    fn clear(&mut self, rect: Rect) {
        (**self).clear(rect);
    }

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) {
        (**self).draw_image(image, dest);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        (**self).stroke_rect(rect, stroke);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }
}
