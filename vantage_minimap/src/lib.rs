// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Mini-map: a small overview of an image with the visible viewport
//! marked on it.
//!
//! Each gallery entry can show a mini-map. For the entry currently in the
//! main view, the projector:
//! - computes the [`viewport_rect`] that the main view's [`Transform`]
//!   shows, in mini-map pixels;
//! - strokes it and dims the rest of the image with [`draw_overlay`];
//! - maps clicks back to a recentring target with [`map_point_to_target`].
//!
//! Clicks on any other entry's mini-map select that entry instead
//! ([`MiniMapAction::Select`]).
//!
//! The projector never changes the view. It returns a [`MiniMapAction`] and
//! the caller feeds a recentre target through
//! `TransformEngine::position_for_focus` and `TransformEngine::set_transform`,
//! so clamping still applies.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vantage_gallery::ImageId;
//! use vantage_minimap::{MiniMapAction, MiniMapProjector, ViewSnapshot};
//! use vantage_view::{TransformEngine, ViewConfig};
//!
//! let natural = Size::new(1600.0, 1200.0);
//! let mut engine = TransformEngine::new(ViewConfig::default(), Size::new(800.0, 600.0));
//! engine.zoom_to(2.0, None, 0.0);
//!
//! let projector = MiniMapProjector::default();
//! let view = ViewSnapshot::of(&engine);
//! let viewport = projector.viewport(Some(natural), &view).unwrap();
//! assert_eq!(viewport.width(), 120.0);
//!
//! // Click the top-left of the mini-map and recentre there.
//! let action = projector.hit(ImageId(1), Some(ImageId(1)), Some(natural), &view, Point::ZERO);
//! if let MiniMapAction::Recenter(offset) = action {
//!     let target = engine.position_for_focus(offset, engine.scale());
//!     engine.set_transform(target.x, target.y, engine.scale(), 0.0);
//! }
//! assert_eq!(engine.transform().position(), Point::ZERO);
//! ```
//!
//! [`Transform`]: vantage_view::Transform
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod project;
mod projector;

pub use project::{OverlayBands, map_point_to_target, target_to_point, viewport_rect};
pub use projector::{
    MiniMapAction, MiniMapLayout, MiniMapProjector, MiniMapStyle, ViewSnapshot, draw_overlay,
};
