// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View: the bounded scale/position state of an image viewport.
//!
//! [`TransformEngine`] owns a single [`Transform`] describing how the main
//! image content is scaled and positioned inside its container. It exposes
//! commands rather than mutable state:
//! - [`TransformEngine::zoom_to`] with an optional fixed anchor point.
//! - [`TransformEngine::pan_by`], honoured only while zoomed in unless the
//!   [`PanPolicy`] says otherwise.
//! - [`TransformEngine::reset`], [`TransformEngine::center_view`] and
//!   [`TransformEngine::set_transform`].
//!
//! Each command passes through [`TransformEngine::clamp`] before it is
//! committed, so the scale range and the "no gap past the edges" bound hold
//! after every call. Animated commands record a [`Transition`] for the host
//! to play back; the target is committed immediately and a newer command
//! replaces an older transition.
//!
//! It does **not** own any rendering backend or input handling. Gesture
//! recognition lives in `vantage_gesture` and mini-map projection in
//! `vantage_minimap`; both only read the transform and call commands.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_view::{TransformEngine, ViewConfig};
//!
//! let mut engine = TransformEngine::new(ViewConfig::default(), Size::new(800.0, 600.0));
//!
//! // Zoom in around the top-left quadrant.
//! let anchor = Point::new(200.0, 150.0);
//! engine.zoom_to(2.0, Some(anchor), 0.0);
//! assert_eq!(engine.container_to_content(anchor), anchor);
//!
//! // Panning past the content edge is clamped.
//! let t = engine.pan_by(Vec2::new(1_000.0, 0.0));
//! assert_eq!(t.position_x, 0.0);
//!
//! // Out-of-range scales are clamped, not rejected.
//! assert_eq!(engine.zoom_to(50.0, None, 0.0).scale, 4.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod transform;

pub use config::{PanPolicy, ViewConfig};
pub use engine::{ListenerId, TransformEngine};
pub use transform::{EdgeContact, Transform, Transition};
