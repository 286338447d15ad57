// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Gesture: gesture state for image viewers.
//!
//! This crate provides small state machines for the pointer and touch
//! interactions of a zoomable image viewer:
//!
//! - [`pan`]: the `Idle`/`Panning` lifecycle of a drag, with per-move deltas.
//! - [`swipe`]: the pure decision of whether a finished drag was a page swipe.
//! - [`pinch`]: two-finger zoom tracking.
//!
//! Like the rest of Vantage, these types hold no references to the view.
//! Callers feed in samples and the view state observed at the right moment,
//! and apply the returned deltas or [`swipe::NavigationIntent`]s themselves.
//!
//! ## Telling pans and swipes apart
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_gesture::pan::PanGesture;
//! use vantage_gesture::swipe::{GestureSample, NavigationIntent, SwipeConfig, SwipeContext};
//!
//! let config = SwipeConfig::default();
//! let mut pan = PanGesture::new();
//!
//! // Zoomed in, away from both edges: a quick flick is still just a pan.
//! pan.begin(GestureSample::new(Point::new(600.0, 300.0), 0.0));
//! pan.moved(Point::new(400.0, 300.0));
//! let zoomed = SwipeContext::at_scale(2.0, 1.0);
//! let end = GestureSample::new(Point::new(400.0, 300.0), 150.0);
//! assert_eq!(pan.end(end, &zoomed, &config), None);
//!
//! // At the minimum scale the same flick turns the page.
//! pan.begin(GestureSample::new(Point::new(600.0, 300.0), 1_000.0));
//! let end = GestureSample::new(Point::new(400.0, 300.0), 1_150.0);
//! let fitted = SwipeContext::at_scale(1.0, 1.0);
//! assert_eq!(pan.end(end, &fitted, &config), Some(NavigationIntent::Next));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod pinch;
pub mod swipe;
