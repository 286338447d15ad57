// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Fit: aspect-ratio aware fitting and coordinate mapping.
//!
//! This crate holds the stateless geometry shared by the rest of Vantage:
//! - [`fit_contain`]: place content entirely inside a box, centred.
//! - [`fit_cover`]: scale content so that it covers a box, cropping one axis.
//! - [`container_to_image`] / [`image_to_container`]: map points between the
//!   on-screen container and the natural pixel grid of a cover-fit image.
//! - [`mini_map_canvas_size`]: size a mini-map canvas from natural dimensions.
//!
//! Every function tolerates unknown geometry. Natural dimensions are only
//! available after an image has been decoded, and containers can be zero
//! sized before the first layout pass, so a zero or non-finite size yields a
//! documented fallback instead of a division by zero.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vantage_fit::{container_to_image, fit_contain, fit_cover, image_to_container};
//!
//! let natural = Size::new(1600.0, 1200.0);
//! let container = Size::new(800.0, 400.0);
//!
//! // A 4:3 image covering a 2:1 container overflows vertically.
//! assert_eq!(fit_cover(natural, container), Size::new(800.0, 600.0));
//!
//! // Contained in a square thumbnail box, it is letterboxed.
//! let drawn = fit_contain(natural, Size::new(100.0, 100.0));
//! assert_eq!(drawn.size(), Size::new(100.0, 75.0));
//! assert_eq!(drawn.y0, 12.5);
//!
//! let p = Point::new(120.0, 80.0);
//! let back = image_to_container(container_to_image(p, container, natural), container, natural);
//! assert!((back - p).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod mapping;

pub use fit::{
    FALLBACK_MINI_MAP_SIZE, MAX_MINI_MAP_SIZE, fit_contain, fit_cover, is_usable,
    mini_map_canvas_size,
};
pub use mapping::{container_to_image, image_to_container};
