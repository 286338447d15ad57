// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Viewer: an interactive image viewer core.
//!
//! [`ImageViewer`] ties the Vantage crates together for one viewer on screen:
//! - `vantage_view` holds the bounded scale and position of the main image;
//! - `vantage_gesture` tells pans from page swipes and tracks pinches;
//! - `vantage_gallery` orders the images and records their decoded sizes;
//! - `vantage_minimap` draws overviews and turns clicks into recentring.
//!
//! The host forwards input events and decode results, renders the main image
//! with [`ImageViewer::transform`], and redraws mini-maps with
//! [`ImageViewer::render_mini_map`] whenever the transform or gallery
//! changes.
//!
//! Decisions are logged through the [`log`] facade: navigation and
//! recentring at `debug`, pan deltas at `trace`, and decode failures at
//! `warn`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vantage_gallery::{Gallery, ImageDescriptor, ImageId};
//! use vantage_gesture::swipe::GestureSample;
//! use vantage_viewer::{ImageViewer, ViewerConfig};
//!
//! let gallery = Gallery::new([
//!     ImageDescriptor::new(ImageId(1), "Menu 1", "/image-4.png", ""),
//!     ImageDescriptor::new(ImageId(2), "Menu 2", "/image-5.png", ""),
//! ]);
//! let mut viewer = ImageViewer::new(ViewerConfig::default(), gallery, Size::new(800.0, 600.0));
//! viewer.image_decoded(ImageId(1), Size::new(1600.0, 1200.0)).unwrap();
//!
//! // A quick flick to the left at the fitted scale turns the page.
//! viewer.pan_start(GestureSample::new(Point::new(500.0, 300.0), 0.0));
//! viewer.pan_move(Point::new(300.0, 300.0));
//! let switched = viewer.pan_end(GestureSample::new(Point::new(300.0, 300.0), 100.0));
//! assert_eq!(switched, Some(ImageId(2)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod viewer;

pub use config::ViewerConfig;
pub use viewer::ImageViewer;
