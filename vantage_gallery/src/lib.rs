// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Gallery: the ordered set of images a viewer navigates.
//!
//! - [`Gallery`]: ordered [`ImageDescriptor`]s with a current entry,
//!   wrap-around [`Gallery::next`] / [`Gallery::previous`], and change
//!   notification.
//! - [`DimensionStore`]: natural pixel dimensions per image, tracked as
//!   [`DimensionState::Pending`], [`DimensionState::Ready`] or
//!   [`DimensionState::Failed`] while the host decodes images.
//!
//! Decoding itself is the host's job. The store records what the host
//! reports and never retries on its own.
//!
//! ```rust
//! use kurbo::Size;
//! use vantage_gallery::{DimensionStore, Gallery, ImageDescriptor, ImageId};
//!
//! let mut gallery = Gallery::new([
//!     ImageDescriptor::new(ImageId(1), "Menu 1", "/image-4.png", ""),
//!     ImageDescriptor::new(ImageId(2), "Menu 2", "/image-5.png", ""),
//! ]);
//! assert_eq!(gallery.previous(), Some(ImageId(2)));
//! assert_eq!(gallery.next(), Some(ImageId(1)));
//!
//! let mut dims = DimensionStore::new();
//! if dims.request(ImageId(1)) {
//!     // ...host starts decoding, later reports back:
//!     dims.resolve(ImageId(1), Size::new(1600.0, 1200.0)).unwrap();
//! }
//! assert_eq!(dims.get(ImageId(1)), Some(Size::new(1600.0, 1200.0)));
//! assert_eq!(dims.get(ImageId(2)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dimensions;
mod gallery;

pub use dimensions::{DecodeError, DimensionState, DimensionStore};
pub use gallery::{Gallery, ImageDescriptor, ImageId, SelectionListenerId};
