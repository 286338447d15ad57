// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Largest canvas a mini-map is allowed to occupy.
pub const MAX_MINI_MAP_SIZE: Size = Size::new(250.0, 180.0);

/// Canvas size used for a mini-map whose image has not been decoded yet.
pub const FALLBACK_MINI_MAP_SIZE: Size = Size::new(200.0, 140.0);

/// Returns `true` if `size` has a finite, strictly positive width and height.
///
/// Sizes that fail this check are treated as "geometry not available" by
/// every function in this crate.
#[must_use]
pub fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Fits `content` inside `bounds`, preserving aspect ratio, and centres it.
///
/// The returned rectangle is expressed relative to the origin of `bounds`,
/// so its origin is the letterbox offset and its size is the drawn size.
///
/// If either size is unusable (see [`is_usable`]) the full bounds rectangle
/// is returned, which draws content unscaled into the whole box.
#[must_use]
pub fn fit_contain(content: Size, bounds: Size) -> Rect {
    let full = Rect::from_origin_size(Point::ORIGIN, bounds);
    if !is_usable(content) || !is_usable(bounds) {
        return full;
    }
    let aspect = content.width / content.height;
    let size = if aspect > bounds.width / bounds.height {
        Size::new(bounds.width, bounds.width / aspect)
    } else {
        Size::new(bounds.height * aspect, bounds.height)
    };
    let offset = Point::new(
        (bounds.width - size.width) / 2.0,
        (bounds.height - size.height) / 2.0,
    );
    Rect::from_origin_size(offset, size)
}

/// Scales `content` so that it fully covers `bounds`, preserving aspect ratio.
///
/// One dimension matches `bounds` exactly and the other overflows it. This
/// models how the main image fills its container.
///
/// If either size is unusable, `bounds` is returned unchanged.
#[must_use]
pub fn fit_cover(content: Size, bounds: Size) -> Size {
    if !is_usable(content) || !is_usable(bounds) {
        return bounds;
    }
    let aspect = content.width / content.height;
    if aspect > bounds.width / bounds.height {
        // Wider than the box: height fills, width is cropped.
        Size::new(bounds.height * aspect, bounds.height)
    } else {
        Size::new(bounds.width, bounds.width / aspect)
    }
}

/// Computes the canvas size for a mini-map of an image.
///
/// The canvas keeps the image's aspect ratio and fits inside `max`, rounded
/// to whole pixels. While the natural dimensions are unknown the
/// [`FALLBACK_MINI_MAP_SIZE`] is used.
#[must_use]
pub fn mini_map_canvas_size(natural: Option<Size>, max: Size) -> Size {
    match natural {
        Some(natural) if is_usable(natural) && is_usable(max) => {
            fit_contain(natural, max).size().round()
        }
        _ => FALLBACK_MINI_MAP_SIZE,
    }
}
