// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::fit::{fit_cover, is_usable};

/// Offset and per-axis scale of a cover-fit image inside a container.
///
/// `None` when either size is unusable, in which case the mappings below are
/// the identity.
fn cover_frame(container: Size, natural: Size) -> Option<(Vec2, Vec2)> {
    if !is_usable(container) || !is_usable(natural) {
        return None;
    }
    let displayed = fit_cover(natural, container);
    let origin = Vec2::new(
        (container.width - displayed.width) / 2.0,
        (container.height - displayed.height) / 2.0,
    );
    let scale = Vec2::new(
        displayed.width / natural.width,
        displayed.height / natural.height,
    );
    Some((origin, scale))
}

/// Maps a point in container coordinates to natural image pixels.
///
/// The image is assumed to be cover-fit into the container and centred, so
/// container points near the cropped edges map to image pixels that are not
/// fully visible. Points outside the container extrapolate linearly.
///
/// When either size is unknown the point is returned unchanged.
#[must_use]
pub fn container_to_image(p: Point, container: Size, natural: Size) -> Point {
    match cover_frame(container, natural) {
        Some((origin, scale)) => Point::new((p.x - origin.x) / scale.x, (p.y - origin.y) / scale.y),
        None => p,
    }
}

/// Maps a point in natural image pixels to container coordinates.
///
/// Inverse of [`container_to_image`].
#[must_use]
pub fn image_to_container(p: Point, container: Size, natural: Size) -> Point {
    match cover_frame(container, natural) {
        Some((origin, scale)) => Point::new(p.x * scale.x + origin.x, p.y * scale.y + origin.y),
        None => p,
    }
}
