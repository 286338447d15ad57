// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure projections between the main view and a mini-map's drawn image.
//!
//! Three coordinate spaces meet here:
//! - **Content space**: the main view's unscaled content box, which has the
//!   container's size. The image is cover-fit into it and centred, so one
//!   axis may be cropped.
//! - **Image display space**: the full cover-fit image, `fit_cover(natural,
//!   container)` in size, with the content box centred inside it.
//! - **Mini-map space**: pixels of the mini-map canvas; the full image is
//!   contain-fit into the `drawn` rectangle.

use kurbo::{Point, Rect, Size, Vec2};
use vantage_fit::{fit_cover, is_usable};
use vantage_view::Transform;

/// Offset of the content box inside the displayed image, and the displayed
/// image size.
fn display_frame(container: Size, natural: Size) -> Option<(Vec2, Size)> {
    if !is_usable(container) || !is_usable(natural) {
        return None;
    }
    let displayed = fit_cover(natural, container);
    let crop = Vec2::new(
        (displayed.width - container.width) / 2.0,
        (displayed.height - container.height) / 2.0,
    );
    Some((crop, displayed))
}

fn usable_rect(rect: Rect) -> bool {
    is_usable(rect.size()) && rect.x0.is_finite() && rect.y0.is_finite()
}

/// Computes the rectangle of the mini-map that the main view currently shows.
///
/// `drawn` is where the full image is drawn on the mini-map canvas. The
/// result always lies inside `drawn`: a region hanging over an edge is moved
/// back in, and one larger than `drawn` is cut to fit.
///
/// Returns `None` while the container or natural dimensions are unknown.
#[must_use]
pub fn viewport_rect(
    drawn: Rect,
    transform: &Transform,
    container: Size,
    natural: Size,
) -> Option<Rect> {
    let (crop, displayed) = display_frame(container, natural)?;
    if !usable_rect(drawn) || !(transform.is_finite() && transform.scale > 0.0) {
        return None;
    }
    let fx = drawn.width() / displayed.width;
    let fy = drawn.height() / displayed.height;

    // Visible content region, moved into display space, then into the map.
    let visible_x = -transform.position_x / transform.scale + crop.x;
    let visible_y = -transform.position_y / transform.scale + crop.y;
    let x = drawn.x0 + visible_x * fx;
    let y = drawn.y0 + visible_y * fy;
    let w = container.width / transform.scale * fx;
    let h = container.height / transform.scale * fy;

    let cx = x.min(drawn.x1 - w).max(drawn.x0);
    let cy = y.min(drawn.y1 - h).max(drawn.y0);
    let cw = w.min(drawn.width() - (cx - drawn.x0));
    let ch = h.min(drawn.height() - (cy - drawn.y0));
    Some(Rect::new(cx, cy, cx + cw, cy + ch))
}

/// Maps a click on the mini-map to the content point it designates.
///
/// The result is the offset of that point from the centre of the content
/// box, in unscaled content pixels, which is independent of the current
/// zoom. Pass it to `TransformEngine::position_for_focus` to obtain the
/// position that centres the point at a given scale. Clicks in the
/// letterbox around `drawn` are clamped onto the image.
#[must_use]
pub fn map_point_to_target(
    click: Point,
    drawn: Rect,
    natural: Size,
    container: Size,
) -> Option<Vec2> {
    let (crop, displayed) = display_frame(container, natural)?;
    if !usable_rect(drawn) || !(click.x.is_finite() && click.y.is_finite()) {
        return None;
    }
    let rel_x = ((click.x - drawn.x0) / drawn.width()).clamp(0.0, 1.0);
    let rel_y = ((click.y - drawn.y0) / drawn.height()).clamp(0.0, 1.0);
    let content_x = rel_x * displayed.width - crop.x;
    let content_y = rel_y * displayed.height - crop.y;
    Some(Vec2::new(
        content_x - container.width / 2.0,
        content_y - container.height / 2.0,
    ))
}

/// Maps a content-centre offset back onto the mini-map.
///
/// Inverse of [`map_point_to_target`] for points inside `drawn`.
#[must_use]
pub fn target_to_point(offset: Vec2, drawn: Rect, natural: Size, container: Size) -> Option<Point> {
    let (crop, displayed) = display_frame(container, natural)?;
    if !usable_rect(drawn) {
        return None;
    }
    let display_x = offset.x + container.width / 2.0 + crop.x;
    let display_y = offset.y + container.height / 2.0 + crop.y;
    Some(Point::new(
        drawn.x0 + display_x / displayed.width * drawn.width(),
        drawn.y0 + display_y / displayed.height * drawn.height(),
    ))
}

/// Dimming rectangles around a viewport rectangle.
///
/// The bands cover the part of `drawn` outside the viewport without
/// overlapping each other: top and bottom span the full width, left and
/// right span only the viewport's height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayBands {
    /// Band above the viewport.
    pub top: Option<Rect>,
    /// Band below the viewport.
    pub bottom: Option<Rect>,
    /// Band left of the viewport.
    pub left: Option<Rect>,
    /// Band right of the viewport.
    pub right: Option<Rect>,
}

impl OverlayBands {
    /// Computes the bands for `viewport` inside `drawn`.
    #[must_use]
    pub fn around(viewport: Rect, drawn: Rect) -> Self {
        let mut bands = Self::default();
        if viewport.y0 > drawn.y0 {
            bands.top = Some(Rect::new(drawn.x0, drawn.y0, drawn.x1, viewport.y0));
        }
        if viewport.y1 < drawn.y1 {
            bands.bottom = Some(Rect::new(drawn.x0, viewport.y1, drawn.x1, drawn.y1));
        }
        let band_y0 = viewport.y0.max(drawn.y0);
        let band_y1 = viewport.y1.min(drawn.y1);
        if viewport.x0 > drawn.x0 {
            bands.left = Some(Rect::new(drawn.x0, band_y0, viewport.x0, band_y1));
        }
        if viewport.x1 < drawn.x1 {
            bands.right = Some(Rect::new(viewport.x1, band_y0, drawn.x1, band_y1));
        }
        bands
    }

    /// Present bands in top, bottom, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = Rect> {
        [self.top, self.bottom, self.left, self.right]
            .into_iter()
            .flatten()
    }
}
