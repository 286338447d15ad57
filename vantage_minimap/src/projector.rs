// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use vantage_fit::{MAX_MINI_MAP_SIZE, fit_contain, mini_map_canvas_size};
use vantage_gallery::ImageId;
use vantage_imaging::{Color, Stroke, Surface};
use vantage_view::{Transform, TransformEngine};

use crate::project::{OverlayBands, map_point_to_target, viewport_rect};

/// Scales within this distance of the minimum count as "not zoomed".
const ZOOM_EPSILON: f64 = 1e-6;

/// Colours used for the viewport overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapStyle {
    /// Outline of the visible viewport.
    pub stroke: Stroke,
    /// Fill for the dimmed area outside the viewport.
    pub dim: Color,
}

impl Default for MiniMapStyle {
    fn default() -> Self {
        Self {
            stroke: Stroke::new(2.0, Color::from_rgba8(59, 130, 246, 255)),
            dim: Color::from_rgba8(0, 0, 0, 77),
        }
    }
}

/// Canvas size of one mini-map and where the image is drawn on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapLayout {
    /// Pixel size of the canvas.
    pub canvas: Size,
    /// Destination of the full image on the canvas.
    pub drawn: Rect,
}

impl MiniMapLayout {
    /// Lays out a mini-map for an image with the given natural size.
    ///
    /// Unknown dimensions give the fallback canvas with the image filling
    /// it, so the host can draw a placeholder until decoding finishes.
    #[must_use]
    pub fn new(natural: Option<Size>, max: Size) -> Self {
        let canvas = mini_map_canvas_size(natural, max);
        let drawn = match natural {
            Some(natural) => fit_contain(natural, canvas),
            None => canvas.to_rect(),
        };
        Self { canvas, drawn }
    }
}

/// Read-only copy of the main view that the mini-map projects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSnapshot {
    /// Current transform.
    pub transform: Transform,
    /// Configured minimum scale.
    pub min_scale: f64,
    /// Size of the main container.
    pub container: Size,
}

impl ViewSnapshot {
    /// Captures the state of `engine`.
    #[must_use]
    pub fn of(engine: &TransformEngine) -> Self {
        Self {
            transform: engine.transform(),
            min_scale: engine.config().min_scale,
            container: engine.container(),
        }
    }

    /// Returns `true` if the view is zoomed in past the minimum scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.transform.scale > self.min_scale + ZOOM_EPSILON
    }
}

/// What a click on a mini-map asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MiniMapAction {
    /// The click landed on another entry's mini-map: make it current.
    Select(ImageId),
    /// Centre the main view on this offset from the content centre.
    ///
    /// See [`map_point_to_target`] for the convention.
    Recenter(Vec2),
    /// Nothing to do.
    Ignore,
}

/// Strokes `viewport` and dims the rest of `drawn`.
pub fn draw_overlay<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: Rect,
    drawn: Rect,
    style: &MiniMapStyle,
) {
    surface.stroke_rect(viewport, &style.stroke);
    for band in OverlayBands::around(viewport, drawn).iter() {
        surface.fill_rect(band, style.dim);
    }
}

/// Draws mini-maps and interprets clicks on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapProjector {
    /// Overlay colours.
    pub style: MiniMapStyle,
    /// Largest canvas a mini-map may use.
    pub max_canvas: Size,
}

impl Default for MiniMapProjector {
    fn default() -> Self {
        Self::new(MiniMapStyle::default(), MAX_MINI_MAP_SIZE)
    }
}

impl MiniMapProjector {
    /// Creates a projector.
    #[must_use]
    pub const fn new(style: MiniMapStyle, max_canvas: Size) -> Self {
        Self { style, max_canvas }
    }

    /// Layout for an image with the given natural size.
    #[must_use]
    pub fn layout(&self, natural: Option<Size>) -> MiniMapLayout {
        MiniMapLayout::new(natural, self.max_canvas)
    }

    /// Viewport rectangle on this entry's mini-map, if it can be computed.
    #[must_use]
    pub fn viewport(&self, natural: Option<Size>, view: &ViewSnapshot) -> Option<Rect> {
        let natural = natural?;
        let layout = self.layout(Some(natural));
        viewport_rect(layout.drawn, &view.transform, view.container, natural)
    }

    /// Redraws one gallery entry's mini-map.
    ///
    /// The canvas is resized and cleared, then `image` is drawn once its
    /// natural size is known. `active` carries the main view when this entry
    /// is the one being shown; the overlay is drawn only while it is zoomed
    /// in.
    pub fn draw_entry<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        image: Option<&S::Image>,
        natural: Option<Size>,
        active: Option<&ViewSnapshot>,
    ) -> MiniMapLayout {
        let layout = self.layout(natural);
        surface.resize(layout.canvas);
        surface.clear(layout.canvas.to_rect());

        let (Some(natural), Some(image)) = (natural, image) else {
            return layout;
        };
        surface.draw_image(image, layout.drawn);

        if let Some(view) = active.filter(|view| view.is_zoomed())
            && let Some(viewport) =
                viewport_rect(layout.drawn, &view.transform, view.container, natural)
        {
            draw_overlay(surface, viewport, layout.drawn, &self.style);
        }
        layout
    }

    /// Interprets a click at `click` (canvas pixels) on `entry`'s mini-map.
    ///
    /// Clicks on an entry other than `active` select that entry. Clicks on
    /// the active entry recentre the main view, but only while it is zoomed
    /// in and the entry's dimensions are known.
    #[must_use]
    pub fn hit(
        &self,
        entry: ImageId,
        active: Option<ImageId>,
        natural: Option<Size>,
        view: &ViewSnapshot,
        click: Point,
    ) -> MiniMapAction {
        if active != Some(entry) {
            return MiniMapAction::Select(entry);
        }
        if !view.is_zoomed() {
            return MiniMapAction::Ignore;
        }
        let Some(natural) = natural else {
            return MiniMapAction::Ignore;
        };
        let layout = self.layout(Some(natural));
        match map_point_to_target(click, layout.drawn, natural, view.container) {
            Some(offset) => MiniMapAction::Recenter(offset),
            None => MiniMapAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use vantage_gallery::ImageId;
    use vantage_imaging::{RecordingSurface, SurfaceOp};
    use vantage_view::{Transform, TransformEngine, ViewConfig};

    use super::{MiniMapAction, MiniMapLayout, MiniMapProjector, ViewSnapshot};
    use vantage_fit::{FALLBACK_MINI_MAP_SIZE, MAX_MINI_MAP_SIZE};

    const CONTAINER: Size = Size::new(800.0, 600.0);
    const NATURAL: Size = Size::new(1600.0, 1200.0);

    fn zoomed_view() -> ViewSnapshot {
        ViewSnapshot {
            transform: Transform::new(2.0, -400.0, -300.0),
            min_scale: 1.0,
            container: CONTAINER,
        }
    }

    #[test]
    fn layout_fits_image_into_canvas() {
        let layout = MiniMapLayout::new(Some(NATURAL), MAX_MINI_MAP_SIZE);
        assert_eq!(layout.canvas, Size::new(240.0, 180.0));
        assert_eq!(layout.drawn, Rect::new(0.0, 0.0, 240.0, 180.0));

        let unknown = MiniMapLayout::new(None, MAX_MINI_MAP_SIZE);
        assert_eq!(unknown.canvas, FALLBACK_MINI_MAP_SIZE);
        assert_eq!(unknown.drawn, FALLBACK_MINI_MAP_SIZE.to_rect());
    }

    #[test]
    fn zoomed_entry_draws_image_then_overlay() {
        let projector = MiniMapProjector::default();
        let mut surface = RecordingSurface::<u32>::default();
        projector.draw_entry(&mut surface, Some(&7), Some(NATURAL), Some(&zoomed_view()));

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::Resize(Size::new(240.0, 180.0)));
        assert_eq!(ops[1], SurfaceOp::Clear(Rect::new(0.0, 0.0, 240.0, 180.0)));
        assert_eq!(
            ops[2],
            SurfaceOp::DrawImage {
                image: 7,
                dest: Rect::new(0.0, 0.0, 240.0, 180.0)
            }
        );
        let (outline, stroke) = surface.strokes().next().unwrap();
        assert_eq!(outline, Rect::new(60.0, 45.0, 180.0, 135.0));
        assert_eq!(stroke, projector.style.stroke);
        assert_eq!(surface.fills().count(), 4);
        assert!(surface.fills().all(|(_, c)| c == projector.style.dim));
    }

    #[test]
    fn overlay_is_skipped_at_minimum_scale_and_for_inactive_entries() {
        let projector = MiniMapProjector::default();
        let unzoomed = ViewSnapshot {
            transform: Transform::IDENTITY,
            ..zoomed_view()
        };

        let mut surface = RecordingSurface::<u32>::default();
        projector.draw_entry(&mut surface, Some(&1), Some(NATURAL), Some(&unzoomed));
        assert_eq!(surface.ops().len(), 3);

        let mut surface = RecordingSurface::<u32>::default();
        projector.draw_entry(&mut surface, Some(&1), Some(NATURAL), None);
        assert_eq!(surface.ops().len(), 3);
    }

    #[test]
    fn undecoded_entry_only_clears() {
        let projector = MiniMapProjector::default();
        let mut surface = RecordingSurface::<u32>::default();
        let layout = projector.draw_entry(&mut surface, Some(&1), None, Some(&zoomed_view()));
        assert_eq!(layout.canvas, FALLBACK_MINI_MAP_SIZE);
        assert_eq!(surface.ops().len(), 2);
        assert_eq!(surface.size(), FALLBACK_MINI_MAP_SIZE);
    }

    #[test]
    fn clicks_on_other_entries_select_them() {
        let projector = MiniMapProjector::default();
        let action = projector.hit(
            ImageId(2),
            Some(ImageId(1)),
            Some(NATURAL),
            &zoomed_view(),
            Point::new(10.0, 10.0),
        );
        assert_eq!(action, MiniMapAction::Select(ImageId(2)));
    }

    #[test]
    fn clicks_on_active_entry_recenter_only_when_zoomed() {
        let projector = MiniMapProjector::default();
        let centre = Point::new(120.0, 90.0);
        let action = projector.hit(ImageId(1), Some(ImageId(1)), Some(NATURAL), &zoomed_view(), centre);
        assert_eq!(action, MiniMapAction::Recenter(Vec2::ZERO));

        let unzoomed = ViewSnapshot {
            transform: Transform::IDENTITY,
            ..zoomed_view()
        };
        let action = projector.hit(ImageId(1), Some(ImageId(1)), Some(NATURAL), &unzoomed, centre);
        assert_eq!(action, MiniMapAction::Ignore);

        let action = projector.hit(ImageId(1), Some(ImageId(1)), None, &zoomed_view(), centre);
        assert_eq!(action, MiniMapAction::Ignore);
    }

    #[test]
    fn recenter_target_centres_clicked_point() {
        let mut engine = TransformEngine::new(ViewConfig::default(), CONTAINER);
        engine.zoom_to(2.0, Some(Point::new(100.0, 100.0)), 0.0);
        let projector = MiniMapProjector::default();
        let view = ViewSnapshot::of(&engine);

        let MiniMapAction::Recenter(offset) =
            projector.hit(ImageId(1), Some(ImageId(1)), Some(NATURAL), &view, Point::new(120.0, 90.0))
        else {
            panic!("expected a recenter");
        };
        let target = engine.position_for_focus(offset, engine.scale());
        let t = engine.set_transform(target.x, target.y, engine.scale(), 0.0);
        assert_eq!((t.position_x, t.position_y), (-400.0, -300.0));

        let shown = projector.viewport(Some(NATURAL), &ViewSnapshot::of(&engine)).unwrap();
        assert_eq!(shown.center(), Point::new(120.0, 90.0));
    }
}
