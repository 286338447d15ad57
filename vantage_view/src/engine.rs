// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use vantage_fit::is_usable;

use crate::config::{PanPolicy, ViewConfig};
use crate::transform::{EdgeContact, Transform, Transition};

/// Scales within this distance of the minimum count as "at minimum".
const SCALE_EPSILON: f64 = 1e-6;

/// Handle returned by [`TransformEngine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Transform)>;

/// Owner of the live [`Transform`] of the main view.
///
/// Every position-affecting operation goes through [`TransformEngine::clamp`]
/// before it is committed, so the configured scale range and bounds hold after
/// each call. Other components read the transform and issue commands; they
/// never write positions directly.
///
/// While the container has no usable size every operation is a no-op and
/// returns the current transform unchanged.
pub struct TransformEngine {
    config: ViewConfig,
    container: Size,
    transform: Transform,
    transition: Option<Transition>,
    initialized: bool,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for TransformEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformEngine")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("transform", &self.transform)
            .field("transition", &self.transition)
            .field("initialized", &self.initialized)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .field("next_listener", &self.next_listener)
            .finish()
    }
}

impl TransformEngine {
    /// Creates an engine for a container of the given size.
    ///
    /// The initial scale comes from the configuration. If the container is
    /// already usable and `center_on_init` is set, the content is centred;
    /// otherwise centring happens on the first usable [`Self::set_container`].
    #[must_use]
    pub fn new(config: ViewConfig, container: Size) -> Self {
        let config = config.normalized();
        let mut engine = Self {
            config,
            container: Size::ZERO,
            transform: Transform::new(config.initial_scale, 0.0, 0.0),
            transition: None,
            initialized: false,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        };
        engine.set_container(container);
        engine
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replaces the configuration and re-clamps the current transform.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config.normalized();
        self.commit(self.transform, 0.0);
    }

    /// Returns the container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Updates the container size, typically from a resize observer.
    ///
    /// The current transform is re-clamped against the new size. The first
    /// time a usable size arrives the content is centred if `center_on_init`
    /// is configured.
    pub fn set_container(&mut self, size: Size) {
        let size = if is_usable(size) { size } else { Size::ZERO };
        if self.container == size {
            return;
        }
        self.container = size;
        if !is_usable(size) {
            return;
        }
        if !self.initialized {
            self.initialized = true;
            if self.config.center_on_init {
                let scale = self.transform.scale;
                let centred = self.centred(scale);
                self.commit(centred, 0.0);
                return;
            }
        }
        self.commit(self.transform, 0.0);
    }

    /// Returns the committed transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the committed scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Number of committed changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the transition started by the most recent animated operation.
    ///
    /// A later operation that changes the transform replaces or clears it;
    /// one that clamps to the current transform leaves it in place.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Takes the pending transition, leaving none.
    pub fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }

    /// Registers a listener called after every committed change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Transform) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Returns `true` if the scale is at (or within epsilon of) the minimum.
    #[must_use]
    pub fn is_at_min_scale(&self) -> bool {
        self.transform.scale <= self.config.min_scale + SCALE_EPSILON
    }

    /// Zooms to `target_scale`, keeping the content under `anchor` fixed.
    ///
    /// The scale is clamped to the configured range. `anchor` is in container
    /// coordinates and defaults to the container centre. The resulting
    /// position is clamped afterwards, which can shift the anchor when the
    /// requested view would reveal space past the content edges.
    pub fn zoom_to(&mut self, target_scale: f64, anchor: Option<Point>, duration_ms: f64) -> Transform {
        if !is_usable(self.container) || !target_scale.is_finite() {
            return self.transform;
        }
        let scale = self.clamp_scale(target_scale);
        let anchor = anchor.unwrap_or_else(|| self.container_center());
        let content = self.container_to_content(anchor);
        let position = anchor - content.to_vec2() * scale;
        self.commit(Transform::new(scale, position.x, position.y), duration_ms)
    }

    /// Multiplies the scale by `factor` around `anchor`.
    ///
    /// A non-positive factor zooms out as far as allowed. Non-finite factors
    /// are ignored.
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Point>, duration_ms: f64) -> Transform {
        if !factor.is_finite() {
            return self.transform;
        }
        if factor <= 0.0 {
            return self.zoom_to(self.config.min_scale, anchor, duration_ms);
        }
        self.zoom_to(self.transform.scale * factor, anchor, duration_ms)
    }

    /// Zooms by wheel notches; positive notches zoom in.
    pub fn zoom_by_wheel(&mut self, notches: f64, anchor: Option<Point>) -> Transform {
        self.zoom_by(1.0 + self.config.wheel_step * notches, anchor, 0.0)
    }

    /// Pans by a delta in container pixels.
    ///
    /// Honoured only while zoomed in past the minimum scale, unless the pan
    /// policy is [`PanPolicy::Unrestricted`].
    pub fn pan_by(&mut self, delta: Vec2) -> Transform {
        if !is_usable(self.container) || !delta.is_finite() {
            return self.transform;
        }
        let at_min = self.is_at_min_scale();
        if at_min && self.config.pan_policy == PanPolicy::ZoomedOnly {
            return self.transform;
        }
        let mut delta = delta;
        if at_min && self.config.lock_vertical_at_min_scale {
            delta.y = 0.0;
        }
        let t = self.transform;
        self.commit(
            Transform::new(t.scale, t.position_x + delta.x, t.position_y + delta.y),
            0.0,
        )
    }

    /// Returns to the initial scale, centred.
    pub fn reset(&mut self, duration_ms: f64) -> Transform {
        if !is_usable(self.container) {
            return self.transform;
        }
        let centred = self.centred(self.config.initial_scale);
        self.commit(centred, duration_ms)
    }

    /// Centres the content at the current scale.
    pub fn center_view(&mut self, duration_ms: f64) -> Transform {
        if !is_usable(self.container) {
            return self.transform;
        }
        let centred = self.centred(self.transform.scale);
        self.commit(centred, duration_ms)
    }

    /// Sets an absolute transform, subject to clamping.
    pub fn set_transform(&mut self, x: f64, y: f64, scale: f64, duration_ms: f64) -> Transform {
        if !is_usable(self.container) {
            return self.transform;
        }
        self.commit(Transform::new(scale, x, y), duration_ms)
    }

    /// Clamps a candidate transform to the configured scale range and bounds.
    ///
    /// Idempotent. Non-finite components are replaced by the current scale or
    /// a centred position.
    #[must_use]
    pub fn clamp(&self, candidate: Transform) -> Transform {
        let scale = if candidate.scale.is_finite() {
            self.clamp_scale(candidate.scale)
        } else {
            self.transform.scale
        };
        let centred = self.centred(scale);
        let mut x = if candidate.position_x.is_finite() {
            candidate.position_x
        } else {
            centred.position_x
        };
        let mut y = if candidate.position_y.is_finite() {
            candidate.position_y
        } else {
            centred.position_y
        };
        if self.config.limit_to_bounds && is_usable(self.container) {
            let (min_x, max_x) = self.axis_limits(self.container.width, scale);
            let (min_y, max_y) = self.axis_limits(self.container.height, scale);
            x = x.clamp(min_x, max_x);
            y = y.clamp(min_y, max_y);
        }
        Transform::new(scale, x, y)
    }

    /// Reports whether the content rests against its left or right limit.
    ///
    /// Content that is not wider than the container touches both.
    #[must_use]
    pub fn edge_contact(&self) -> EdgeContact {
        if !is_usable(self.container) {
            return EdgeContact::BOTH;
        }
        let (min_x, max_x) = self.axis_limits(self.container.width, self.transform.scale);
        let tolerance = self.config.edge_tolerance;
        let x = self.transform.position_x;
        EdgeContact {
            left: x >= max_x - tolerance,
            right: x <= min_x + tolerance,
        }
    }

    /// Converts a container point to unscaled content coordinates.
    #[must_use]
    pub fn container_to_content(&self, p: Point) -> Point {
        let t = self.transform;
        Point::new((p.x - t.position_x) / t.scale, (p.y - t.position_y) / t.scale)
    }

    /// Converts unscaled content coordinates to a container point.
    #[must_use]
    pub fn content_to_container(&self, p: Point) -> Point {
        let t = self.transform;
        Point::new(p.x * t.scale + t.position_x, p.y * t.scale + t.position_y)
    }

    /// Position that places the content point at `offset` from the content
    /// centre in the middle of the container at `scale`.
    ///
    /// The result is unclamped; pass it to [`Self::set_transform`].
    #[must_use]
    pub fn position_for_focus(&self, offset: Vec2, scale: f64) -> Point {
        let center = self.container_center();
        let focus = center + offset;
        center - focus.to_vec2() * scale
    }

    fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    fn centred(&self, scale: f64) -> Transform {
        let w = self.container.width;
        let h = self.container.height;
        Transform::new(scale, (w - w * scale) / 2.0, (h - h * scale) / 2.0)
    }

    /// Allowed position range along one axis.
    fn axis_limits(&self, extent: f64, scale: f64) -> (f64, f64) {
        let overflow = extent - extent * scale;
        if overflow <= 0.0 {
            // Content is larger: its edges may not come inside the container.
            (overflow, 0.0)
        } else if self.config.center_zoomed_out {
            let mid = overflow / 2.0;
            (mid, mid)
        } else {
            (0.0, overflow)
        }
    }

    fn commit(&mut self, candidate: Transform, duration_ms: f64) -> Transform {
        let next = self.clamp(candidate);
        if next == self.transform {
            return next;
        }
        let previous = self.transform;
        self.transform = next;
        self.transition = (duration_ms.is_finite() && duration_ms > 0.0).then_some(Transition {
            from: previous,
            to: next,
            duration_ms,
        });
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&next);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Size, Vec2};

    use super::TransformEngine;
    use crate::config::{PanPolicy, ViewConfig};
    use crate::transform::{EdgeContact, Transform};

    fn engine() -> TransformEngine {
        TransformEngine::new(ViewConfig::default(), Size::new(800.0, 600.0))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_engine_is_centred_at_initial_scale() {
        let e = engine();
        assert_eq!(e.transform(), Transform::new(1.0, 0.0, 0.0));

        let config = ViewConfig {
            initial_scale: 2.0,
            ..ViewConfig::default()
        };
        let e = TransformEngine::new(config, Size::new(800.0, 600.0));
        assert_eq!(e.transform(), Transform::new(2.0, -400.0, -300.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut e = engine();
        e.zoom_to(2.5, None, 0.0);
        let candidates = [
            Transform::new(0.1, 500.0, -5000.0),
            Transform::new(10.0, -3000.0, 200.0),
            Transform::new(2.0, -100.0, -100.0),
            Transform::new(1.5, f64::NAN, f64::INFINITY),
            Transform::new(f64::NAN, 3.0, 4.0),
        ];
        for c in candidates {
            let once = e.clamp(c);
            assert_eq!(e.clamp(once), once, "clamp not idempotent for {c:?}");
            assert!(once.is_finite());
        }
    }

    #[test]
    fn zoom_keeps_anchor_content_fixed() {
        for &scale in &[1.0, 1.3, 2.0, 3.7, 4.0] {
            for &anchor in &[
                Point::new(0.0, 0.0),
                Point::new(400.0, 300.0),
                Point::new(123.0, 456.0),
                Point::new(800.0, 600.0),
            ] {
                let mut e = engine();
                let before = e.container_to_content(anchor);
                e.zoom_to(scale, Some(anchor), 0.0);
                let after = e.container_to_content(anchor);
                assert!(
                    (before - after).hypot() < 1e-9,
                    "anchor {anchor:?} drifted at scale {scale}"
                );
            }
        }
    }

    #[test]
    fn zoom_clamps_scale_silently() {
        let mut e = engine();
        assert_eq!(e.zoom_to(100.0, None, 0.0).scale, 4.0);
        assert_eq!(e.zoom_to(0.01, None, 0.0).scale, 1.0);
        assert_eq!(e.zoom_to(f64::NAN, None, 0.0).scale, 1.0);
    }

    #[test]
    fn pan_is_clamped_to_content_edges() {
        let mut e = engine();
        e.zoom_to(2.0, None, 0.0);
        let t = e.pan_by(Vec2::new(10_000.0, 10_000.0));
        assert_eq!((t.position_x, t.position_y), (0.0, 0.0));
        let t = e.pan_by(Vec2::new(-10_000.0, -10_000.0));
        assert_eq!((t.position_x, t.position_y), (-800.0, -600.0));
    }

    #[test]
    fn pan_at_min_scale_respects_policy() {
        let mut e = engine();
        let before = e.transform();
        assert_eq!(e.pan_by(Vec2::new(50.0, 50.0)), before);
        assert_eq!(e.revision(), 0);

        let config = ViewConfig {
            pan_policy: PanPolicy::Unrestricted,
            limit_to_bounds: false,
            lock_vertical_at_min_scale: true,
            ..ViewConfig::default()
        };
        let mut e = TransformEngine::new(config, Size::new(800.0, 600.0));
        let t = e.pan_by(Vec2::new(50.0, 50.0));
        assert_eq!((t.position_x, t.position_y), (50.0, 0.0));
    }

    #[test]
    fn zoomed_out_content_is_centred() {
        let config = ViewConfig {
            min_scale: 0.5,
            ..ViewConfig::default()
        };
        let mut e = TransformEngine::new(config, Size::new(800.0, 600.0));
        let t = e.zoom_to(0.5, Some(Point::new(0.0, 0.0)), 0.0);
        assert_eq!(t, Transform::new(0.5, 200.0, 150.0));

        let floating = ViewConfig {
            center_zoomed_out: false,
            ..config
        };
        e.set_config(floating);
        let t = e.set_transform(1000.0, -50.0, 0.5, 0.0);
        assert_eq!((t.position_x, t.position_y), (400.0, 0.0));
    }

    #[test]
    fn zero_container_makes_operations_no_ops() {
        let mut e = TransformEngine::new(ViewConfig::default(), Size::ZERO);
        let before = e.transform();
        assert_eq!(e.zoom_to(3.0, None, 0.0), before);
        assert_eq!(e.pan_by(Vec2::new(10.0, 10.0)), before);
        assert_eq!(e.reset(100.0), before);
        assert_eq!(e.center_view(100.0), before);
        assert_eq!(e.set_transform(1.0, 2.0, 3.0, 0.0), before);
        assert_eq!(e.revision(), 0);
        assert!(e.transform().is_finite());

        // The first usable size centres the content.
        e.set_container(Size::new(400.0, 300.0));
        assert_eq!(e.transform(), Transform::new(1.0, 0.0, 0.0));
        assert!(e.transform().is_finite());
    }

    #[test]
    fn reset_and_center_are_idempotent() {
        let mut e = engine();
        e.zoom_to(3.0, Some(Point::new(10.0, 10.0)), 0.0);
        let centred = e.center_view(0.0);
        assert!(close(centred.position_x, -800.0));
        assert!(close(centred.position_y, -600.0));
        let rev = e.revision();
        assert_eq!(e.center_view(0.0), centred);
        assert_eq!(e.revision(), rev);

        let reset = e.reset(0.0);
        assert_eq!(reset, Transform::new(1.0, 0.0, 0.0));
        assert_eq!(e.reset(0.0), reset);
    }

    #[test]
    fn newer_animation_replaces_transition() {
        let mut e = engine();
        e.zoom_to(2.0, None, 300.0);
        let first = *e.transition().unwrap();
        assert_eq!(first.to.scale, 2.0);

        e.zoom_to(3.0, None, 300.0);
        let second = *e.transition().unwrap();
        assert_eq!(second.from, first.to);
        assert_eq!(second.to.scale, 3.0);
        assert_eq!(e.transform(), second.to);

        // Immediate operations cancel the in-flight transition.
        e.pan_by(Vec2::new(-10.0, 0.0));
        assert!(e.transition().is_none());
    }

    #[test]
    fn listeners_fire_on_committed_changes_only() {
        let mut e = engine();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(Transform::IDENTITY));
        let id = {
            let count = count.clone();
            let seen = seen.clone();
            e.subscribe(move |t| {
                count.set(count.get() + 1);
                seen.set(*t);
            })
        };

        e.zoom_to(2.0, None, 0.0);
        assert_eq!(count.get(), 1);
        assert_eq!(seen.get(), e.transform());

        // Clamped to the same value: no notification.
        e.pan_by(Vec2::new(10_000.0, 0.0));
        e.pan_by(Vec2::new(10_000.0, 0.0));
        assert_eq!(count.get(), 2);

        assert!(e.unsubscribe(id));
        assert!(!e.unsubscribe(id));
        e.reset(0.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn oversized_zoom_out_snaps_to_minimum() {
        let mut e = engine();
        e.zoom_to(3.0, None, 0.0);
        let t = e.zoom_by_wheel(-15.0, Some(Point::new(400.0, 300.0)));
        assert_eq!(t, Transform::new(1.0, 0.0, 0.0));

        e.zoom_to(3.0, None, 0.0);
        assert_eq!(e.zoom_by(0.0, None, 0.0).scale, 1.0);

        e.zoom_to(3.0, None, 0.0);
        assert_eq!(e.zoom_by(f64::NAN, None, 0.0).scale, 3.0);
    }

    #[test]
    fn no_op_commands_keep_the_pending_transition() {
        let mut e = engine();
        e.zoom_to(2.0, None, 200.0);
        let pending = *e.transition().unwrap();

        // Clamps back to the committed transform.
        e.zoom_to(2.0, None, 0.0);
        assert_eq!(e.transition(), Some(&pending));

        e.pan_by(Vec2::new(-10.0, 0.0));
        assert!(e.transition().is_none());
    }

    #[test]
    fn edge_contact_follows_position() {
        let mut e = engine();
        assert_eq!(e.edge_contact(), EdgeContact::BOTH);

        e.zoom_to(2.0, None, 0.0);
        assert_eq!(e.edge_contact(), EdgeContact::default());

        e.pan_by(Vec2::new(10_000.0, 0.0));
        assert_eq!(
            e.edge_contact(),
            EdgeContact {
                left: true,
                right: false
            }
        );

        // Within tolerance of the right limit.
        e.set_transform(-797.0, -300.0, 2.0, 0.0);
        assert_eq!(
            e.edge_contact(),
            EdgeContact {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn focus_position_centres_the_focus_point() {
        let e = engine();
        let p = e.position_for_focus(Vec2::ZERO, 2.0);
        assert_eq!(p, Point::new(-400.0, -300.0));

        let p = e.position_for_focus(Vec2::new(100.0, -50.0), 2.0);
        // Content point (500, 250) lands on the container centre.
        assert!(close(500.0 * 2.0 + p.x, 400.0));
        assert!(close(250.0 * 2.0 + p.y, 300.0));
    }

    #[test]
    fn resize_reclamps_position() {
        let mut e = engine();
        e.zoom_to(2.0, None, 0.0);
        e.pan_by(Vec2::new(-10_000.0, -10_000.0));
        assert_eq!(e.transform(), Transform::new(2.0, -800.0, -600.0));
        e.set_container(Size::new(400.0, 300.0));
        assert_eq!(e.transform(), Transform::new(2.0, -400.0, -300.0));
    }
}
