// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! [`PinchState`] remembers the finger distance and view scale at the moment
//! a second finger lands. Each update turns the current finger geometry into
//! a target scale proportional to the distance ratio and an anchor at the
//! finger midpoint, ready for `TransformEngine::zoom_to`.

use kurbo::Point;

/// Pinches that start with the fingers closer than this are ignored.
pub const MIN_PINCH_DISTANCE: f64 = 10.0;

/// Zoom request derived from the current finger positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Scale the view should move to (before clamping).
    pub target_scale: f64,
    /// Midpoint between the fingers, in container coordinates.
    pub anchor: Point,
}

/// Pinch gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    start: Option<(f64, f64)>,
}

impl PinchState {
    /// Starts tracking a pinch at the current view `scale`.
    ///
    /// Returns `false` (and stays idle) if the fingers are too close together
    /// to give a stable ratio.
    pub fn begin(&mut self, a: Point, b: Point, scale: f64) -> bool {
        let distance = (b - a).hypot();
        if !(distance.is_finite() && distance >= MIN_PINCH_DISTANCE && scale.is_finite()) {
            self.start = None;
            return false;
        }
        self.start = Some((distance, scale));
        true
    }

    /// Computes the zoom request for the current finger positions.
    #[must_use]
    pub fn update(&self, a: Point, b: Point) -> Option<PinchUpdate> {
        let (start_distance, start_scale) = self.start?;
        let distance = (b - a).hypot();
        if !distance.is_finite() {
            return None;
        }
        Some(PinchUpdate {
            target_scale: start_scale * distance / start_distance,
            anchor: a.midpoint(b),
        })
    }

    /// Returns `true` while a pinch is tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.start = None;
    }
}
