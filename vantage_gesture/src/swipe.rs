// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe classification: decide whether a finished pan was a page swipe.
//!
//! A horizontal drag over the main image is ambiguous. It may be a pan of
//! zoomed-in content, or a request to move to the neighbouring image. The
//! rule implemented by [`classify`] is:
//!
//! 1. The gesture must be fast: shorter than
//!    [`SwipeConfig::max_swipe_time_ms`] and faster than
//!    [`SwipeConfig::min_swipe_velocity`] horizontally.
//! 2. It must be clearly horizontal: `|dx| > |dy| * horizontal_dominance`.
//! 3. It must be long: `|dx| > min_swipe_distance`.
//! 4. Near the minimum scale that is enough. When zoomed in, the content
//!    must additionally already rest against the edge the swipe pushes
//!    towards, so an ordinary pan inside the content never changes pages.
//!
//! `dx` is `start.x - end.x`: a finger moving left gives a positive `dx`
//! and navigates to the next image.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use vantage_gesture::swipe::{
//!     GestureSample, NavigationIntent, SwipeConfig, SwipeContext, classify,
//! };
//!
//! let start = GestureSample::new(Point::new(400.0, 300.0), 0.0);
//! let end = GestureSample::new(Point::new(250.0, 310.0), 200.0);
//! let context = SwipeContext::at_scale(1.0, 1.0);
//!
//! let intent = classify(&start, &end, &context, &SwipeConfig::default());
//! assert_eq!(intent, Some(NavigationIntent::Next));
//! ```

use kurbo::{Point, Vec2};

/// Pointer position and time captured at the start or end of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Pointer position in container coordinates.
    pub position: Point,
    /// Event time in milliseconds on any monotonic clock.
    pub timestamp_ms: f64,
}

impl GestureSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(position: Point, timestamp_ms: f64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Page change requested by a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationIntent {
    /// Move to the next gallery entry, wrapping to the first.
    Next,
    /// Move to the previous gallery entry, wrapping to the last.
    Previous,
}

/// Thresholds for swipe classification.
///
/// Distances are container pixels, times are milliseconds, velocities are
/// pixels per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum horizontal travel.
    pub min_swipe_distance: f64,
    /// Gestures lasting this long or longer are pans.
    pub max_swipe_time_ms: f64,
    /// Minimum horizontal velocity.
    pub min_swipe_velocity: f64,
    /// Required ratio of horizontal to vertical travel.
    pub horizontal_dominance: f64,
    /// Scales up to `min_scale * near_minimum_scale_factor` skip the edge check.
    pub near_minimum_scale_factor: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 100.0,
            max_swipe_time_ms: 500.0,
            min_swipe_velocity: 0.3,
            horizontal_dominance: 1.5,
            near_minimum_scale_factor: 1.1,
        }
    }
}

/// View state observed when the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeContext {
    /// Current scale of the main view.
    pub scale: f64,
    /// Configured minimum scale.
    pub min_scale: f64,
    /// Content rests against its left limit.
    pub at_left_edge: bool,
    /// Content rests against its right limit.
    pub at_right_edge: bool,
}

impl SwipeContext {
    /// Context with neither edge in contact.
    #[must_use]
    pub const fn at_scale(scale: f64, min_scale: f64) -> Self {
        Self {
            scale,
            min_scale,
            at_left_edge: false,
            at_right_edge: false,
        }
    }

    /// Returns a copy with the given edge flags.
    #[must_use]
    pub const fn with_edges(mut self, left: bool, right: bool) -> Self {
        self.at_left_edge = left;
        self.at_right_edge = right;
        self
    }
}

/// Derived measurements of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeMetrics {
    /// `start - end`; positive `x` means the pointer moved left.
    pub delta: Vec2,
    /// Gesture duration in milliseconds, never below one millisecond.
    pub elapsed_ms: f64,
    /// Horizontal speed in pixels per millisecond.
    pub velocity: f64,
}

impl SwipeMetrics {
    /// Measures the gesture between two samples.
    #[must_use]
    pub fn between(start: &GestureSample, end: &GestureSample) -> Self {
        let delta = start.position - end.position;
        let elapsed_ms = (end.timestamp_ms - start.timestamp_ms).max(1.0);
        Self {
            delta,
            elapsed_ms,
            velocity: delta.x.abs() / elapsed_ms,
        }
    }
}

/// Classifies a finished gesture.
///
/// Pure: the same inputs always produce the same result. Returns `None` when
/// the gesture should be treated as a pan.
#[must_use]
pub fn classify(
    start: &GestureSample,
    end: &GestureSample,
    context: &SwipeContext,
    config: &SwipeConfig,
) -> Option<NavigationIntent> {
    let m = SwipeMetrics::between(start, end);
    if !(m.delta.is_finite() && m.elapsed_ms.is_finite()) {
        return None;
    }
    if m.elapsed_ms >= config.max_swipe_time_ms || m.velocity <= config.min_swipe_velocity {
        return None;
    }
    let (dx, dy) = (m.delta.x, m.delta.y);
    if dx.abs() <= dy.abs() * config.horizontal_dominance {
        return None;
    }
    if dx.abs() <= config.min_swipe_distance {
        return None;
    }

    let intent = if dx > 0.0 {
        NavigationIntent::Next
    } else {
        NavigationIntent::Previous
    };

    let near_minimum = context.scale <= context.min_scale * config.near_minimum_scale_factor;
    if near_minimum {
        return Some(intent);
    }
    // Zoomed in: only swipe once the content cannot pan further that way.
    let pressed = match intent {
        NavigationIntent::Next => context.at_right_edge,
        NavigationIntent::Previous => context.at_left_edge,
    };
    pressed.then_some(intent)
}
