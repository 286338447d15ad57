// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture state: `Idle → Panning → Idle`.
//!
//! ## Usage
//!
//! 1) On pointer/touch down call [`PanGesture::begin`] with a [`GestureSample`].
//! 2) On each move call [`PanGesture::moved`] and apply the returned delta to
//!    the view (for example with `TransformEngine::pan_by`).
//! 3) On release call [`PanGesture::end`] with the final sample and the view
//!    state *after* all moves were applied; it returns the swipe decision.
//!
//! A `begin` while already panning discards the old gesture and starts a
//! fresh one. An `end` without a matching `begin` returns `None`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vantage_gesture::pan::PanGesture;
//! use vantage_gesture::swipe::{GestureSample, SwipeConfig, SwipeContext};
//!
//! let mut pan = PanGesture::default();
//! pan.begin(GestureSample::new(Point::new(10.0, 20.0), 0.0));
//! assert!(pan.is_panning());
//!
//! assert_eq!(pan.moved(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! // Slow release: a pan, not a swipe.
//! let end = GestureSample::new(Point::new(15.0, 25.0), 900.0);
//! let intent = pan.end(end, &SwipeContext::at_scale(2.0, 1.0), &SwipeConfig::default());
//! assert_eq!(intent, None);
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

use crate::swipe::{GestureSample, NavigationIntent, SwipeConfig, SwipeContext, classify};

/// Current phase of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PanPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture started at `start` and last reported `last`.
    Panning {
        /// Sample recorded when the gesture began.
        start: GestureSample,
        /// Last pointer position reported through [`PanGesture::moved`].
        last: Point,
    },
}

/// Explicit two-state machine for one viewer's pan gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    phase: PanPhase,
}

impl PanGesture {
    /// Creates an idle gesture tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    /// Returns the start sample of the active gesture.
    #[must_use]
    pub fn start_sample(&self) -> Option<GestureSample> {
        match self.phase {
            PanPhase::Panning { start, .. } => Some(start),
            PanPhase::Idle => None,
        }
    }

    /// Starts a gesture, discarding any gesture already in progress.
    pub fn begin(&mut self, sample: GestureSample) {
        self.phase = PanPhase::Panning {
            start: sample,
            last: sample.position,
        };
    }

    /// Records a pointer move and returns the delta since the previous one.
    ///
    /// Returns `None` while idle.
    pub fn moved(&mut self, pos: Point) -> Option<Vec2> {
        match &mut self.phase {
            PanPhase::Panning { last, .. } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
            PanPhase::Idle => None,
        }
    }

    /// Offset of `pos` from the start of the active gesture.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_sample().map(|start| pos - start.position)
    }

    /// Ends the gesture and classifies it.
    ///
    /// `context` must describe the view as it is at release time. Always
    /// returns to idle.
    pub fn end(
        &mut self,
        sample: GestureSample,
        context: &SwipeContext,
        config: &SwipeConfig,
    ) -> Option<NavigationIntent> {
        let start = self.start_sample();
        self.cancel();
        classify(&start?, &sample, context, config)
    }

    /// Abandons the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.phase = PanPhase::Idle;
    }
}
