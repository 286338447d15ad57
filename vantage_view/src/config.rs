// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether panning is allowed when the view is at its minimum scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanPolicy {
    /// Only pan while zoomed in past the minimum scale.
    #[default]
    ZoomedOnly,
    /// Pan at any scale. Bounds clamping still applies when enabled.
    Unrestricted,
}

/// Configuration for a [`crate::TransformEngine`].
///
/// Defaults mirror a typical photo viewer: scale range `[1, 4]`, content
/// clamped to the container, centred on first layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale used on construction and by [`crate::TransformEngine::reset`].
    pub initial_scale: f64,
    /// Keep the rendered content within the container.
    pub limit_to_bounds: bool,
    /// Centre the content the first time a usable container size is known.
    pub center_on_init: bool,
    /// Centre content that is smaller than the container instead of letting
    /// it float anywhere inside.
    pub center_zoomed_out: bool,
    /// When panning is honoured.
    pub pan_policy: PanPolicy,
    /// Drop the vertical component of pans while at the minimum scale.
    pub lock_vertical_at_min_scale: bool,
    /// Distance in container pixels within which content counts as pressed
    /// against an edge.
    pub edge_tolerance: f64,
    /// Relative scale change per wheel notch.
    pub wheel_step: f64,
    /// Duration for animated convenience operations such as double-click reset.
    pub animation_ms: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 4.0,
            initial_scale: 1.0,
            limit_to_bounds: true,
            center_on_init: true,
            center_zoomed_out: true,
            pan_policy: PanPolicy::default(),
            lock_vertical_at_min_scale: false,
            edge_tolerance: 5.0,
            wheel_step: 0.1,
            animation_ms: 200.0,
        }
    }
}

impl ViewConfig {
    /// Returns a copy with the scale range ordered and positive, and the
    /// initial scale moved inside it.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = f64::MIN_POSITIVE;
        }
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            self.max_scale = self.min_scale;
        }
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !self.initial_scale.is_finite() {
            self.initial_scale = self.min_scale;
        }
        self.initial_scale = self.initial_scale.clamp(self.min_scale, self.max_scale);
        self.edge_tolerance = self.edge_tolerance.abs();
        self
    }
}
