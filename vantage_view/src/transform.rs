// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Scale and translation of the main view.
///
/// The content box has the size of the container at scale `1.0`. The
/// position is the container-space location of the content's top-left
/// corner, so a container point `q` shows the content point
/// `(q - position) / scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal offset of the content's top-left corner.
    pub position_x: f64,
    /// Vertical offset of the content's top-left corner.
    pub position_y: f64,
}

impl Transform {
    /// Unscaled content at the container origin.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(scale: f64, position_x: f64, position_y: f64) -> Self {
        Self {
            scale,
            position_x,
            position_y,
        }
    }

    /// Offset of the content's top-left corner as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.position_x, self.position_y)
    }

    /// Content → container affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.position_x, self.position_y)) * Affine::scale(self.scale)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.position_x.is_finite() && self.position_y.is_finite()
    }

    /// Component-wise linear interpolation; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            position_x: self.position_x + (other.position_x - self.position_x) * t,
            position_y: self.position_y + (other.position_y - self.position_y) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Animated change between two committed transforms.
///
/// The engine commits `to` as soon as an animated operation is issued; a
/// transition only tells the host how to get there visually. Issuing another
/// operation replaces the transition rather than queueing behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Transform committed before the operation.
    pub from: Transform,
    /// Transform committed by the operation.
    pub to: Transform,
    /// Requested duration in milliseconds.
    pub duration_ms: f64,
}

impl Transition {
    /// Samples the transition at `progress` in `[0, 1]`.
    ///
    /// Easing is left to the caller: map wall-clock progress through any
    /// curve before sampling.
    #[must_use]
    pub fn sample(&self, progress: f64) -> Transform {
        self.from.lerp(&self.to, progress)
    }

    /// Samples the transition `elapsed_ms` after it started, linearly.
    #[must_use]
    pub fn sample_at(&self, elapsed_ms: f64) -> Transform {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        self.sample(elapsed_ms / self.duration_ms)
    }
}

/// Which horizontal limits the content currently rests against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeContact {
    /// The content's left edge is at the container's left side; the view
    /// cannot pan further towards the start of the image.
    pub left: bool,
    /// The content's right edge is at the container's right side.
    pub right: bool,
}

impl EdgeContact {
    /// Both edges in contact, as when the content fits the container.
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };
}
