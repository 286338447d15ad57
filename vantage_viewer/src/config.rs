// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use vantage_fit::MAX_MINI_MAP_SIZE;
use vantage_gesture::swipe::SwipeConfig;
use vantage_minimap::MiniMapStyle;
use vantage_view::ViewConfig;

/// Configuration for an [`crate::ImageViewer`].
///
/// With the `serde` feature, missing fields fall back to their defaults and
/// the overlay style is not serialized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Scale range, bounds, and animation settings of the main view.
    pub view: ViewConfig,
    /// Swipe thresholds.
    pub swipe: SwipeConfig,
    /// Mini-map overlay colours.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub style: MiniMapStyle,
    /// Largest mini-map canvas.
    pub max_canvas: Size,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            swipe: SwipeConfig::default(),
            style: MiniMapStyle::default(),
            max_canvas: MAX_MINI_MAP_SIZE,
        }
    }
}
