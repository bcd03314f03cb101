// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable thresholds for gesture tracking.

/// Thresholds and gains used by [`GestureTracker`](crate::GestureTracker).
///
/// All distances are in logical pixels and all durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Shift along one axis that fixes a gesture as a slide or a scroll.
    pub axis_threshold: f64,
    /// Fraction of the control width a slide drag must exceed to commit.
    pub commit_ratio: f64,
    /// Divisor applied to the shift when dragging past the first or last slide.
    pub edge_resistance: f64,
    /// Multiplier turning release velocity (px/ms) into fling speed.
    pub fling_gain: f64,
    /// Transition duration for the thumbnail strip after a fling.
    pub fling_duration: u64,
}

impl GestureConfig {
    /// Creates the default configuration.
    ///
    /// A 5px axis threshold, a 5% commit ratio, a 3x edge resistance,
    /// a fling gain of 10 and a 240ms fling transition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            axis_threshold: 5.0,
            commit_ratio: 0.05,
            edge_resistance: 3.0,
            fling_gain: 10.0,
            fling_duration: 240,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}
