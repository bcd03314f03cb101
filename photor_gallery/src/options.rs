// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gallery configuration.

use photor_gesture::GestureConfig;

/// Options a [`Gallery`](crate::Gallery) is created with.
///
/// Durations are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Slide shown first.
    pub current: usize,
    /// Transition duration for slide changes.
    pub delay: u64,
    /// Number of slides loaded on each side of the current one.
    pub loading_range: usize,
    /// Whether Space and the arrow keys navigate.
    pub keyboard: bool,
    /// Transition duration for the thumbnail frame and strip.
    pub thumbs_transition: u64,
    /// Idle gap a burst of resizes must be followed by before geometry is applied.
    pub resize_debounce: u64,
    /// Gesture thresholds.
    pub gesture: GestureConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            current: 0,
            delay: 300,
            loading_range: 1,
            keyboard: false,
            thumbs_transition: 240,
            resize_debounce: 84,
            gesture: GestureConfig::default(),
        }
    }
}
