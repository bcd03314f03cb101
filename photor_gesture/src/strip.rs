// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset arithmetic for the main slide strip.
//!
//! The slide layer is translated in percent of the control width: slide `i`
//! rests at `-100 * i`. While a drag is in progress the layer follows the
//! pointer, and past the first or last slide it follows at a fraction of the
//! pointer's speed (a rubber band).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Geometry and position of the main slide strip at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideStrip {
    /// Width of the control (the visible slide container) in pixels.
    pub control_width: f64,
    /// Index of the slide currently shown.
    pub current: usize,
    /// Index of the last slide.
    pub last: usize,
}

/// What a released slide drag resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideRelease {
    /// Advance to the following slide.
    Next,
    /// Go back to the preceding slide.
    Prev,
    /// The drag was too short; return to the current slide.
    SnapBack,
}

impl SlideStrip {
    /// Creates a strip description.
    #[must_use]
    pub const fn new(control_width: f64, current: usize, last: usize) -> Self {
        Self {
            control_width,
            current,
            last,
        }
    }

    /// Resting offset of slide `index`, in percent.
    #[must_use]
    pub fn rest_offset(index: usize) -> f64 {
        -100.0 * index as f64
    }

    /// Returns `true` if dragging by `shift_x` pulls the strip past either end.
    #[must_use]
    pub fn is_overscrolled(&self, shift_x: f64) -> bool {
        (self.current == 0 && shift_x > 0.0) || (self.current == self.last && shift_x < 0.0)
    }

    /// Shift actually applied to the layer after edge resistance.
    #[must_use]
    pub fn resisted_shift(&self, shift_x: f64, resistance: f64) -> f64 {
        if self.is_overscrolled(shift_x) && resistance > 0.0 {
            shift_x / resistance
        } else {
            shift_x
        }
    }

    /// Layer offset, in percent, while the pointer is `shift_x` pixels from where it started.
    ///
    /// A degenerate (zero or negative) control width yields the resting offset.
    #[must_use]
    pub fn drag_offset(&self, shift_x: f64, resistance: f64) -> f64 {
        if self.control_width <= 0.0 {
            return Self::rest_offset(self.current);
        }
        let shift = self.resisted_shift(shift_x, resistance);
        100.0 * (shift / self.control_width - self.current as f64)
    }

    /// Decides where a drag released at `shift_x` goes.
    ///
    /// The drag commits when it covers more than `commit_ratio` of the control width.
    #[must_use]
    pub fn settle(&self, shift_x: f64, commit_ratio: f64) -> SlideRelease {
        if shift_x.abs() > self.control_width * commit_ratio {
            if shift_x < 0.0 {
                SlideRelease::Next
            } else {
                SlideRelease::Prev
            }
        } else {
            SlideRelease::SnapBack
        }
    }

    /// Index a release lands on, clamped to `0..=last`.
    #[must_use]
    pub fn target_of(&self, release: SlideRelease) -> usize {
        match release {
            SlideRelease::Next => (self.current + 1).min(self.last),
            SlideRelease::Prev => self.current.saturating_sub(1),
            SlideRelease::SnapBack => self.current,
        }
    }
}
