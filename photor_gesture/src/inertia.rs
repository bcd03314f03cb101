// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbnail strip bounds and the inertial tail computed on release.
//!
//! The thumbnail layer sits inside a narrower container and is translated by
//! a non-positive pixel `indent`: `0` shows the first thumbnail flush with the
//! container's start, `container - content` shows the last one flush with its
//! end. A release projects the layer further along the drag direction by the
//! square of the release speed, then clamps into that range.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Horizontal geometry and position of the thumbnail strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbTrack {
    /// Width of the visible thumbnail container.
    pub container_width: f64,
    /// Width of the thumbnail layer (all thumbnails laid out).
    pub content_width: f64,
    /// Current translation of the layer in pixels.
    pub indent: f64,
}

impl ThumbTrack {
    /// Creates a track description.
    #[must_use]
    pub const fn new(container_width: f64, content_width: f64, indent: f64) -> Self {
        Self {
            container_width,
            content_width,
            indent,
        }
    }

    /// Returns `true` when the thumbnails overflow their container and may be dragged.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.container_width < self.content_width
    }

    /// Smallest indent the layer may rest at (`container - content`).
    #[must_use]
    pub fn min_indent(&self) -> f64 {
        self.container_width - self.content_width
    }

    /// Clamps `indent` into `min_indent()..=0`.
    ///
    /// The start boundary wins when the two disagree, which only happens for a
    /// strip that does not overflow.
    #[must_use]
    pub fn clamp_indent(&self, indent: f64) -> f64 {
        if indent > 0.0 {
            0.0
        } else if indent < self.min_indent() {
            self.min_indent()
        } else {
            indent
        }
    }

    /// Like [`clamp_indent`](Self::clamp_indent), but pins a non-draggable strip at `0`.
    #[must_use]
    pub fn validate_indent(&self, indent: f64) -> f64 {
        if self.is_draggable() {
            self.clamp_indent(indent)
        } else {
            0.0
        }
    }
}

/// Release speed for a drag of `shift_x` pixels over `elapsed` milliseconds.
///
/// A zero-duration gesture has no measurable velocity and yields `0`.
#[must_use]
pub fn fling_speed(shift_x: f64, elapsed: u64, gain: f64) -> f64 {
    if elapsed == 0 {
        return 0.0;
    }
    (gain * shift_x / elapsed as f64).abs()
}

/// Resting indent of the thumbnail layer after a fling.
///
/// The direction follows the sign of `shift_x` with ties going forward, the
/// distance is `floor(speed²)`, and the landing point is clamped into the
/// track's bounds.
#[must_use]
pub fn fling_landing(track: &ThumbTrack, shift_x: f64, elapsed: u64, gain: f64) -> f64 {
    let direction = if shift_x < 0.0 { -1.0 } else { 1.0 };
    let speed = fling_speed(shift_x, elapsed, gain);
    let tail = direction * (speed * speed).floor() + track.indent;
    log::trace!("fling: speed {speed}, projected indent {tail}");
    track.clamp_indent(tail)
}
