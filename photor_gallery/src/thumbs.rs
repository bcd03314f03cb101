// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use photor_gesture::ThumbTrack;

/// Indent that centers `thumb` in the container, kept inside the track's bounds.
///
/// A strip that does not overflow its container always rests at `0`.
pub(crate) fn centered_indent(track: &ThumbTrack, thumb: Rect) -> f64 {
    let indent = -(thumb.x0 - 0.5 * (track.container_width - thumb.width()));
    track.validate_indent(indent)
}
