// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured geometry of a gallery's elements.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use photor_gesture::ThumbTrack;

/// Sizes and positions measured by the host.
///
/// Thumbnail rects are in the thumbnail layer's own coordinate space (before
/// the strip's indent is applied) and include each thumbnail's margins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
    /// The area slides are fitted into.
    pub viewport: Size,
    /// The main slide strip's container.
    pub control: Size,
    /// The visible thumbnail container.
    pub thumbs: Size,
    /// Full width of the thumbnail layer.
    pub thumbs_layer_width: f64,
    /// One rect per thumbnail, in layer coordinates.
    pub thumb_rects: Vec<Rect>,
}

impl GeometrySnapshot {
    /// Thumbnail strip bounds at the given `indent`.
    #[must_use]
    pub fn thumb_track(&self, indent: f64) -> ThumbTrack {
        ThumbTrack::new(self.thumbs.width, self.thumbs_layer_width, indent)
    }

    /// Rect of thumbnail `index`, if it has been measured.
    #[must_use]
    pub fn thumb_rect(&self, index: usize) -> Option<Rect> {
        self.thumb_rects.get(index).copied()
    }

    /// Index of the thumbnail under `point`, given in container coordinates.
    ///
    /// `indent` is the strip's current translation. Later thumbnails win on
    /// overlapping edges.
    #[must_use]
    pub fn thumb_at(&self, point: Point, indent: f64) -> Option<usize> {
        let local = Point::new(point.x - indent, point.y);
        self.thumb_rects
            .iter()
            .rposition(|rect| rect.contains(local))
    }
}
