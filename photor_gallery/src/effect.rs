// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects a gallery asks its host to apply.
//!
//! The gallery never touches a surface itself. Every operation returns a
//! [`Response`] whose [`Effect`]s describe what changed, in the order the host
//! should apply them. Offsets are final values, not deltas, so a host that
//! drops intermediate effects still converges.

use alloc::string::String;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::loader::LoadTicket;

/// How a slide's image sits in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The image is smaller than the viewport on both axes; show it at natural size, centered.
    Center,
    /// The image needs scaling to fit.
    Auto,
}

/// Which viewport axis the image is constrained by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The image is relatively wider than the viewport.
    Landscape,
    /// The image is relatively taller than the viewport.
    Portrait,
}

/// Layout classification of a loaded slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideFit {
    /// Natural size or scaled.
    pub placement: Placement,
    /// Constraining axis.
    pub orientation: Orientation,
}

impl SlideFit {
    /// Classifies an image of natural size `image` shown in `viewport`.
    #[must_use]
    pub fn compute(viewport: Size, image: Size) -> Self {
        let placement = if viewport.width > image.width && viewport.height > image.height {
            Placement::Center
        } else {
            Placement::Auto
        };
        let image_ratio = image.width / image.height;
        let viewport_ratio = viewport.width / viewport.height;
        let orientation = if image_ratio >= viewport_ratio {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            placement,
            orientation,
        }
    }
}

/// A single change for the host to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Stop any running transitions on both layers; a drag is starting.
    HaltTransitions,
    /// Toggle the gallery's dragging state.
    Dragging(bool),
    /// Translate the slide layer.
    SlidesOffset {
        /// Offset in percent of the control width.
        percent: f64,
        /// Transition duration in milliseconds.
        duration: u64,
    },
    /// Translate the thumbnail layer.
    ThumbsIndent {
        /// Indent in pixels.
        px: f64,
        /// Transition duration in milliseconds.
        duration: u64,
    },
    /// Move the frame that highlights the current thumbnail.
    Frame {
        /// Frame bounds in thumbnail layer coordinates.
        rect: Rect,
        /// Transition duration in milliseconds.
        duration: u64,
    },
    /// Mark the slide at this index and its thumbnail as current.
    Current(usize),
    /// Enable or disable the navigation buttons.
    Buttons {
        /// The gallery is at its first slide.
        prev_disabled: bool,
        /// The gallery is at its last slide.
        next_disabled: bool,
    },
    /// Start loading an image and report back with its ticket.
    Load {
        /// Ticket to hand back on completion.
        ticket: LoadTicket,
        /// Image location.
        url: String,
        /// Alternative text, for slides that have one.
        alt: Option<String>,
    },
    /// An image failed to load.
    LoadFailed(LoadTicket),
    /// Lay out a loaded slide.
    Fit {
        /// Slide index.
        index: usize,
        /// Layout classification.
        fit: SlideFit,
    },
    /// Show or hide a slide outside the current neighbourhood.
    Visibility {
        /// Slide index.
        index: usize,
        /// Whether the slide should be hidden.
        hidden: bool,
    },
}

/// Effect buffer returned by gallery operations.
pub type Effects = SmallVec<[Effect; 8]>;

/// What the host should do in response to one input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// Effects in application order.
    pub effects: Effects,
    /// Whether the triggering event's default action should be suppressed.
    pub prevent_default: bool,
}

impl Response {
    pub(crate) fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Returns `true` if there is nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && !self.prevent_default
    }
}
