// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-image load bookkeeping.
//!
//! Every slide and every thumbnail owns its own [`Loader`]. A load request
//! hands the host a [`LoadTicket`] naming the image, and the host returns that
//! ticket when the image finishes, so completions can arrive in any order.

use alloc::string::String;

use kurbo::Size;

use crate::effect::Effect;

/// Which of an item's two images a ticket refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// The full-size slide image.
    Slide,
    /// The thumbnail.
    Thumb,
}

/// Handle identifying one image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    /// Slide or thumbnail.
    pub kind: ImageKind,
    /// Item index.
    pub index: usize,
}

impl LoadTicket {
    /// Ticket for slide `index`.
    #[must_use]
    pub const fn slide(index: usize) -> Self {
        Self {
            kind: ImageKind::Slide,
            index,
        }
    }

    /// Ticket for thumbnail `index`.
    #[must_use]
    pub const fn thumb(index: usize) -> Self {
        Self {
            kind: ImageKind::Thumb,
            index,
        }
    }
}

/// Load progress of one image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LoadState {
    /// Not requested yet.
    #[default]
    Idle,
    /// Requested; waiting for the host.
    Loading,
    /// Loaded with the given natural size.
    Loaded(Size),
    /// The host reported a failure. Failed images are not retried.
    Failed,
}

impl LoadState {
    /// Returns `true` once the load has finished, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed)
    }
}

/// One item of a gallery as provided by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    /// Full-size image location.
    pub url: String,
    /// Thumbnail image location.
    pub thumb_url: String,
    /// Alternative text shown with the slide.
    pub alt: Option<String>,
}

impl GalleryItem {
    /// Creates an item without alternative text.
    pub fn new(url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            thumb_url: thumb_url.into(),
            alt: None,
        }
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Load state machine for a single image.
#[derive(Clone, Debug)]
pub(crate) struct Loader {
    ticket: LoadTicket,
    url: String,
    alt: Option<String>,
    state: LoadState,
}

impl Loader {
    pub(crate) fn new(ticket: LoadTicket, url: String, alt: Option<String>) -> Self {
        Self {
            ticket,
            url,
            alt,
            state: LoadState::Idle,
        }
    }

    pub(crate) fn state(&self) -> LoadState {
        self.state
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// Moves an idle loader to `Loading` and returns the request for the host.
    pub(crate) fn request(&mut self) -> Option<Effect> {
        if self.state != LoadState::Idle {
            return None;
        }
        self.state = LoadState::Loading;
        Some(Effect::Load {
            ticket: self.ticket,
            url: self.url.clone(),
            alt: self.alt.clone(),
        })
    }

    /// Records a successful load. Returns `false` if no load was outstanding.
    pub(crate) fn finish(&mut self, size: Size) -> bool {
        if self.state != LoadState::Loading {
            return false;
        }
        self.state = LoadState::Loaded(size);
        true
    }

    /// Records a failed load. Returns `false` if no load was outstanding.
    pub(crate) fn fail(&mut self) -> bool {
        if self.state != LoadState::Loading {
            return false;
        }
        self.state = LoadState::Failed;
        true
    }
}
