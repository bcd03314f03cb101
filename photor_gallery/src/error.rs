// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::loader::LoadTicket;

/// Errors returned by gallery and registry operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// A gallery needs at least one item.
    #[error("gallery has no items")]
    Empty,
    /// A slide index past the last slide.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides.
        len: usize,
    },
    /// No gallery is registered under the requested id.
    #[error("no gallery registered under this id")]
    UnknownGallery,
    /// A gallery is already registered under the requested id.
    #[error("a gallery is already registered under this id")]
    DuplicateGallery,
    /// A load ticket that this gallery never issued.
    #[error("load ticket {0:?} does not belong to this gallery")]
    StaleTicket(LoadTicket),
}
