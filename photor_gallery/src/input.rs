// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host inputs that are not pointer samples.

/// Keys the gallery reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar; advances.
    Space,
    /// Left arrow; goes back.
    ArrowLeft,
    /// Right arrow; advances.
    ArrowRight,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Maps a legacy DOM `keyCode`/`which` value.
    #[must_use]
    pub const fn from_key_code(code: u32) -> Self {
        match code {
            32 => Self::Space,
            37 => Self::ArrowLeft,
            39 => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Navigation request routed to a gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show slide `index`.
    Go {
        /// Target slide.
        index: usize,
        /// Transition duration in milliseconds; the gallery's configured delay when `None`.
        delay: Option<u64>,
    },
    /// Show the following slide, staying put at the end.
    Next,
    /// Show the preceding slide, staying put at the start.
    Prev,
}
