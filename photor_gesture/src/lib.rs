// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photor Gesture: pointer gesture tracking for carousel galleries.
//!
//! This crate turns a stream of pointer samples into gallery intents. It knows
//! about two draggable layers, the main slide strip and the thumbnail strip,
//! and answers three questions for the host:
//!
//! - Is the gesture a horizontal slide, a vertical scroll, or a tap?
//! - Where should the dragged layer be drawn right now?
//! - Where should it come to rest when the pointer is released?
//!
//! It does not know about any DOM or widget system. Hosts feed it
//! [`PointerSample`]s together with a [`Layers`] snapshot of the strips'
//! geometry and apply the returned [`MoveOutcome`] / [`EndOutcome`].
//!
//! The core types are:
//!
//! - [`GestureTracker`]: the state machine, holding at most one [`DragState`].
//! - [`SlideStrip`]: percent offsets, edge resistance, and commit decisions for
//!   the main strip.
//! - [`ThumbTrack`]: pixel bounds of the thumbnail strip and the inertial tail
//!   via [`fling_landing`].
//! - [`GestureConfig`]: thresholds and gains.
//!
//! ## Minimal example
//!
//! ```rust
//! use photor_gesture::{
//!     DragLayer, EndOutcome, GestureTracker, Layers, MoveOutcome, PointerSample,
//!     SlideRelease, SlideStrip, ThumbTrack,
//! };
//!
//! let layers = Layers {
//!     slides: SlideStrip::new(1000.0, 2, 5),
//!     thumbs: ThumbTrack::new(500.0, 1200.0, 0.0),
//! };
//! let mut tracker = GestureTracker::new();
//!
//! tracker.on_start(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides, 0.0);
//!
//! // A mostly horizontal move past 5px makes this a slide drag.
//! let moved = tracker.on_move(PointerSample::at(300.0, 310.0, 120), false, &layers);
//! assert!(matches!(moved, MoveOutcome::Slides { .. }));
//! assert!(moved.prevents_default());
//!
//! // 300px is more than 5% of the control, so the gallery advances.
//! let ended = tracker.on_end(PointerSample::at(300.0, 310.0, 140), None, &layers);
//! assert_eq!(ended, EndOutcome::Slides(SlideRelease::Next));
//! assert_eq!(layers.slides.target_of(SlideRelease::Next), 3);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod inertia;
mod strip;
mod tracker;

pub use config::GestureConfig;
pub use inertia::{ThumbTrack, fling_landing, fling_speed};
pub use strip::{SlideRelease, SlideStrip};
pub use tracker::{
    Classification, DragLayer, DragState, EndOutcome, Fling, GestureTracker, Layers, MoveOutcome,
    PointerSample, TapZone,
};
