// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photor Gallery: a renderer-agnostic carousel controller.
//!
//! A gallery is a strip of slides with a thumbnail strip underneath. This crate
//! owns everything about it that is state or arithmetic: which slide is
//! current, where the thumbnail strip and its highlight frame sit, which images
//! to load next, how a loaded image should be laid out, and what a pointer
//! gesture means (via [`photor_gesture`]).
//!
//! It does **not** touch a DOM or a widget tree. Hosts are responsible for:
//!
//! - Measuring elements and passing a [`GeometrySnapshot`].
//! - Forwarding pointer, key, resize, transition-end, and timer events.
//! - Loading images named by [`Effect::Load`] and reporting back with the
//!   [`LoadTicket`] they came with.
//! - Applying each [`Response`]'s [`Effect`]s and honoring `prevent_default`.
//!
//! Several galleries on one page are kept in a [`Photor`] registry, keyed by
//! whatever id the host uses, and navigated with [`Command`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use photor_gallery::{
//!     Command, DragLayer, Effect, GalleryItem, GeometrySnapshot, Options, Photor,
//!     PointerSample,
//! };
//!
//! let items = vec![
//!     GalleryItem::new("one.jpg", "one-thumb.jpg"),
//!     GalleryItem::new("two.jpg", "two-thumb.jpg").with_alt("Second"),
//!     GalleryItem::new("three.jpg", "three-thumb.jpg"),
//! ];
//! let geometry = GeometrySnapshot {
//!     viewport: Size::new(1000.0, 600.0),
//!     control: Size::new(1000.0, 600.0),
//!     ..GeometrySnapshot::default()
//! };
//!
//! let mut photor = Photor::new();
//! let mounted = photor.init("hero", items, geometry, Options::default()).unwrap();
//! assert!(mounted.effects.iter().any(|e| matches!(e, Effect::Load { .. })));
//!
//! // Swipe left across most of the control.
//! let gallery = photor.gallery_mut(&"hero").unwrap();
//! gallery.pointer_down(PointerSample::at(800.0, 300.0, 0), DragLayer::Slides);
//! let moved = gallery.pointer_move(PointerSample::at(200.0, 300.0, 150), false);
//! assert!(moved.prevent_default);
//! gallery.pointer_up(PointerSample::at(200.0, 300.0, 160), None);
//! assert_eq!(gallery.current(), 1);
//!
//! // Commands go through the registry.
//! photor.dispatch(&"hero", Command::Next).unwrap();
//! assert_eq!(photor.get(&"hero").unwrap().current(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `photor_gesture`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod effect;
mod error;
mod gallery;
mod geometry;
mod input;
mod loader;
mod options;
mod registry;
mod thumbs;

pub use debounce::Debouncer;
pub use effect::{Effect, Effects, Orientation, Placement, Response, SlideFit};
pub use error::GalleryError;
pub use gallery::Gallery;
pub use geometry::GeometrySnapshot;
pub use input::{Command, Key};
pub use loader::{GalleryItem, ImageKind, LoadState, LoadTicket};
pub use options::Options;
pub use registry::Photor;

pub use photor_gesture::{DragLayer, GestureConfig, PointerSample, TapZone};
