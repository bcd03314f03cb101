// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! A gesture starts undetermined. The first time the pointer has moved at
//! least [`GestureConfig::axis_threshold`] along its dominant axis the gesture
//! is fixed as a horizontal [`Classification::Slide`] or a vertical
//! [`Classification::Scroll`], and it keeps that classification until it ends.
//! A gesture that never gets classified is a tap.
//!
//! ## Outcomes
//!
//! | Classification | `on_move`                                  | `on_end`                                 |
//! |----------------|--------------------------------------------|------------------------------------------|
//! | Undetermined   | [`MoveOutcome::Pending`]                   | [`EndOutcome::Tap`] with the zone, if any |
//! | Scroll         | [`MoveOutcome::Scroll`] (default allowed)  | [`EndOutcome::Scrolled`]                 |
//! | Slide (slides) | [`MoveOutcome::Slides`] with the offset    | [`EndOutcome::Slides`] with the decision |
//! | Slide (thumbs) | [`MoveOutcome::Thumbs`] with the indent    | [`EndOutcome::Thumbs`] with the fling    |
//!
//! A second touch point at any sample aborts the gesture: the move reports
//! [`MoveOutcome::Aborted`] and the following release is ignored.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::GestureConfig;
use crate::inertia::{ThumbTrack, fling_landing};
use crate::strip::{SlideRelease, SlideStrip};

/// A pointer position with the time it was observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in client coordinates.
    pub position: Point,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(position: Point, time: u64) -> Self {
        Self { position, time }
    }

    /// Creates a sample from raw coordinates.
    #[must_use]
    pub const fn at(x: f64, y: f64, time: u64) -> Self {
        Self::new(Point::new(x, y), time)
    }
}

/// The intent a gesture has been recognized as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Not enough movement yet; a release now is a tap.
    #[default]
    Undetermined,
    /// Horizontal drag of the layer under the pointer.
    Slide,
    /// Vertical movement left to the page's own scrolling.
    Scroll,
}

/// The draggable layer a gesture started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragLayer {
    /// The main slide strip.
    Slides,
    /// The thumbnail strip.
    Thumbs,
}

/// A control a tap can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapZone {
    /// The "previous" button.
    Prev,
    /// The "next" button.
    Next,
    /// The thumbnail of slide `index`.
    Thumb(usize),
}

/// Geometry of both draggable layers, read at the time of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layers {
    /// Main slide strip.
    pub slides: SlideStrip,
    /// Thumbnail strip.
    pub thumbs: ThumbTrack,
}

/// State of the gesture in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// Layer the gesture started on.
    pub layer: DragLayer,
    /// Sample recorded at gesture start.
    pub start: PointerSample,
    /// Pointer displacement since start, as of the last move.
    pub shift: Vec2,
    /// Absolute values of `shift`.
    pub abs_shift: Vec2,
    /// Current classification; fixed once it leaves `Undetermined`.
    pub classification: Classification,
    /// True once a second touch point has been seen.
    pub multi_touch: bool,
    /// Thumbnail indent when the gesture started.
    pub thumbs_baseline: f64,
}

impl DragState {
    fn new(start: PointerSample, layer: DragLayer, thumbs_baseline: f64) -> Self {
        Self {
            layer,
            start,
            shift: Vec2::ZERO,
            abs_shift: Vec2::ZERO,
            classification: Classification::Undetermined,
            multi_touch: false,
            thumbs_baseline,
        }
    }
}

/// Result of feeding a move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture is active.
    Idle,
    /// The gesture is still undetermined.
    Pending,
    /// The gesture is a vertical scroll; leave the event alone.
    Scroll,
    /// The slide layer should be placed at `offset` percent.
    Slides {
        /// Target offset in percent of the control width.
        offset: f64,
    },
    /// The thumbnail strip is being dragged.
    Thumbs {
        /// Target indent in pixels, or `None` when the strip cannot be dragged.
        indent: Option<f64>,
    },
    /// A second touch point cancelled the gesture.
    Aborted,
}

impl MoveOutcome {
    /// Returns `true` when the host should suppress the event's default action.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Slides { .. } | Self::Thumbs { .. })
    }
}

/// Landing position of a released thumbnail strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    /// Resting indent in pixels.
    pub indent: f64,
    /// Transition duration in milliseconds.
    pub duration: u64,
}

/// Result of ending a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// No gesture was active.
    Idle,
    /// The gesture was a tap, on the given zone if it was over one.
    Tap(Option<TapZone>),
    /// A scroll gesture ended.
    Scrolled,
    /// A slide drag was released.
    Slides(SlideRelease),
    /// A thumbnail drag was released; `None` when the strip cannot be dragged.
    Thumbs(Option<Fling>),
}

impl EndOutcome {
    /// Returns `true` when the host should suppress the event's default action.
    ///
    /// Only taps on a recognized zone are suppressed.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Tap(Some(_)))
    }
}

/// Tracks a single pointer gesture over a gallery.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    drag: Option<DragState>,
    /// Thresholds used for classification and release.
    pub config: GestureConfig,
}

impl GestureTracker {
    /// Creates a tracker with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GestureConfig::new())
    }

    /// Creates a tracker with a custom configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self { drag: None, config }
    }

    /// Starts a gesture on `layer`.
    ///
    /// `thumbs_indent` is the thumbnail strip's current indent and becomes the
    /// baseline for thumbnail drags. A gesture already in progress is dropped
    /// without an outcome and replaced; the return value reports whether that
    /// happened.
    pub fn on_start(
        &mut self,
        sample: PointerSample,
        layer: DragLayer,
        thumbs_indent: f64,
    ) -> bool {
        let replaced = self.drag.is_some();
        if replaced {
            log::warn!("gesture started while another was active; restarting");
        }
        log::trace!("gesture start on {layer:?} at {:?}", sample.position);
        self.drag = Some(DragState::new(sample, layer, thumbs_indent));
        replaced
    }

    /// Feeds a move sample.
    ///
    /// `multi_touch` reports whether more than one touch point is down.
    pub fn on_move(
        &mut self,
        sample: PointerSample,
        multi_touch: bool,
        layers: &Layers,
    ) -> MoveOutcome {
        let Some(drag) = self.drag.as_mut() else {
            return MoveOutcome::Idle;
        };

        drag.shift = sample.position - drag.start.position;
        drag.abs_shift = Vec2::new(drag.shift.x.abs(), drag.shift.y.abs());
        drag.multi_touch |= multi_touch;

        if drag.multi_touch {
            log::debug!("multi-touch detected; aborting gesture");
            self.drag = None;
            return MoveOutcome::Aborted;
        }

        if drag.classification == Classification::Undetermined {
            drag.classification = classify(drag.abs_shift, self.config.axis_threshold);
            if drag.classification != Classification::Undetermined {
                log::debug!(
                    "gesture on {:?} classified as {:?} (shift {:?})",
                    drag.layer,
                    drag.classification,
                    drag.shift
                );
            }
        }

        match drag.classification {
            Classification::Undetermined => MoveOutcome::Pending,
            Classification::Scroll => MoveOutcome::Scroll,
            Classification::Slide => match drag.layer {
                DragLayer::Slides => MoveOutcome::Slides {
                    offset: layers
                        .slides
                        .drag_offset(drag.shift.x, self.config.edge_resistance),
                },
                DragLayer::Thumbs => MoveOutcome::Thumbs {
                    indent: layers
                        .thumbs
                        .is_draggable()
                        .then(|| drag.shift.x + drag.thumbs_baseline),
                },
            },
        }
    }

    /// Ends the gesture.
    ///
    /// `released_on` is the zone under the pointer at release, if any. Only the
    /// sample's timestamp is used; the shift is the one recorded by the last move.
    pub fn on_end(
        &mut self,
        sample: PointerSample,
        released_on: Option<TapZone>,
        layers: &Layers,
    ) -> EndOutcome {
        let Some(drag) = self.drag.take() else {
            return EndOutcome::Idle;
        };

        match drag.classification {
            Classification::Undetermined => {
                log::trace!("tap on {released_on:?}");
                EndOutcome::Tap(released_on)
            }
            Classification::Scroll => EndOutcome::Scrolled,
            Classification::Slide => match drag.layer {
                DragLayer::Slides => {
                    let release = layers.slides.settle(drag.shift.x, self.config.commit_ratio);
                    log::debug!("slide drag released at {}: {release:?}", drag.shift.x);
                    EndOutcome::Slides(release)
                }
                DragLayer::Thumbs => {
                    if !layers.thumbs.is_draggable() {
                        return EndOutcome::Thumbs(None);
                    }
                    let elapsed = sample.time.saturating_sub(drag.start.time);
                    let gain = self.config.fling_gain;
                    let indent = fling_landing(&layers.thumbs, drag.shift.x, elapsed, gain);
                    log::debug!("thumbnail fling over {elapsed}ms lands at {indent}");
                    EndOutcome::Thumbs(Some(Fling {
                        indent,
                        duration: self.config.fling_duration,
                    }))
                }
            },
        }
    }

    /// Drops the active gesture without an outcome.
    ///
    /// Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// The gesture in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Classification of the gesture in progress.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.drag.as_ref().map(|drag| drag.classification)
    }
}

fn classify(abs_shift: Vec2, threshold: f64) -> Classification {
    if abs_shift.y >= threshold && abs_shift.y > abs_shift.x {
        Classification::Scroll
    } else if abs_shift.x >= threshold && abs_shift.x > abs_shift.y {
        Classification::Slide
    } else {
        Classification::Undetermined
    }
}
