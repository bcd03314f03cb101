// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single gallery instance.

use alloc::vec::Vec;

use kurbo::Size;
use photor_gesture::{
    DragLayer, EndOutcome, GestureTracker, Layers, MoveOutcome, PointerSample, SlideRelease,
    SlideStrip, TapZone,
};

use crate::debounce::Debouncer;
use crate::effect::{Effect, Response, SlideFit};
use crate::error::GalleryError;
use crate::geometry::GeometrySnapshot;
use crate::input::{Command, Key};
use crate::loader::{GalleryItem, ImageKind, LoadState, LoadTicket, Loader};
use crate::options::Options;
use crate::thumbs::centered_indent;

/// State of one gallery: current slide, thumbnail strip, loads, and the gesture in progress.
///
/// Every input method returns a [`Response`] describing what the host should
/// change. Nothing is applied until [`mount`](Self::mount) has been called.
#[derive(Clone, Debug)]
pub struct Gallery {
    options: Options,
    slides: Vec<Loader>,
    thumbs: Vec<Loader>,
    geometry: GeometrySnapshot,
    pending_geometry: Option<GeometrySnapshot>,
    resize: Debouncer,
    current: usize,
    thumbs_indent: f64,
    tracker: GestureTracker,
}

impl Gallery {
    /// Creates a gallery over `items`.
    ///
    /// Fails when `items` is empty or `options.current` is not a valid index.
    pub fn new(
        items: Vec<GalleryItem>,
        geometry: GeometrySnapshot,
        options: Options,
    ) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::Empty);
        }
        if options.current >= items.len() {
            return Err(GalleryError::IndexOutOfRange {
                index: options.current,
                len: items.len(),
            });
        }

        let mut slides = Vec::with_capacity(items.len());
        let mut thumbs = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            thumbs.push(Loader::new(LoadTicket::thumb(index), item.thumb_url, None));
            slides.push(Loader::new(LoadTicket::slide(index), item.url, item.alt));
        }

        Ok(Self {
            slides,
            thumbs,
            geometry,
            pending_geometry: None,
            resize: Debouncer::new(options.resize_debounce),
            current: options.current,
            thumbs_indent: 0.0,
            tracker: GestureTracker::with_config(options.gesture),
            options,
        })
    }

    /// Requests every thumbnail and shows the starting slide without a transition.
    pub fn mount(&mut self) -> Response {
        let mut response = Response::default();
        for loader in &mut self.thumbs {
            if let Some(effect) = loader.request() {
                response.push(effect);
            }
        }
        self.show(self.current, 0, &mut response);
        response
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; a gallery has at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Index of the last slide.
    #[must_use]
    pub fn last(&self) -> usize {
        self.slides.len() - 1
    }

    /// Options the gallery was created with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Geometry currently in effect.
    #[must_use]
    pub const fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    /// Current translation of the thumbnail strip in pixels.
    #[must_use]
    pub const fn thumbs_indent(&self) -> f64 {
        self.thumbs_indent
    }

    /// Returns `true` when the thumbnails overflow their container.
    #[must_use]
    pub fn thumbs_draggable(&self) -> bool {
        self.geometry.thumb_track(self.thumbs_indent).is_draggable()
    }

    /// Returns `true` once every thumbnail has loaded or failed.
    #[must_use]
    pub fn thumbs_settled(&self) -> bool {
        self.thumbs.iter().all(|loader| loader.state().is_settled())
    }

    /// Load progress of the image a ticket names.
    #[must_use]
    pub fn load_state(&self, ticket: LoadTicket) -> Option<LoadState> {
        self.loaders(ticket.kind)
            .get(ticket.index)
            .map(Loader::state)
    }

    /// The gesture tracker, for inspecting a drag in progress.
    #[must_use]
    pub const fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Shows slide `index`, using the configured delay when `delay` is `None`.
    pub fn go(&mut self, index: usize, delay: Option<u64>) -> Result<Response, GalleryError> {
        if index >= self.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut response = Response::default();
        self.show(index, delay.unwrap_or(self.options.delay), &mut response);
        Ok(response)
    }

    /// Shows the following slide; at the last slide, settles back onto it.
    pub fn next(&mut self) -> Response {
        let mut response = Response::default();
        self.step_next(&mut response);
        response
    }

    /// Shows the preceding slide; at the first slide, settles back onto it.
    pub fn prev(&mut self) -> Response {
        let mut response = Response::default();
        self.step_prev(&mut response);
        response
    }

    /// Applies a navigation command.
    pub fn apply(&mut self, command: Command) -> Result<Response, GalleryError> {
        match command {
            Command::Go { index, delay } => self.go(index, delay),
            Command::Next => Ok(self.next()),
            Command::Prev => Ok(self.prev()),
        }
    }

    /// A pointer went down on one of the draggable layers.
    pub fn pointer_down(&mut self, sample: PointerSample, layer: DragLayer) -> Response {
        self.tracker.on_start(sample, layer, self.thumbs_indent);
        let mut response = Response::default();
        response.push(Effect::Dragging(true));
        response.push(Effect::HaltTransitions);
        response
    }

    /// The pointer moved. `multi_touch` reports more than one active touch point.
    pub fn pointer_move(&mut self, sample: PointerSample, multi_touch: bool) -> Response {
        let layers = self.layers();
        let outcome = self.tracker.on_move(sample, multi_touch, &layers);
        let mut response = Response {
            prevent_default: outcome.prevents_default(),
            ..Response::default()
        };
        match outcome {
            MoveOutcome::Slides { offset } => response.push(Effect::SlidesOffset {
                percent: offset,
                duration: 0,
            }),
            MoveOutcome::Thumbs { indent: Some(px) } => {
                self.thumbs_indent = px;
                response.push(Effect::ThumbsIndent { px, duration: 0 });
            }
            MoveOutcome::Aborted => self.spring_back(&mut response),
            MoveOutcome::Idle
            | MoveOutcome::Pending
            | MoveOutcome::Scroll
            | MoveOutcome::Thumbs { indent: None } => {}
        }
        response
    }

    /// The pointer was released, over `released_on` if it is a known zone.
    pub fn pointer_up(&mut self, sample: PointerSample, released_on: Option<TapZone>) -> Response {
        let layers = self.layers();
        let outcome = self.tracker.on_end(sample, released_on, &layers);
        let mut response = Response {
            prevent_default: outcome.prevents_default(),
            ..Response::default()
        };
        if outcome == EndOutcome::Idle {
            return response;
        }
        response.push(Effect::Dragging(false));

        match outcome {
            EndOutcome::Tap(Some(TapZone::Prev)) => self.step_prev(&mut response),
            EndOutcome::Tap(Some(TapZone::Next)) => self.step_next(&mut response),
            EndOutcome::Tap(Some(TapZone::Thumb(index))) => {
                if index < self.len() {
                    self.show(index, self.options.delay, &mut response);
                } else {
                    log::warn!("tap on thumbnail {index} of a {}-slide gallery", self.len());
                }
            }
            EndOutcome::Slides(SlideRelease::Next) => self.step_next(&mut response),
            EndOutcome::Slides(SlideRelease::Prev) => self.step_prev(&mut response),
            EndOutcome::Slides(SlideRelease::SnapBack) => {
                self.show(self.current, self.options.delay, &mut response);
            }
            EndOutcome::Thumbs(Some(fling)) => {
                self.thumbs_indent = fling.indent;
                response.push(Effect::ThumbsIndent {
                    px: fling.indent,
                    duration: fling.duration,
                });
            }
            EndOutcome::Idle
            | EndOutcome::Tap(None)
            | EndOutcome::Scrolled
            | EndOutcome::Thumbs(None) => {}
        }
        response
    }

    /// The host cancelled the pointer; a partial drag springs back without navigating.
    pub fn pointer_cancel(&mut self) -> Response {
        let mut response = Response::default();
        if self.tracker.cancel() {
            self.spring_back(&mut response);
        }
        response
    }

    /// A key was pressed. Ignored unless keyboard navigation is enabled.
    pub fn key_down(&mut self, key: Key) -> Response {
        let mut response = Response::default();
        if !self.options.keyboard {
            return response;
        }
        match key {
            Key::Space | Key::ArrowRight => self.step_next(&mut response),
            Key::ArrowLeft => self.step_prev(&mut response),
            Key::Other => {}
        }
        response
    }

    /// Replaces the geometry immediately, without re-laying anything out.
    ///
    /// Hosts call this with fresh measurements before starting a gesture.
    pub fn set_geometry(&mut self, geometry: GeometrySnapshot) {
        self.geometry = geometry;
    }

    /// Records a resize at `now`. The geometry is applied by [`tick`](Self::tick)
    /// once resizes have stopped for the configured debounce gap.
    pub fn resize(&mut self, now: u64, geometry: GeometrySnapshot) {
        self.pending_geometry = Some(geometry);
        self.resize.trigger(now);
    }

    /// Time at which a pending resize will be applied, if any.
    #[must_use]
    pub const fn resize_deadline(&self) -> Option<u64> {
        self.resize.deadline()
    }

    /// Advances time; applies a debounced resize whose gap has elapsed.
    pub fn tick(&mut self, now: u64) -> Response {
        let mut response = Response::default();
        if !self.resize.poll(now) {
            return response;
        }
        if let Some(geometry) = self.pending_geometry.take() {
            log::debug!(
                "applying resize: viewport {:?}, control {:?}",
                geometry.viewport,
                geometry.control
            );
            self.geometry = geometry;
            self.refit(&mut response);
            self.center_thumbs(0, &mut response);
        }
        response
    }

    /// The slide layer finished a transition; hide slides away from the current one.
    pub fn transition_end(&mut self) -> Response {
        let mut response = Response::default();
        for index in 0..self.len() {
            let hidden = index + 1 < self.current || index > self.current + 1;
            response.push(Effect::Visibility { index, hidden });
        }
        response
    }

    /// An image finished loading with natural size `size`.
    pub fn image_loaded(
        &mut self,
        ticket: LoadTicket,
        size: Size,
    ) -> Result<Response, GalleryError> {
        let mut response = Response::default();
        if !self.loader_mut(ticket)?.finish(size) {
            log::warn!("ignoring completion for {ticket:?} with no load outstanding");
            return Ok(response);
        }
        match ticket.kind {
            ImageKind::Slide => response.push(Effect::Fit {
                index: ticket.index,
                fit: SlideFit::compute(self.geometry.viewport, size),
            }),
            ImageKind::Thumb => self.settle_thumb(&mut response),
        }
        Ok(response)
    }

    /// An image failed to load. The gallery stays usable without it.
    pub fn image_failed(&mut self, ticket: LoadTicket) -> Result<Response, GalleryError> {
        let mut response = Response::default();
        let loader = self.loader_mut(ticket)?;
        if !loader.fail() {
            log::warn!("ignoring failure for {ticket:?} with no load outstanding");
            return Ok(response);
        }
        log::error!("image wasn't loaded: {}", loader.url());
        response.push(Effect::LoadFailed(ticket));
        if ticket.kind == ImageKind::Thumb {
            self.settle_thumb(&mut response);
        }
        Ok(response)
    }

    fn layers(&self) -> Layers {
        Layers {
            slides: SlideStrip::new(self.geometry.control.width, self.current, self.last()),
            thumbs: self.geometry.thumb_track(self.thumbs_indent),
        }
    }

    fn loaders(&self, kind: ImageKind) -> &[Loader] {
        match kind {
            ImageKind::Slide => &self.slides,
            ImageKind::Thumb => &self.thumbs,
        }
    }

    fn loader_mut(&mut self, ticket: LoadTicket) -> Result<&mut Loader, GalleryError> {
        let loaders = match ticket.kind {
            ImageKind::Slide => &mut self.slides,
            ImageKind::Thumb => &mut self.thumbs,
        };
        loaders
            .get_mut(ticket.index)
            .ok_or(GalleryError::StaleTicket(ticket))
    }

    /// Returns both layers to their resting positions after an abandoned gesture.
    fn spring_back(&mut self, response: &mut Response) {
        response.push(Effect::Dragging(false));
        response.push(Effect::SlidesOffset {
            percent: SlideStrip::rest_offset(self.current),
            duration: self.options.delay,
        });
        let track = self.geometry.thumb_track(self.thumbs_indent);
        self.thumbs_indent = track.validate_indent(self.thumbs_indent);
        response.push(Effect::ThumbsIndent {
            px: self.thumbs_indent,
            duration: self.options.thumbs_transition,
        });
    }

    fn step_next(&mut self, response: &mut Response) {
        let target = (self.current + 1).min(self.last());
        self.show(target, self.options.delay, response);
    }

    fn step_prev(&mut self, response: &mut Response) {
        let target = self.current.saturating_sub(1);
        self.show(target, self.options.delay, response);
    }

    fn show(&mut self, index: usize, delay: u64, response: &mut Response) {
        log::debug!("showing slide {index} over {delay}ms");
        response.push(Effect::SlidesOffset {
            percent: SlideStrip::rest_offset(index),
            duration: delay,
        });
        self.current = index;
        self.center_thumbs(self.options.thumbs_transition, response);
        response.push(Effect::Current(index));
        self.load_around(index, response);
        response.push(Effect::Buttons {
            prev_disabled: index == 0,
            next_disabled: index == self.last(),
        });
    }

    fn load_around(&mut self, index: usize, response: &mut Response) {
        let range = self.options.loading_range;
        let from = index.saturating_sub(range);
        let to = index.saturating_add(range).min(self.last());
        for loader in &mut self.slides[from..=to] {
            if let Some(effect) = loader.request() {
                response.push(effect);
            }
        }
    }

    fn center_thumbs(&mut self, duration: u64, response: &mut Response) {
        if !self.thumbs_settled() {
            return;
        }
        let Some(frame) = self.geometry.thumb_rect(self.current) else {
            return;
        };
        let track = self.geometry.thumb_track(self.thumbs_indent);
        self.thumbs_indent = centered_indent(&track, frame);
        response.push(Effect::Frame {
            rect: frame,
            duration,
        });
        response.push(Effect::ThumbsIndent {
            px: self.thumbs_indent,
            duration,
        });
    }

    fn settle_thumb(&mut self, response: &mut Response) {
        if self.thumbs_settled() {
            log::debug!("all {} thumbnails settled", self.thumbs.len());
            self.center_thumbs(0, response);
        }
    }

    fn refit(&self, response: &mut Response) {
        for (index, loader) in self.slides.iter().enumerate() {
            if let LoadState::Loaded(size) = loader.state() {
                response.push(Effect::Fit {
                    index,
                    fit: SlideFit::compute(self.geometry.viewport, size),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;
    use kurbo::Rect;

    const EPS: f64 = 1e-9;

    fn items(count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| GalleryItem::new(format!("slide-{i}.jpg"), format!("thumb-{i}.jpg")))
            .collect()
    }

    /// 100px thumbnails side by side in a 500px container.
    fn geometry(count: usize) -> GeometrySnapshot {
        GeometrySnapshot {
            viewport: Size::new(1000.0, 600.0),
            control: Size::new(1000.0, 600.0),
            thumbs: Size::new(500.0, 80.0),
            thumbs_layer_width: 100.0 * count as f64,
            thumb_rects: (0..count)
                .map(|i| Rect::new(100.0 * i as f64, 0.0, 100.0 * (i + 1) as f64, 80.0))
                .collect(),
        }
    }

    fn gallery(count: usize, current: usize) -> Gallery {
        let options = Options {
            current,
            ..Options::default()
        };
        let mut gallery = Gallery::new(items(count), geometry(count), options).unwrap();
        gallery.mount();
        gallery
    }

    fn settle_thumbs(gallery: &mut Gallery) -> Response {
        let mut last = Response::default();
        for index in 0..gallery.len() {
            last = gallery
                .image_loaded(LoadTicket::thumb(index), Size::new(100.0, 80.0))
                .unwrap();
        }
        last
    }

    fn current_marks(response: &Response) -> Vec<usize> {
        response
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Current(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    fn thumbs_indents(response: &Response) -> Vec<(f64, u64)> {
        response
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::ThumbsIndent { px, duration } => Some((*px, *duration)),
                _ => None,
            })
            .collect()
    }

    fn slide_loads(response: &Response) -> Vec<usize> {
        response
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Load { ticket, .. } if ticket.kind == ImageKind::Slide => {
                    Some(ticket.index)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn new_rejects_empty_and_bad_start() {
        assert_eq!(
            Gallery::new(Vec::new(), GeometrySnapshot::default(), Options::default()).unwrap_err(),
            GalleryError::Empty
        );
        let options = Options {
            current: 3,
            ..Options::default()
        };
        assert_eq!(
            Gallery::new(items(3), geometry(3), options).unwrap_err(),
            GalleryError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn mount_requests_thumbs_and_neighbouring_slides() {
        let mut gallery = Gallery::new(items(5), geometry(5), Options::default()).unwrap();
        let response = gallery.mount();

        let thumb_loads = response
            .effects
            .iter()
            .filter(|effect| {
                matches!(effect, Effect::Load { ticket, .. } if ticket.kind == ImageKind::Thumb)
            })
            .count();
        assert_eq!(thumb_loads, 5);
        assert_eq!(slide_loads(&response), vec![0, 1]);
        assert!(response.effects.contains(&Effect::SlidesOffset {
            percent: 0.0,
            duration: 0,
        }));
        assert_eq!(current_marks(&response), vec![0]);
        assert!(response.effects.contains(&Effect::Buttons {
            prev_disabled: true,
            next_disabled: false,
        }));
        // The frame waits for the thumbnails.
        assert!(
            !response
                .effects
                .iter()
                .any(|effect| matches!(effect, Effect::Frame { .. }))
        );
    }

    #[test]
    fn settled_thumbnails_place_the_frame_instantly() {
        let mut gallery = gallery(12, 0);
        let response = settle_thumbs(&mut gallery);

        assert!(gallery.thumbs_settled());
        assert!(response.effects.contains(&Effect::Frame {
            rect: Rect::new(0.0, 0.0, 100.0, 80.0),
            duration: 0,
        }));
        assert_eq!(thumbs_indents(&response), vec![(0.0, 0)]);
    }

    #[test]
    fn go_centers_thumbnail_and_loads_range() {
        let mut gallery = gallery(12, 0);
        settle_thumbs(&mut gallery);

        let response = gallery.go(7, None).unwrap();
        assert_eq!(gallery.current(), 7);
        assert!(response.effects.contains(&Effect::SlidesOffset {
            percent: -700.0,
            duration: 300,
        }));
        assert!(response.effects.contains(&Effect::Frame {
            rect: Rect::new(700.0, 0.0, 800.0, 80.0),
            duration: 240,
        }));
        assert_eq!(thumbs_indents(&response), vec![(-500.0, 240)]);
        assert_eq!(slide_loads(&response), vec![6, 7, 8]);

        // Already-requested slides are not requested again.
        let response = gallery.go(8, Some(0)).unwrap();
        assert_eq!(slide_loads(&response), vec![9]);
    }

    #[test]
    fn go_rejects_out_of_range() {
        let mut gallery = gallery(4, 0);
        assert_eq!(
            gallery.go(4, None).unwrap_err(),
            GalleryError::IndexOutOfRange { index: 4, len: 4 }
        );
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn next_and_prev_stop_at_the_ends() {
        let mut gallery = gallery(3, 2);
        let response = gallery.next();
        assert_eq!(gallery.current(), 2);
        assert!(response.effects.contains(&Effect::Buttons {
            prev_disabled: false,
            next_disabled: true,
        }));

        gallery.prev();
        gallery.prev();
        gallery.prev();
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn apply_routes_commands() {
        let mut gallery = gallery(5, 0);
        gallery.apply(Command::Next).unwrap();
        assert_eq!(gallery.current(), 1);
        gallery
            .apply(Command::Go {
                index: 4,
                delay: Some(0),
            })
            .unwrap();
        assert_eq!(gallery.current(), 4);
        gallery.apply(Command::Prev).unwrap();
        assert_eq!(gallery.current(), 3);
        assert!(gallery
            .apply(Command::Go {
                index: 9,
                delay: None,
            })
            .is_err());
    }

    #[test]
    fn slide_drag_commits_to_next() {
        let mut gallery = gallery(5, 2);

        let down = gallery.pointer_down(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides);
        assert_eq!(
            down.effects.as_slice(),
            &[Effect::Dragging(true), Effect::HaltTransitions]
        );

        let moved = gallery.pointer_move(PointerSample::at(300.0, 310.0, 100), false);
        assert!(moved.prevent_default);
        let [Effect::SlidesOffset { percent, duration: 0 }] = moved.effects.as_slice() else {
            panic!("expected a slide offset, got {:?}", moved.effects);
        };
        assert!((percent + 230.0).abs() < EPS);

        let up = gallery.pointer_up(PointerSample::at(300.0, 310.0, 120), None);
        assert!(!up.prevent_default);
        assert_eq!(gallery.current(), 3);
        assert_eq!(up.effects[0], Effect::Dragging(false));
        assert!(up.effects.contains(&Effect::SlidesOffset {
            percent: -300.0,
            duration: 300,
        }));
    }

    #[test]
    fn short_slide_drag_snaps_back() {
        let mut gallery = gallery(5, 2);
        gallery.pointer_down(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides);
        gallery.pointer_move(PointerSample::at(570.0, 300.0, 100), false);
        let up = gallery.pointer_up(PointerSample::at(570.0, 300.0, 120), None);

        assert_eq!(gallery.current(), 2);
        assert_eq!(current_marks(&up), vec![2]);
    }

    #[test]
    fn first_slide_drag_is_resisted() {
        let mut gallery = gallery(5, 0);
        gallery.pointer_down(PointerSample::at(100.0, 300.0, 0), DragLayer::Slides);
        let moved = gallery.pointer_move(PointerSample::at(190.0, 300.0, 50), false);
        let [Effect::SlidesOffset { percent, .. }] = moved.effects.as_slice() else {
            panic!("expected a slide offset, got {:?}", moved.effects);
        };
        // 90px at a third of the speed over a 1000px control.
        assert!((percent - 3.0).abs() < EPS);
    }

    #[test]
    fn vertical_drag_scrolls_without_effects() {
        let mut gallery = gallery(5, 2);
        gallery.pointer_down(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides);
        let moved = gallery.pointer_move(PointerSample::at(602.0, 380.0, 50), false);
        assert!(moved.is_empty());

        let up = gallery.pointer_up(PointerSample::at(602.0, 380.0, 80), Some(TapZone::Next));
        assert_eq!(up.effects.as_slice(), &[Effect::Dragging(false)]);
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn tap_on_zones_navigates() {
        let mut gallery = gallery(6, 1);

        gallery.pointer_down(PointerSample::at(10.0, 300.0, 0), DragLayer::Slides);
        let up = gallery.pointer_up(PointerSample::at(11.0, 301.0, 40), Some(TapZone::Next));
        assert!(up.prevent_default);
        assert_eq!(gallery.current(), 2);

        gallery.pointer_down(PointerSample::at(10.0, 300.0, 100), DragLayer::Slides);
        gallery.pointer_up(PointerSample::at(10.0, 300.0, 140), Some(TapZone::Prev));
        assert_eq!(gallery.current(), 1);

        gallery.pointer_down(PointerSample::at(420.0, 700.0, 200), DragLayer::Thumbs);
        gallery.pointer_up(PointerSample::at(420.0, 700.0, 240), Some(TapZone::Thumb(4)));
        assert_eq!(gallery.current(), 4);

        // Unknown thumbnails are ignored.
        gallery.pointer_down(PointerSample::at(420.0, 700.0, 300), DragLayer::Thumbs);
        gallery.pointer_up(PointerSample::at(420.0, 700.0, 340), Some(TapZone::Thumb(40)));
        assert_eq!(gallery.current(), 4);
    }

    #[test]
    fn tap_outside_zones_does_nothing() {
        let mut gallery = gallery(6, 1);
        gallery.pointer_down(PointerSample::at(10.0, 300.0, 0), DragLayer::Slides);
        let up = gallery.pointer_up(PointerSample::at(10.0, 300.0, 40), None);
        assert!(!up.prevent_default);
        assert_eq!(up.effects.as_slice(), &[Effect::Dragging(false)]);
    }

    #[test]
    fn multi_touch_never_navigates() {
        let mut gallery = gallery(6, 2);
        gallery.pointer_down(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides);
        gallery.pointer_move(PointerSample::at(400.0, 300.0, 50), false);
        let aborted = gallery.pointer_move(PointerSample::at(100.0, 300.0, 60), true);
        let up = gallery.pointer_up(PointerSample::at(100.0, 300.0, 80), Some(TapZone::Next));

        assert!(current_marks(&aborted).is_empty());
        assert!(aborted.effects.contains(&Effect::SlidesOffset {
            percent: -200.0,
            duration: 300,
        }));
        assert!(up.is_empty());
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn thumbnail_fling_lands_inside_strip() {
        let mut gallery = gallery(12, 0);
        settle_thumbs(&mut gallery);
        gallery.go(7, Some(0)).unwrap();
        assert!((gallery.thumbs_indent() + 500.0).abs() < EPS);

        gallery.pointer_down(PointerSample::at(100.0, 700.0, 0), DragLayer::Thumbs);
        let moved = gallery.pointer_move(PointerSample::at(50.0, 700.0, 50), false);
        assert_eq!(thumbs_indents(&moved), vec![(-550.0, 0)]);

        // speed = |10 * -50 / 100| = 5, tail = -25.
        let up = gallery.pointer_up(PointerSample::at(50.0, 700.0, 100), None);
        assert_eq!(thumbs_indents(&up), vec![(-575.0, 240)]);
        assert!((gallery.thumbs_indent() + 575.0).abs() < EPS);
        assert_eq!(gallery.current(), 7);
    }

    #[test]
    fn fast_thumbnail_fling_stops_at_start() {
        let mut gallery = gallery(12, 0);
        settle_thumbs(&mut gallery);
        gallery.go(7, Some(0)).unwrap();

        gallery.pointer_down(PointerSample::at(100.0, 700.0, 0), DragLayer::Thumbs);
        gallery.pointer_move(PointerSample::at(400.0, 700.0, 80), false);
        let up = gallery.pointer_up(PointerSample::at(400.0, 700.0, 100), None);
        assert_eq!(thumbs_indents(&up), vec![(0.0, 240)]);
    }

    #[test]
    fn short_thumbnail_strip_does_not_drag() {
        let mut gallery = gallery(3, 0);
        settle_thumbs(&mut gallery);
        assert!(!gallery.thumbs_draggable());

        gallery.pointer_down(PointerSample::at(100.0, 700.0, 0), DragLayer::Thumbs);
        let moved = gallery.pointer_move(PointerSample::at(200.0, 700.0, 50), false);
        assert!(moved.prevent_default);
        assert!(moved.effects.is_empty());
        let up = gallery.pointer_up(PointerSample::at(200.0, 700.0, 80), None);
        assert_eq!(up.effects.as_slice(), &[Effect::Dragging(false)]);
    }

    #[test]
    fn pointer_cancel_springs_back() {
        let mut gallery = gallery(5, 1);
        gallery.pointer_down(PointerSample::at(600.0, 300.0, 0), DragLayer::Slides);
        gallery.pointer_move(PointerSample::at(300.0, 300.0, 50), false);

        let cancelled = gallery.pointer_cancel();
        assert!(cancelled.effects.contains(&Effect::SlidesOffset {
            percent: -100.0,
            duration: 300,
        }));
        assert!(!gallery.tracker().is_active());
        assert!(gallery.pointer_cancel().is_empty());
    }

    #[test]
    fn keyboard_navigation_is_opt_in() {
        let mut gallery = gallery(5, 2);
        assert!(gallery.key_down(Key::ArrowRight).is_empty());
        assert_eq!(gallery.current(), 2);

        let options = Options {
            keyboard: true,
            ..Options::default()
        };
        let mut gallery = Gallery::new(items(5), geometry(5), options).unwrap();
        gallery.mount();
        gallery.key_down(Key::Space);
        gallery.key_down(Key::ArrowRight);
        assert_eq!(gallery.current(), 2);
        gallery.key_down(Key::ArrowLeft);
        assert_eq!(gallery.current(), 1);
        assert!(gallery.key_down(Key::Other).is_empty());
    }

    #[test]
    fn resize_is_debounced() {
        let mut gallery = gallery(5, 0);
        gallery
            .image_loaded(LoadTicket::slide(0), Size::new(400.0, 300.0))
            .unwrap();

        let mut resized = geometry(5);
        resized.viewport = Size::new(300.0, 600.0);
        gallery.resize(0, geometry(5));
        gallery.resize(50, resized.clone());
        assert_eq!(gallery.resize_deadline(), Some(134));

        assert!(gallery.tick(100).is_empty());
        assert_eq!(gallery.geometry().viewport, Size::new(1000.0, 600.0));

        let response = gallery.tick(134);
        assert_eq!(gallery.geometry(), &resized);
        assert!(response.effects.contains(&Effect::Fit {
            index: 0,
            fit: SlideFit::compute(resized.viewport, Size::new(400.0, 300.0)),
        }));
        assert!(gallery.tick(500).is_empty());
    }

    #[test]
    fn transition_end_hides_distant_slides() {
        let mut gallery = gallery(6, 2);
        let response = gallery.transition_end();
        let hidden: Vec<usize> = response
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Visibility { index, hidden: true } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(hidden, vec![0, 4, 5]);
        assert_eq!(response.effects.len(), 6);
    }

    #[test]
    fn loaded_slide_is_fitted() {
        let mut gallery = gallery(3, 0);
        let response = gallery
            .image_loaded(LoadTicket::slide(1), Size::new(4000.0, 1500.0))
            .unwrap();
        assert_eq!(
            response.effects.as_slice(),
            &[Effect::Fit {
                index: 1,
                fit: SlideFit::compute(Size::new(1000.0, 600.0), Size::new(4000.0, 1500.0)),
            }]
        );
        assert_eq!(
            gallery.load_state(LoadTicket::slide(1)),
            Some(LoadState::Loaded(Size::new(4000.0, 1500.0)))
        );

        // Completions for images never requested, or reported twice, are ignored.
        assert!(gallery
            .image_loaded(LoadTicket::slide(1), Size::new(1.0, 1.0))
            .unwrap()
            .is_empty());
        assert_eq!(
            gallery.image_loaded(LoadTicket::slide(7), Size::new(1.0, 1.0)),
            Err(GalleryError::StaleTicket(LoadTicket::slide(7)))
        );
    }

    #[test]
    fn failed_thumbnail_still_settles_strip() {
        let mut gallery = gallery(12, 0);
        for index in 1..12 {
            gallery
                .image_loaded(LoadTicket::thumb(index), Size::new(100.0, 80.0))
                .unwrap();
        }
        assert!(!gallery.thumbs_settled());

        let response = gallery.image_failed(LoadTicket::thumb(0)).unwrap();
        assert_eq!(response.effects[0], Effect::LoadFailed(LoadTicket::thumb(0)));
        assert!(gallery.thumbs_settled());
        assert_eq!(thumbs_indents(&response), vec![(0.0, 0)]);
        assert_eq!(
            gallery.load_state(LoadTicket::thumb(0)),
            Some(LoadState::Failed)
        );
    }
}
