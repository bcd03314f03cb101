// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a gallery through a scripted session and prints every effect.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p photor_demos --example gallery_walkthrough`

use kurbo::{Rect, Size};
use photor_gallery::{
    Command, DragLayer, Effect, GalleryItem, GeometrySnapshot, Key, LoadTicket, Options, Photor,
    PointerSample, Response, TapZone,
};

const GALLERY: &str = "walkthrough";
const COUNT: usize = 10;

fn geometry(viewport_width: f64) -> GeometrySnapshot {
    GeometrySnapshot {
        viewport: Size::new(viewport_width, 600.0),
        control: Size::new(viewport_width, 600.0),
        thumbs: Size::new(viewport_width / 2.0, 80.0),
        thumbs_layer_width: 110.0 * COUNT as f64,
        thumb_rects: (0..COUNT)
            .map(|i| Rect::new(110.0 * i as f64 + 5.0, 0.0, 110.0 * i as f64 + 105.0, 80.0))
            .collect(),
    }
}

fn print(step: &str, response: &Response) {
    println!("== {step}");
    if response.prevent_default {
        println!("   (prevent default)");
    }
    for effect in &response.effects {
        println!("   {effect:?}");
    }
}

/// Plays the host's part in image loading: every requested image "loads" at a fixed size.
fn complete_loads(photor: &mut Photor<&'static str>, response: &Response) {
    let tickets: Vec<LoadTicket> = response
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Load { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .collect();
    let Ok(gallery) = photor.gallery_mut(&GALLERY) else {
        return;
    };
    for ticket in tickets {
        // Make one slide fail so the failure path shows up in the log.
        let result = if ticket == LoadTicket::slide(3) {
            gallery.image_failed(ticket)
        } else {
            gallery.image_loaded(ticket, Size::new(1600.0, 900.0))
        };
        match result {
            Ok(loaded) if !loaded.is_empty() => print("image settled", &loaded),
            Ok(_) => {}
            Err(err) => log::warn!("{err}"),
        }
    }
}

fn main() {
    env_logger::init();

    let items = (0..COUNT)
        .map(|i| {
            GalleryItem::new(format!("photos/{i}.jpg"), format!("photos/thumbs/{i}.jpg"))
                .with_alt(format!("Photo {i}"))
        })
        .collect();
    let options = Options {
        keyboard: true,
        ..Options::default()
    };

    let mut photor = Photor::new();
    let mounted = match photor.init(GALLERY, items, geometry(1000.0), options) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("cannot create gallery: {err}");
            return;
        }
    };
    print("mount", &mounted);
    complete_loads(&mut photor, &mounted);

    let Ok(gallery) = photor.gallery_mut(&GALLERY) else {
        return;
    };

    // A swipe to the left that commits to the next slide.
    print(
        "swipe: down",
        &gallery.pointer_down(PointerSample::at(700.0, 300.0, 1_000), DragLayer::Slides),
    );
    print(
        "swipe: move",
        &gallery.pointer_move(PointerSample::at(520.0, 310.0, 1_080), false),
    );
    let swiped = gallery.pointer_up(PointerSample::at(520.0, 310.0, 1_100), None);
    print("swipe: up", &swiped);

    // A fling on the thumbnail strip.
    gallery.pointer_down(PointerSample::at(300.0, 700.0, 2_000), DragLayer::Thumbs);
    print(
        "fling: move",
        &gallery.pointer_move(PointerSample::at(180.0, 702.0, 2_060), false),
    );
    print(
        "fling: up",
        &gallery.pointer_up(PointerSample::at(180.0, 702.0, 2_080), None),
    );

    // A tap on a thumbnail.
    gallery.pointer_down(PointerSample::at(400.0, 700.0, 3_000), DragLayer::Thumbs);
    let release = PointerSample::at(401.0, 700.0, 3_050);
    let tapped = gallery.pointer_up(release, Some(TapZone::Thumb(5)));
    print("tap thumbnail 5", &tapped);

    // Keyboard, then a burst of resizes applied once things settle.
    let keyed = gallery.key_down(Key::ArrowRight);
    print("arrow right", &keyed);
    gallery.resize(4_000, geometry(900.0));
    gallery.resize(4_040, geometry(800.0));
    print("tick before the gap", &gallery.tick(4_100));
    print("tick after the gap", &gallery.tick(4_124));
    print("transition end", &gallery.transition_end());

    complete_loads(&mut photor, &swiped);
    complete_loads(&mut photor, &tapped);
    complete_loads(&mut photor, &keyed);

    match photor.dispatch(&GALLERY, Command::Go { index: 0, delay: Some(0) }) {
        Ok(response) => print("go 0", &response),
        Err(err) => log::error!("{err}"),
    }
    println!("destroyed {} galleries", photor.destroy_all());
}
