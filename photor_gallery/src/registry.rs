// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An owned collection of galleries keyed by caller-chosen ids.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::effect::Response;
use crate::error::GalleryError;
use crate::gallery::Gallery;
use crate::geometry::GeometrySnapshot;
use crate::input::Command;
use crate::loader::GalleryItem;
use crate::options::Options;

/// Registry of the galleries on a page.
///
/// `K` is whatever the host identifies galleries by: an element id, an index,
/// a node handle.
#[derive(Clone, Debug)]
pub struct Photor<K> {
    galleries: HashMap<K, Gallery>,
}

impl<K> Default for Photor<K> {
    fn default() -> Self {
        Self {
            galleries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Photor<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates, mounts, and registers a gallery under `id`.
    ///
    /// Returns the mount response: thumbnail loads and the first slide.
    pub fn init(
        &mut self,
        id: K,
        items: Vec<GalleryItem>,
        geometry: GeometrySnapshot,
        options: Options,
    ) -> Result<Response, GalleryError> {
        if self.galleries.contains_key(&id) {
            return Err(GalleryError::DuplicateGallery);
        }
        let mut gallery = Gallery::new(items, geometry, options)?;
        let response = gallery.mount();
        self.galleries.insert(id, gallery);
        Ok(response)
    }

    /// The gallery registered under `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Gallery> {
        self.galleries.get(id)
    }

    /// The gallery registered under `id`, for routing input events.
    pub fn gallery_mut(&mut self, id: &K) -> Result<&mut Gallery, GalleryError> {
        self.galleries
            .get_mut(id)
            .ok_or(GalleryError::UnknownGallery)
    }

    /// Routes a navigation command to the gallery registered under `id`.
    pub fn dispatch(&mut self, id: &K, command: Command) -> Result<Response, GalleryError> {
        self.gallery_mut(id)?.apply(command)
    }

    /// Removes the gallery registered under `id`.
    pub fn destroy(&mut self, id: &K) -> Option<Gallery> {
        let removed = self.galleries.remove(id);
        if removed.is_none() {
            log::warn!("destroy requested for a gallery that is not registered");
        }
        removed
    }

    /// Removes every gallery, returning how many there were.
    pub fn destroy_all(&mut self) -> usize {
        let count = self.galleries.len();
        self.galleries.clear();
        count
    }

    /// Number of registered galleries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    /// Returns `true` if no gallery is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    /// Iterator over the registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.galleries.keys()
    }
}
