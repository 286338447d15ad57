// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vantage_gesture::swipe::NavigationIntent;

/// Identity of a gallery entry.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable description of one gallery entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Unique identity within a gallery.
    pub id: ImageId,
    /// Human-readable name, for captions and alt text.
    pub display_name: String,
    /// Location of the full-resolution image.
    pub full_url: String,
    /// Location of the thumbnail; empty to reuse the full image.
    pub thumbnail_url: String,
}

impl ImageDescriptor {
    /// Creates a descriptor.
    pub fn new(
        id: ImageId,
        display_name: impl Into<String>,
        full_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            full_url: full_url.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }

    /// Thumbnail location, falling back to the full image.
    #[must_use]
    pub fn thumbnail_or_full(&self) -> &str {
        if self.thumbnail_url.is_empty() {
            &self.full_url
        } else {
            &self.thumbnail_url
        }
    }
}

/// Handle returned by [`Gallery::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionListenerId(u64);

type Listener = Box<dyn FnMut(ImageId)>;

/// Ordered gallery with a current entry.
///
/// Order defines swipe adjacency; [`Gallery::next`] and
/// [`Gallery::previous`] wrap around at both ends. The revision counter and
/// listeners change only when the current entry actually changes, so a
/// single-entry gallery never notifies on navigation.
pub struct Gallery {
    images: Vec<ImageDescriptor>,
    current: usize,
    revision: u64,
    listeners: Vec<(SelectionListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("images", &self.images)
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .field("next_listener", &self.next_listener)
            .finish()
    }
}

impl Gallery {
    /// Creates a gallery, keeping the first descriptor for any repeated id.
    ///
    /// The first entry becomes current.
    pub fn new(images: impl IntoIterator<Item = ImageDescriptor>) -> Self {
        let mut unique: Vec<ImageDescriptor> = Vec::new();
        for image in images {
            if !unique.iter().any(|existing| existing.id == image.id) {
                unique.push(image);
            }
        }
        Self {
            images: unique,
            current: 0,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Entries in navigation order.
    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the gallery has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageDescriptor> {
        self.images.iter().find(|image| image.id == id)
    }

    /// Position of an entry in navigation order.
    #[must_use]
    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// The current entry, or `None` for an empty gallery.
    #[must_use]
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.current)
    }

    /// Id of the current entry.
    #[must_use]
    pub fn current_id(&self) -> Option<ImageId> {
        self.current().map(|image| image.id)
    }

    /// Number of times the current entry has changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener called with the new id whenever the current
    /// entry changes.
    pub fn subscribe(&mut self, listener: impl FnMut(ImageId) + 'static) -> SelectionListenerId {
        let id = SelectionListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SelectionListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Makes `id` current. Returns `true` if the current entry changed.
    ///
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: ImageId) -> bool {
        match self.index_of(id) {
            Some(index) => self.set_current(index),
            None => false,
        }
    }

    /// Id of the entry after the current one, wrapping to the first.
    #[must_use]
    pub fn peek_next(&self) -> Option<ImageId> {
        let len = self.images.len();
        (len > 0).then(|| self.images[(self.current + 1) % len].id)
    }

    /// Id of the entry before the current one, wrapping to the last.
    #[must_use]
    pub fn peek_previous(&self) -> Option<ImageId> {
        let len = self.images.len();
        (len > 0).then(|| self.images[(self.current + len - 1) % len].id)
    }

    /// Moves to the next entry and returns the new current id.
    pub fn next(&mut self) -> Option<ImageId> {
        let id = self.peek_next()?;
        self.select(id);
        Some(id)
    }

    /// Moves to the previous entry and returns the new current id.
    pub fn previous(&mut self) -> Option<ImageId> {
        let id = self.peek_previous()?;
        self.select(id);
        Some(id)
    }

    /// Applies a swipe decision.
    pub fn apply(&mut self, intent: NavigationIntent) -> Option<ImageId> {
        match intent {
            NavigationIntent::Next => self.next(),
            NavigationIntent::Previous => self.previous(),
        }
    }

    fn set_current(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        self.current = index;
        self.revision += 1;
        let id = self.images[index].id;
        for (_, listener) in &mut self.listeners {
            listener(id);
        }
        true
    }
}
