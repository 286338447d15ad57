// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Size;
use vantage_fit::is_usable;

use crate::gallery::ImageId;

/// Error recorded when an image's natural dimensions cannot be obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
    /// The host reported that decoding failed.
    Failed {
        /// Image that failed.
        id: ImageId,
        /// Host-provided description.
        reason: String,
    },
    /// The host reported dimensions that cannot be used for layout.
    InvalidDimensions {
        /// Image that was decoded.
        id: ImageId,
        /// Reported size.
        size: Size,
    },
}

impl DecodeError {
    /// Image the error refers to.
    #[must_use]
    pub fn id(&self) -> ImageId {
        match self {
            Self::Failed { id, .. } | Self::InvalidDimensions { id, .. } => *id,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { id, reason } => write!(f, "decoding image {id} failed: {reason}"),
            Self::InvalidDimensions { id, size } => write!(
                f,
                "image {id} reported unusable dimensions {}x{}",
                size.width, size.height
            ),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Decode status of one image.
#[derive(Clone, Debug, PartialEq)]
pub enum DimensionState {
    /// A decode was requested and has not completed.
    Pending,
    /// Natural dimensions are known.
    Ready(Size),
    /// Decoding failed; stays failed until [`DimensionStore::retry`].
    Failed(DecodeError),
}

/// Natural dimensions per image, filled in as the host finishes decoding.
///
/// The store never blocks or retries on its own. Geometry consumers poll
/// [`DimensionStore::get`] and treat `None` as "not available yet".
#[derive(Clone, Debug, Default)]
pub struct DimensionStore {
    entries: HashMap<ImageId, DimensionState>,
}

impl DimensionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as pending. Returns `true` if the host should start a
    /// decode, which is the case only for images the store has never seen.
    pub fn request(&mut self, id: ImageId) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, DimensionState::Pending);
        true
    }

    /// Records decoded dimensions.
    ///
    /// Returns `Ok(false)` without changing anything when the image has
    /// already failed; a failed image must be retried first. Unusable sizes
    /// mark the image as failed and are returned as an error.
    pub fn resolve(&mut self, id: ImageId, size: Size) -> Result<bool, DecodeError> {
        if matches!(self.entries.get(&id), Some(DimensionState::Failed(_))) {
            return Ok(false);
        }
        if !is_usable(size) {
            let err = DecodeError::InvalidDimensions { id, size };
            self.entries.insert(id, DimensionState::Failed(err.clone()));
            return Err(err);
        }
        self.entries.insert(id, DimensionState::Ready(size));
        Ok(true)
    }

    /// Records a decode failure and returns the stored error.
    pub fn fail(&mut self, id: ImageId, reason: impl Into<String>) -> DecodeError {
        let err = DecodeError::Failed {
            id,
            reason: reason.into(),
        };
        self.entries.insert(id, DimensionState::Failed(err.clone()));
        err
    }

    /// Moves a failed image back to pending. Returns `true` if the host
    /// should decode it again.
    pub fn retry(&mut self, id: ImageId) -> bool {
        match self.entries.get_mut(&id) {
            Some(state) if matches!(state, DimensionState::Failed(_)) => {
                *state = DimensionState::Pending;
                true
            }
            _ => false,
        }
    }

    /// Decode status of `id`, or `None` if it was never requested.
    #[must_use]
    pub fn state(&self, id: ImageId) -> Option<&DimensionState> {
        self.entries.get(&id)
    }

    /// Natural dimensions of `id` if they are known.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<Size> {
        match self.entries.get(&id) {
            Some(DimensionState::Ready(size)) => Some(*size),
            _ => None,
        }
    }

    /// Returns `true` if the dimensions of `id` are known.
    #[must_use]
    pub fn is_ready(&self, id: ImageId) -> bool {
        self.get(id).is_some()
    }

    /// Drops everything known about `id`.
    pub fn forget(&mut self, id: ImageId) {
        self.entries.remove(&id);
    }
}
