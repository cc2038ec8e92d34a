// SPDX-License-Identifier: Apache-2.0

// The photo-saving flow that sits on top of the store. The capacity
// cap and the image%03d key scheme are application policy and live
// here, at the call site, not inside FileBackedDictionary.

use std::path::PathBuf;

use crate::errors::StoreError;
use crate::fbdict::FileBackedDictionary;
use crate::image::{Bitmap, ImageValue};

pub const DEFAULT_CAPACITY: usize = 120;

#[derive(Debug)]
pub enum GalleryError {
    CapacityReached(usize),
    Store(StoreError),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::CapacityReached(cap) => {
                write!(f, "Gallery is full ({} photos)", cap)
            }
            GalleryError::Store(e) => write!(f, "Store failure: {}", e),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalleryError::CapacityReached(_) => None,
            GalleryError::Store(e) => Some(e),
        }
    }
}

impl From<StoreError> for GalleryError {
    fn from(error: StoreError) -> Self {
        GalleryError::Store(error)
    }
}

pub struct Gallery {
    photos: FileBackedDictionary<ImageValue>,
    capacity: usize,
}

impl Gallery {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_capacity(dir, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(dir: impl Into<PathBuf>, capacity: usize) -> Result<Self, StoreError> {
        Ok(Self {
            photos: FileBackedDictionary::new(dir)?,
            capacity,
        })
    }

    // Key is derived from the current count, matching the original
    // app's numbering: image000, image001, ...
    pub fn save(&mut self, image: Bitmap) -> Result<String, GalleryError> {
        if self.photos.count() >= self.capacity {
            return Err(GalleryError::CapacityReached(self.capacity));
        }

        let key = format!("image{:03}", self.photos.count());
        self.photos.set(&key, ImageValue::new(image))?;
        Ok(key)
    }

    pub fn photo(&self, key: &str) -> Option<&Bitmap> {
        self.photos.get(key).map(|v| &v.image)
    }

    pub fn delete(&mut self, key: &str) -> Result<(), GalleryError> {
        self.photos.remove(key)?;
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), GalleryError> {
        self.photos.remove_all()?;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.photos.count()
    }

    // Display order: lexicographic over the zero-padded keys.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys = self.photos.keys();
        keys.sort();
        keys
    }
}
