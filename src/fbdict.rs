// SPDX-License-Identifier: Apache-2.0

// FileBackedDictionary is a string-keyed container whose entries are
// durably backed by one file each inside a dedicated directory. When
// created via new() it loads every decodable entry file from that
// directory; afterwards each mutation is written through to disk
// before it becomes visible in memory. Underlying structure is a
// HashMap and designed to be accessed synchronously; callers needing
// concurrent access wrap the container in a mutex.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::entry_file;
use crate::errors::StoreError;
use crate::filename;
use crate::notifier::{Notifier, StoreEvent};

pub struct FileBackedDictionary<V: Codec> {
    entries: HashMap<String, V>,
    dir: PathBuf,
    notifier: Notifier,
}

impl<V: Codec> FileBackedDictionary<V> {
    // Creates the backing directory if absent, then eagerly loads
    // whatever valid entry files it holds. A file that cannot be
    // decoded, or whose name was not produced by this container, is
    // skipped with a warning; one bad file never blocks the rest.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let mut entries = HashMap::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                log::warn!("skipping non-file {:?} in backing directory", path);
                continue;
            }

            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n,
                None => {
                    log::warn!("skipping non-UTF-8 filename {:?}", path);
                    continue;
                }
            };

            let key = match filename::decode(name) {
                Ok(k) => k,
                Err(e) => {
                    log::warn!("skipping foreign filename {:?}: {}", name, e);
                    continue;
                }
            };

            let bytes = match entry_file::read(&path) {
                Ok(b) => b,
                Err(e) => {
                    log::warn!("skipping unreadable entry {:?}: {}", path, e);
                    continue;
                }
            };

            match V::decode(&bytes) {
                Ok(value) => {
                    entries.insert(key, value);
                }
                Err(e) => {
                    log::warn!("skipping undecodable entry {:?}: {}", path, e);
                }
            }
        }

        log::debug!("loaded {} entries from {:?}", entries.len(), dir);
        Ok(Self {
            entries,
            dir,
            notifier: Notifier::new(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    // Write-through, fail-atomic with respect to the in-memory view:
    // encode first, then persist, and only then commit to memory and
    // notify. A failed encode or write leaves the container exactly
    // as it was.
    pub fn set(&mut self, key: &str, value: V) -> Result<(), StoreError> {
        let bytes = value.encode()?;
        entry_file::write(&self.entry_path(key)?, &bytes)?;

        self.entries.insert(key.to_string(), value);
        self.notifier.send_update(key, &bytes);
        Ok(())
    }

    // Removing an absent key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }

        entry_file::delete(&self.entry_path(key)?)?;
        self.entries.remove(key);
        self.notifier.send_remove(key);
        Ok(())
    }

    // Deletes exactly the files belonging to current entries, never
    // unrelated files sharing the directory. On a mid-way failure the
    // entries already deleted are gone from memory as well, so memory
    // and disk stay in agreement.
    pub fn remove_all(&mut self) -> Result<(), StoreError> {
        let keys: Vec<String> = self.entries.keys().cloned().collect();
        for key in keys {
            entry_file::delete(&self.entry_path(&key)?)?;
            self.entries.remove(&key);
        }
        self.notifier.send_clear();
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    // No ordering guarantee; callers sort for display themselves.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn subscribe(&mut self) -> std::sync::mpsc::Receiver<StoreEvent> {
        self.notifier.subscribe()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let name = filename::encode(key).map_err(|e| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ))
        })?;
        Ok(self.dir.join(name))
    }
}
