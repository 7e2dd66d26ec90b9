//! Live overlay container

use super::PortalKey;

/// One live overlay: a key and its opaque content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalEntry<T> {
    pub key: PortalKey,
    pub content: T,
}

/// The live mount point for overlays.
///
/// Entries are kept in mount order, which is also the z-order the UI draws
/// them in. At most one entry exists per key at any time; mounting an already
/// present key replaces that entry in place so its z-position is preserved.
#[derive(Debug)]
pub struct PortalManager<T> {
    entries: Vec<PortalEntry<T>>,
}

impl<T> PortalManager<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an overlay, or replace the existing one with the same key
    pub fn mount(&mut self, key: PortalKey, content: T) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.content = content;
        } else {
            self.entries.push(PortalEntry { key, content });
        }
    }

    /// Replace the content of an existing overlay; unknown keys are a no-op
    pub fn update(&mut self, key: PortalKey, content: T) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.content = content;
        }
    }

    /// Remove an overlay; unknown keys are a no-op
    pub fn unmount(&mut self, key: PortalKey) {
        self.entries.retain(|e| e.key != key);
    }

    /// Content of the overlay with the given key, if live
    pub fn get(&self, key: PortalKey) -> Option<&T> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.content)
    }

    /// Keys of all live overlays in z-order
    pub fn keys(&self) -> Vec<PortalKey> {
        self.entries.iter().map(|e| e.key).collect()
    }

    /// Live overlays in z-order
    pub fn entries(&self) -> &[PortalEntry<T>] {
        &self.entries
    }

    /// Mutable access for rendering passes
    pub fn entries_mut(&mut self) -> &mut [PortalEntry<T>] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PortalManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
