//! Settings manager: ownership and persistence of the live [`Theme`].
//!
//! The manager owns the single theme instance for the process lifetime and
//! walks it through three states: compiled-in defaults, wholesale restore
//! from a persisted record at startup, and repeatable sparse updates from
//! the configuration channel. Every update persists the whole record; the
//! return value of [`SettingsManager::apply`] tells the host whether the
//! display needs a redraw.
//!
//! Persistence is deliberately dumb: a [`SettingsStore`] maps a constant
//! integer key to an opaque blob. A missing, truncated, or otherwise
//! malformed blob is treated as absent; startup never fails because of
//! stored data.

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::DisplayCapability;
use crate::theme::{Theme, ThemeUpdate};

/// Storage key of the theme record.
pub const SETTINGS_KEY: u32 = 1;

// =============================================================================
// Persistence Boundary
// =============================================================================

/// Minimal blob store the settings layer persists through.
pub trait SettingsStore {
    /// Read the blob stored under `key`, if any.
    fn read_blob(&self, key: u32) -> Option<Vec<u8>>;

    /// Store `bytes` under `key`. Failures are swallowed; the in-memory
    /// theme stays authoritative either way.
    fn write_blob(&mut self, key: u32, bytes: &[u8]);
}

/// File-backed store: one `<key>.bin` file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: u32) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl SettingsStore for FileStore {
    fn read_blob(&self, key: u32) -> Option<Vec<u8>> {
        fs::read(self.path(key)).ok()
    }

    fn write_blob(&mut self, key: u32, bytes: &[u8]) {
        if fs::create_dir_all(&self.dir).is_ok() {
            let _ = fs::write(self.path(key), bytes);
        }
    }
}

/// In-memory store backing the unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<u32, Vec<u8>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a blob, as if a previous run had persisted it.
    pub fn with_blob(key: u32, bytes: &[u8]) -> Self {
        let mut store = Self::default();
        store.blobs.insert(key, bytes.to_vec());
        store
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn read_blob(&self, key: u32) -> Option<Vec<u8>> {
        self.blobs.get(&key).cloned()
    }

    fn write_blob(&mut self, key: u32, bytes: &[u8]) {
        self.blobs.insert(key, bytes.to_vec());
    }
}

// =============================================================================
// Settings Manager
// =============================================================================

/// Owner of the process's theme.
pub struct SettingsManager<S: SettingsStore> {
    store: S,
    theme: Theme,
}

impl<S: SettingsStore> SettingsManager<S> {
    /// Initialize from compiled-in defaults, then restore the persisted
    /// record if one exists with the exact expected layout.
    pub fn new(store: S, capability: DisplayCapability) -> Self {
        let mut theme = Theme::defaults(capability);
        if let Some(bytes) = store.read_blob(SETTINGS_KEY)
            && let Some(saved) = Theme::decode(&bytes)
        {
            theme = saved;
        }
        Self { store, theme }
    }

    /// The current theme.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Apply one configuration message and persist the result.
    ///
    /// Persists even when nothing changed, matching the channel's
    /// message-received contract. Returns whether the theme changed, so
    /// the host can mark the display dirty.
    pub fn apply(&mut self, update: &ThemeUpdate) -> bool {
        let changed = self.theme.apply(update);
        self.store.write_blob(SETTINGS_KEY, &self.theme.encode());
        changed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
