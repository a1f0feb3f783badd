//! Memoized dataset loads.
//!
//! A [`DatasetCache`] is owned by whatever hosts the charts (the CLI in watch
//! mode, a long-lived process). Entries are keyed by canonical path and stay
//! valid while the file's modification time is unchanged. There is no
//! teardown: entries live until invalidated, cleared, or the cache is dropped.

use crate::Database;
use anyhow::Context;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

struct CacheEntry {
    modified: SystemTime,
    db: Database,
}

/// Outcome of [`DatasetCache::load`].
#[derive(Debug)]
pub struct CacheLookup {
    pub db: Database,
    /// True when the file was (re)parsed, false on a cache hit.
    pub reloaded: bool,
}

#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the database for `path`, loading it when it is not cached or
    /// the file changed since it was cached.
    pub fn load(&mut self, path: impl AsRef<Path>) -> anyhow::Result<CacheLookup> {
        let key = canonical(path.as_ref())?;
        let modified = fs::metadata(&key)
            .and_then(|m| m.modified())
            .with_context(|| format!("failed to stat {}", key.display()))?;

        if let Some(entry) = self.entries.get(&key) {
            if entry.modified == modified {
                log::debug!("cache: hit for {}", key.display());
                return Ok(CacheLookup {
                    db: entry.db.clone(),
                    reloaded: false,
                });
            }
            log::info!("cache: {} changed on disk, reloading", key.display());
        }

        let db = Database::from_path(&key)?;
        log::info!(
            "cache: loaded {} (modified {})",
            key.display(),
            DateTime::<Local>::from(modified).format("%Y-%m-%d %H:%M:%S")
        );
        self.entries.insert(
            key,
            CacheEntry {
                modified,
                db: db.clone(),
            },
        );
        Ok(CacheLookup { db, reloaded: true })
    }

    /// Drop the entry for `path`. Returns whether one was cached.
    pub fn invalidate(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let key = canonical(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.remove(&key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        canonical(path.as_ref())
            .map(|key| self.entries.contains_key(&key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn canonical(path: &Path) -> anyhow::Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("failed to resolve {}", path.display()))
}
