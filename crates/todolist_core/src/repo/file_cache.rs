//! File-backed cache for the to-do item collection.
//!
//! # Responsibility
//! - Keep an ordered, id-unique in-memory sequence of items.
//! - Persist and reload the whole sequence as one JSON array blob.
//!
//! # Invariants
//! - Upsert replaces in place; insertion order survives edits.
//! - `load` replaces the sequence atomically: decode fully, then assign.
//! - No internal locking; callers serialize access themselves.

use crate::model::todo_item::TodoItem;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type CacheResult<T> = Result<T, CacheError>;

/// Failure modes of cache persistence.
///
/// `Encode` is defensive only: the full codec is total over valid items,
/// so serialization of an in-memory sequence is not expected to fail.
#[derive(Debug)]
pub enum CacheError {
    Io(std::io::Error),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cache file I/O failed: {err}"),
            Self::Encode(err) => write!(f, "failed to encode item collection: {err}"),
            Self::Decode(err) => write!(f, "failed to decode item collection: {err}"),
        }
    }
}

impl Error for CacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// In-memory item collection bound to one file location.
///
/// Synchronous and single-threaded by design: `save` and `load` each
/// perform one blocking filesystem call against the configured path.
pub struct FileCache {
    items: Vec<TodoItem>,
    path: PathBuf,
}

impl FileCache {
    /// Creates an empty cache bound to `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            items: Vec::new(),
            path: path.into(),
        }
    }

    /// Target file for `save`/`load`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts `item`, replacing any existing item with the same id.
    ///
    /// Replacement keeps the existing entry's position; a new id is
    /// appended at the end. Never fails.
    pub fn upsert(&mut self, item: TodoItem) {
        match self.items.iter().position(|existing| existing.id == item.id) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    /// Removes every item matching `id`; a no-op when none match.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Read-only view of the current ordered sequence.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Writes the whole collection to the configured path, replacing any
    /// prior content.
    ///
    /// # Errors
    /// - `CacheError::Encode` when serialization fails (defensive only).
    /// - `CacheError::Io` when the destination cannot be written.
    pub fn save(&self) -> CacheResult<()> {
        let started_at = Instant::now();
        info!(
            "event=cache_save module=repo status=start count={} path={}",
            self.items.len(),
            self.path.display()
        );

        let blob = serde_json::to_vec(&self.items).map_err(|err| {
            error!(
                "event=cache_save module=repo status=error duration_ms={} error_code=encode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            CacheError::Encode(err)
        })?;

        match fs::write(&self.path, blob) {
            Ok(()) => {
                info!(
                    "event=cache_save module=repo status=ok count={} duration_ms={}",
                    self.items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=cache_save module=repo status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Reads the configured path and replaces the in-memory collection with
    /// its decoded contents.
    ///
    /// Decode happens before assignment, so a corrupt or partial file
    /// leaves the current sequence unchanged.
    ///
    /// # Errors
    /// - `CacheError::Io` when the source is unreadable (including absent).
    /// - `CacheError::Decode` when the blob is not a valid item array.
    pub fn load(&mut self) -> CacheResult<()> {
        let started_at = Instant::now();
        info!(
            "event=cache_load module=repo status=start path={}",
            self.path.display()
        );

        let blob = fs::read(&self.path).map_err(|err| {
            error!(
                "event=cache_load module=repo status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            CacheError::Io(err)
        })?;

        let items: Vec<TodoItem> = serde_json::from_slice(&blob).map_err(|err| {
            error!(
                "event=cache_load module=repo status=error duration_ms={} error_code=decode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            CacheError::Decode(err)
        })?;

        info!(
            "event=cache_load module=repo status=ok count={} duration_ms={}",
            items.len(),
            started_at.elapsed().as_millis()
        );
        self.items = items;
        Ok(())
    }
}
