//! # Album Record Store
//!
//! Owns the authoritative album collection.
//!
//! Lookups are a linear scan by exact id; the first match wins. Every
//! operation holds the collection lock for its whole duration, so no caller
//! can observe a half-applied insert, update or delete.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::model::{seed_albums, Album, AlbumFields};

/// Record store trait for album operations
pub trait AlbumRepository: Send + Sync {
    /// Every album, in collection order
    fn list(&self) -> StoreResult<Vec<Album>>;

    /// First album whose id equals `id`
    fn get(&self, id: &str) -> StoreResult<Album>;

    /// Append an album and return it
    fn insert(&self, album: Album) -> StoreResult<Album>;

    /// Overwrite title, artist and price of the first match
    fn update(&self, id: &str, fields: AlbumFields) -> StoreResult<Album>;

    /// Remove the first match and return it
    fn delete(&self, id: &str) -> StoreResult<Album>;

    /// Number of albums currently held
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// What insert does when the id is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Accept the duplicate. Later lookups resolve to the older record.
    #[default]
    Permissive,
    /// Refuse the insert with `StoreError::DuplicateId`
    Reject,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Refuse inserts that reuse an existing id (default: false)
    #[serde(default)]
    pub reject_duplicate_ids: bool,

    /// Start with the three seed albums (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_ids: false,
            seed: default_seed(),
        }
    }
}

impl StoreConfig {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicate_ids {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Permissive
        }
    }
}

/// In-memory album store guarded by a single lock
#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
    policy: DuplicatePolicy,
}

impl InMemoryAlbumStore {
    /// Empty store
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self::with_albums(policy, Vec::new())
    }

    /// Store holding `albums` in the given order
    pub fn with_albums(policy: DuplicatePolicy, albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
            policy,
        }
    }

    /// Store holding the three seed albums
    pub fn seeded(policy: DuplicatePolicy) -> Self {
        Self::with_albums(policy, seed_albums())
    }

    /// Build a store from configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        let albums = if config.seed { seed_albums() } else { Vec::new() };
        Self::with_albums(config.duplicate_policy(), albums)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Album>>> {
        self.albums.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Album>>> {
        self.albums.write().map_err(|_| StoreError::LockPoisoned)
    }

    fn position(albums: &[Album], id: &str) -> StoreResult<usize> {
        albums
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl AlbumRepository for InMemoryAlbumStore {
    fn list(&self) -> StoreResult<Vec<Album>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: &str) -> StoreResult<Album> {
        let albums = self.read()?;
        let index = Self::position(&albums, id)?;
        Ok(albums[index].clone())
    }

    fn insert(&self, album: Album) -> StoreResult<Album> {
        let mut albums = self.write()?;

        if self.policy == DuplicatePolicy::Reject && albums.iter().any(|a| a.id == album.id) {
            return Err(StoreError::DuplicateId(album.id));
        }

        albums.push(album.clone());
        tracing::debug!(id = %album.id, count = albums.len(), "album inserted");
        Ok(album)
    }

    fn update(&self, id: &str, fields: AlbumFields) -> StoreResult<Album> {
        let mut albums = self.write()?;
        let index = Self::position(&albums, id)?;

        albums[index].apply(fields);
        tracing::debug!(id, "album updated");
        Ok(albums[index].clone())
    }

    fn delete(&self, id: &str) -> StoreResult<Album> {
        let mut albums = self.write()?;
        let index = Self::position(&albums, id)?;

        let removed = albums.remove(index);
        tracing::debug!(id, count = albums.len(), "album deleted");
        Ok(removed)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
