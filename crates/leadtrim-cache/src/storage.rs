//! Blob storage backends

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::CacheKey;

/// Byte-blob store addressed by [`CacheKey`]
pub trait Storage: Send + Sync {
    fn read(&self, key: &CacheKey) -> io::Result<Vec<u8>>;

    /// Replace the blob stored under `key`
    fn write(&self, key: &CacheKey, data: &[u8]) -> io::Result<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.to_string())
    }
}

impl Storage for DiskStorage {
    fn read(&self, key: &CacheKey) -> io::Result<Vec<u8>> {
        std::fs::read(self.path_for(key))
    }

    fn write(&self, key: &CacheKey, data: &[u8]) -> io::Result<()> {
        // Succeeds when the directory already exists
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), data)
    }
}

/// In-process store, for tests and disabled persistence
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &CacheKey) -> io::Result<Vec<u8>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        entries
            .get(&key.to_string())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, key.to_string()))
    }

    fn write(&self, key: &CacheKey, data: &[u8]) -> io::Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

fn poisoned() -> io::Error {
    io::Error::other("memory storage lock poisoned")
}
