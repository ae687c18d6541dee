// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Persistent key-value slots backing the session store.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{BitsyError, BitsyResult};

/// Minimal string key-value storage, in the shape of browser local storage.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> BitsyResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> BitsyResult<()>;
    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> BitsyResult<()>;
}

/// One file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn item_path(&self, key: &str) -> BitsyResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(BitsyError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> BitsyResult<Option<String>> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> BitsyResult<()> {
        let path = self.item_path(key)?;
        fs::create_dir_all(&self.root)?;

        // Write to temp file first, then rename over the slot
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BitsyResult<()> {
        let path = self.item_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> BitsyError {
    BitsyError::Storage("memory storage lock poisoned".to_string())
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> BitsyResult<Option<String>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> BitsyResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BitsyResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &dyn SessionStorage) {
        assert_eq!(storage.get_item("x-bitsy").unwrap(), None);

        storage.set_item("x-bitsy", "first").unwrap();
        storage.set_item("x-bitsy", "second").unwrap();
        assert_eq!(storage.get_item("x-bitsy").unwrap().as_deref(), Some("second"));

        storage.remove_item("x-bitsy").unwrap();
        assert_eq!(storage.get_item("x-bitsy").unwrap(), None);
        storage.remove_item("x-bitsy").unwrap();
    }

    #[test]
    fn memory_storage_overwrites_and_removes() {
        exercise(&MemoryStorage::new());
    }

    #[test]
    fn file_storage_overwrites_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("bitsy"));
        exercise(&storage);
    }

    #[test]
    fn file_storage_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set_item("x-bitsy", "{}").unwrap();

        assert!(dir.path().join("x-bitsy.json").exists());
        assert!(!dir.path().join("x-bitsy.tmp").exists());
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        for key in ["", "../escape", "a/b", "x.bitsy"] {
            assert!(matches!(
                storage.set_item(key, "v"),
                Err(BitsyError::Storage(_))
            ));
        }
    }
}
