// ABOUTME: File-backed key-value store writing one JSON file per key under a data directory
// ABOUTME: Writes go through a temporary file and a rename so readers never see partial values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use ecoplate_core::{AppError, AppResult};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Key-value store rooted at a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::invalid_input(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn storage_error(action: &str, path: &Path, error: io::Error) -> AppError {
    AppError::storage(format!("Failed to {action} {}: {error}", path.display()))
        .with_source(error)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| storage_error("create", &self.dir, e))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| storage_error("write", &tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| storage_error("replace", &path, e))
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &path, e)),
        }
    }
}
