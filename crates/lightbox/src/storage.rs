//! Storage layer for favorites persistence
//!
//! File-backed and in-memory adapters behind a common trait, plus the
//! path helpers and JSON file I/O they are built on.

use crate::config::app::NAME;
use crate::config::favorites::FAVORITES_FILE;
use crate::error::{LightboxError, Result};
use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| LightboxError::Storage(
            "Could not determine config directory. HOME environment variable may not be set.".to_string()
        ))
}

/// Get path to a specific data file in the default config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

// =============================================================================
// File I/O helpers
// =============================================================================

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot create directory {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!("Cannot create directory {:?}: parent path does not exist", path)
                }
                _ => {
                    format!("Failed to create directory {:?}: {}", path, e)
                }
            };
            Err(LightboxError::Storage(msg))
        }
    }
}

/// Read file contents with proper error handling
fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => Ok(None),
                ErrorKind::PermissionDenied => {
                    Err(LightboxError::Storage(format!(
                        "Permission denied: cannot read {:?}", path
                    )))
                }
                _ => {
                    Err(LightboxError::Storage(format!(
                        "Failed to read {:?}: {}", path, e
                    )))
                }
            }
        }
    }
}

/// Write file contents with proper error handling
fn write_file(path: &Path, content: &str) -> Result<()> {
    match fs::write(path, content) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!("Cannot write to {:?}: parent directory does not exist", path)
                }
                ErrorKind::ReadOnlyFilesystem => {
                    format!("Cannot write to {:?}: filesystem is read-only", path)
                }
                _ => {
                    format!("Failed to write to {:?}: {}", path, e)
                }
            };
            Err(LightboxError::Storage(msg))
        }
    }
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is empty. Undecodable
/// content is reported as [`LightboxError::Malformed`] so callers can
/// choose between surfacing and recovering.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match read_file(path)? {
        Some(c) => c,
        None => return Ok(None),
    };

    // Empty file is treated as non-existent
    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content).map_err(|e| {
        LightboxError::Malformed(format!("Failed to parse {:?}: {}", path, e))
    })?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path
///
/// Creates parent directories if they don't exist.
pub fn save_to<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_if_needed(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(data).map_err(|e| {
        LightboxError::Storage(format!("Failed to serialize data: {}", e))
    })?;

    write_file(path, &content)
}

/// Delete a file at a specific path
pub fn delete_at(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => Ok(()), // Already gone, that's fine
                ErrorKind::PermissionDenied => {
                    Err(LightboxError::Storage(format!(
                        "Permission denied: cannot delete {:?}", path
                    )))
                }
                _ => {
                    Err(LightboxError::Storage(format!(
                        "Failed to delete {:?}: {}", path, e
                    )))
                }
            }
        }
    }
}

/// Check if a file exists at a specific path
pub fn exists_at(path: &Path) -> bool {
    path.exists()
}

// =============================================================================
// StorageAdapter - the persistence boundary for the favorites list
// =============================================================================

/// Durable key-value persistence of the favorites list.
///
/// One adapter instance owns one stored value: the full list of favorite
/// URLs, newest-first. Implementations must never panic on a storage
/// fault; they report it as an error and leave recovery to the caller.
pub trait StorageAdapter {
    /// Load the persisted list. Absent state loads as an empty list;
    /// malformed state is swallowed (with a warning) and also loads as
    /// empty. Only genuine I/O faults surface as errors.
    fn load(&self) -> Result<Vec<String>>;

    /// Persist the full list, replacing the previous value.
    fn save(&self, items: &[String]) -> Result<()>;

    /// Remove the persisted value entirely.
    fn clear(&self) -> Result<()>;
}

/// File-backed adapter storing the list as a JSON array of strings
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create an adapter backed by a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create an adapter at the default location in the config directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(data_path(FAVORITES_FILE)?))
    }

    /// The file this adapter reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageAdapter for JsonFileStorage {
    fn load(&self) -> Result<Vec<String>> {
        match load_from::<Vec<String>>(&self.path) {
            Ok(Some(items)) => Ok(items),
            Ok(None) => Ok(Vec::new()),
            Err(LightboxError::Malformed(msg)) => {
                // Corrupt state is treated as "no favorites" rather than
                // a fatal condition
                warn!("{msg}; starting with an empty favorites list");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, items: &[String]) -> Result<()> {
        save_to(&self.path, items)
    }

    fn clear(&self) -> Result<()> {
        delete_at(&self.path)
    }
}

/// In-memory adapter for tests and ephemeral sessions
///
/// Clones share the same backing list, so a test can keep a handle to
/// the adapter it hands to a store and inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<Vec<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, items: &[String]) -> Result<()> {
        *self.items.lock().unwrap_or_else(|e| e.into_inner()) = items.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).clear();
        Ok(())
    }
}
