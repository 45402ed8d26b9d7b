//! Favorites management
//!
//! Ordered, newest-first list of favorite image URLs backed by a
//! storage adapter. Every mutation is persisted before it returns.

use crate::error::{LightboxError, Result};
use crate::storage::{JsonFileStorage, StorageAdapter};
use std::path::Path;

/// Manages the favorites list in memory
///
/// The URL string itself is the identity key: no two entries are equal
/// (case-sensitive exact match), and new entries go to the front. The
/// store owns the in-memory list; the injected adapter owns the durable
/// encoding. On a failed save the in-memory change is discarded, so
/// `list()` never reports state that was not persisted.
pub struct FavoritesStore {
    items: Vec<String>,
    storage: Box<dyn StorageAdapter>,
}

impl FavoritesStore {
    /// Create a store over an injected storage adapter, loading any
    /// persisted state
    pub fn with_storage(storage: impl StorageAdapter + 'static) -> Result<Self> {
        let items = storage.load()?;
        Ok(Self {
            items,
            storage: Box::new(storage),
        })
    }

    /// Open a store backed by a specific favorites file
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_storage(JsonFileStorage::new(path))
    }

    /// Open a store backed by the default favorites file in the config
    /// directory
    pub fn open_default() -> Result<Self> {
        Self::with_storage(JsonFileStorage::default_location()?)
    }

    /// Save a URL as a favorite
    ///
    /// Prepends and persists; returns `Ok(false)` without touching
    /// anything if the URL is already present.
    pub fn add(&mut self, url: &str) -> Result<bool> {
        if url.is_empty() {
            return Err(LightboxError::InvalidUrl(
                "favorite URL must not be empty".to_string(),
            ));
        }
        if self.contains(url) {
            return Ok(false);
        }

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(url.to_string());
        next.extend(self.items.iter().cloned());

        self.storage.save(&next)?;
        self.items = next;
        Ok(true)
    }

    /// Remove every entry matching the URL exactly
    ///
    /// Returns `Ok(false)` (not an error) if the URL was not present.
    pub fn remove(&mut self, url: &str) -> Result<bool> {
        let next: Vec<String> = self.items.iter().filter(|u| *u != url).cloned().collect();
        if next.len() == self.items.len() {
            return Ok(false);
        }

        self.storage.save(&next)?;
        self.items = next;
        Ok(true)
    }

    /// Add the URL if absent, remove it if present
    ///
    /// Returns whether the URL is a favorite afterwards.
    pub fn toggle(&mut self, url: &str) -> Result<bool> {
        if self.contains(url) {
            self.remove(url)?;
            Ok(false)
        } else {
            self.add(url)?;
            Ok(true)
        }
    }

    /// The current list, newest-first
    pub fn list(&self) -> &[String] {
        &self.items
    }

    /// Check if a URL is favorited (case-sensitive exact match)
    pub fn contains(&self, url: &str) -> bool {
        self.items.iter().any(|u| u == url)
    }

    /// Get number of favorites
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the list and persist the empty sequence
    pub fn clear(&mut self) -> Result<()> {
        self.storage.save(&[])?;
        self.items.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("lightbox_fav_test_{}.json", id))
    }

    fn empty_store() -> FavoritesStore {
        FavoritesStore::with_storage(MemoryStorage::new()).unwrap()
    }

    /// Adapter whose saves always fail, for rollback tests
    struct BrokenStorage;

    impl StorageAdapter for BrokenStorage {
        fn load(&self) -> crate::error::Result<Vec<String>> {
            Ok(vec!["http://a.test/x.png".to_string()])
        }
        fn save(&self, _items: &[String]) -> crate::error::Result<()> {
            Err(LightboxError::Storage("disk on fire".to_string()))
        }
        fn clear(&self) -> crate::error::Result<()> {
            Err(LightboxError::Storage("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_add_and_contains() {
        let mut store = empty_store();

        assert!(store.add("http://a.test/x.png").unwrap());
        assert!(store.contains("http://a.test/x.png"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_prepends() {
        let mut store = empty_store();

        store.add("http://a.test/x.png").unwrap();
        store.add("http://b.test/y.png").unwrap();

        assert_eq!(store.list(), ["http://b.test/y.png", "http://a.test/x.png"]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut store = empty_store();

        assert!(store.add("http://a.test/x.png").unwrap());
        assert!(!store.add("http://a.test/x.png").unwrap());
        assert_eq!(store.list(), ["http://a.test/x.png"]);
    }

    #[test]
    fn test_duplicate_add_keeps_position() {
        // Re-adding an existing URL changes nothing, including its
        // position in the order
        let mut store = empty_store();

        store.add("http://a.test/x.png").unwrap();
        store.add("http://b.test/y.png").unwrap();
        store.add("http://a.test/x.png").unwrap();

        assert_eq!(store.list(), ["http://b.test/y.png", "http://a.test/x.png"]);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut store = empty_store();

        assert!(store.add("http://a.test/X.png").unwrap());
        assert!(store.add("http://a.test/x.png").unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_empty_url() {
        let mut store = empty_store();
        assert!(matches!(store.add(""), Err(LightboxError::InvalidUrl(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut store = empty_store();

        store.add("http://a.test/x.png").unwrap();
        store.add("http://b.test/y.png").unwrap();

        assert!(store.remove("http://b.test/y.png").unwrap());
        assert_eq!(store.list(), ["http://a.test/x.png"]);
        assert!(!store.contains("http://b.test/y.png"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = empty_store();

        store.add("http://a.test/x.png").unwrap();
        assert!(!store.remove("http://b.test/y.png").unwrap());
        assert_eq!(store.list(), ["http://a.test/x.png"]);
    }

    #[test]
    fn test_toggle() {
        let mut store = empty_store();

        assert!(store.toggle("http://a.test/x.png").unwrap());
        assert!(store.contains("http://a.test/x.png"));

        assert!(!store.toggle("http://a.test/x.png").unwrap());
        assert!(!store.contains("http://a.test/x.png"));
    }

    #[test]
    fn test_clear_persists_empty() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        let mut store = FavoritesStore::with_storage(storage).unwrap();

        store.add("http://a.test/x.png").unwrap();
        store.add("http://b.test/y.png").unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        // The adapter's durable state is empty too
        assert!(handle.load().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_immediately_durable() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        let mut store = FavoritesStore::with_storage(storage).unwrap();

        store.add("http://a.test/x.png").unwrap();
        assert_eq!(handle.load().unwrap(), ["http://a.test/x.png"]);

        store.add("http://b.test/y.png").unwrap();
        assert_eq!(
            handle.load().unwrap(),
            ["http://b.test/y.png", "http://a.test/x.png"]
        );

        store.remove("http://a.test/x.png").unwrap();
        assert_eq!(handle.load().unwrap(), ["http://b.test/y.png"]);
    }

    #[test]
    fn test_failed_save_rolls_back_add() {
        let mut store = FavoritesStore::with_storage(BrokenStorage).unwrap();

        let result = store.add("http://b.test/y.png");
        assert!(matches!(result, Err(LightboxError::Storage(_))));
        // In-memory state still matches what is on disk
        assert_eq!(store.list(), ["http://a.test/x.png"]);
    }

    #[test]
    fn test_failed_save_rolls_back_remove() {
        let mut store = FavoritesStore::with_storage(BrokenStorage).unwrap();

        let result = store.remove("http://a.test/x.png");
        assert!(matches!(result, Err(LightboxError::Storage(_))));
        assert_eq!(store.list(), ["http://a.test/x.png"]);
    }

    #[test]
    fn test_distinct_urls_appear_exactly_once() {
        let mut store = empty_store();
        let urls = [
            "http://a.test/x.png",
            "http://b.test/y.png",
            "http://a.test/x.png",
            "http://c.test/z.png",
            "http://b.test/y.png",
        ];

        for url in urls {
            store.add(url).unwrap();
        }

        assert_eq!(
            store.list(),
            [
                "http://c.test/z.png",
                "http://b.test/y.png",
                "http://a.test/x.png"
            ]
        );
    }

    // =========================================================================
    // Persistence tests
    // =========================================================================

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path).unwrap();
            store.add("http://a.test/x.png").unwrap();
            store.add("http://b.test/y.png").unwrap();
        }

        {
            let store = FavoritesStore::open(&path).unwrap();
            assert_eq!(store.len(), 2);
            assert_eq!(store.list(), ["http://b.test/y.png", "http://a.test/x.png"]);
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let path = temp_path();
        let store = FavoritesStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let path = temp_path();
        fs::write(&path, "{{{ definitely not json").unwrap();

        let mut store = FavoritesStore::open(&path).unwrap();
        assert!(store.is_empty());

        // And the store is usable afterwards
        store.add("http://a.test/x.png").unwrap();
        assert_eq!(store.list(), ["http://a.test/x.png"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_persisted_layout_is_plain_array() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path).unwrap();
            store.add("http://a.test/x.png").unwrap();
            store.add("http://b.test/y.png").unwrap();
        }

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, ["http://b.test/y.png", "http://a.test/x.png"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_and_reload() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path).unwrap();
            store.add("http://keep.test/a.png").unwrap();
            store.add("http://drop.test/b.png").unwrap();
            store.remove("http://drop.test/b.png").unwrap();
        }

        {
            let store = FavoritesStore::open(&path).unwrap();
            assert_eq!(store.list(), ["http://keep.test/a.png"]);
        }

        let _ = fs::remove_file(&path);
    }
}
