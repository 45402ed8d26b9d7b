//! Lightbox — favorite image gallery engine
//!
//! Durable favorites list, filtered gallery projection, and modal viewer state.
//!
//! ## Quick start
//!
//! ```
//! use lightbox::favorites::FavoritesStore;
//! use lightbox::gallery;
//! use lightbox::storage::MemoryStorage;
//!
//! let mut store = FavoritesStore::with_storage(MemoryStorage::new())?;
//! store.add("http://example.com/photos/cat.png")?;
//!
//! let view = gallery::render(store.list(), "cat");
//! assert!(matches!(view, lightbox::GalleryView::Gallery(_)));
//! # Ok::<(), lightbox::LightboxError>(())
//! ```

pub mod config;
pub mod error;
pub mod favorites;
pub mod gallery;
pub mod storage;
pub mod viewer;

// Re-export common types
pub use error::{LightboxError, Result};
pub use favorites::FavoritesStore;
pub use gallery::{caption_for, render, EmptyReason, GalleryItem, GalleryView};
pub use storage::{JsonFileStorage, MemoryStorage, StorageAdapter};
pub use viewer::{Viewer, ViewerState};
