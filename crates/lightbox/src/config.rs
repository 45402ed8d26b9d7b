//! Configuration constants for lightbox

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "lightbox";
}

/// Favorites persistence configuration
pub mod favorites {
    /// Favorites data file name
    pub const FAVORITES_FILE: &str = "favorites.json";
}

/// Gallery rendering configuration
pub mod gallery {
    /// Caption used when a URL has no usable path segment
    pub const FALLBACK_CAPTION: &str = "untitled";
}
