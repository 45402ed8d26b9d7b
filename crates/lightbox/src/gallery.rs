//! Gallery projection
//!
//! Pure functions from (favorites list, filter text) to display
//! descriptors. No side effects, restartable on every keystroke; any
//! actual painting lives in the frontends.

use crate::config::gallery::FALLBACK_CAPTION;

/// One gallery entry ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub url: String,
    /// Last path segment of the URL, or the fallback literal
    pub caption: String,
}

/// Why a rendered gallery came out empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// There are no favorites at all
    NoFavorites,
    /// There are favorites, but none matched the filter
    NoMatches,
}

/// Rendered gallery: items to show, or a distinguishable empty state
/// so the frontend can pick the right placeholder message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Gallery(Vec<GalleryItem>),
    Empty(EmptyReason),
}

/// Derive a display caption from an image URL
///
/// Takes the last `/`-separated segment with any query or fragment
/// suffix stripped. URLs with no usable segment (e.g. a trailing slash)
/// get the fallback literal.
pub fn caption_for(url: &str) -> String {
    let without_suffix = match url.find(['?', '#']) {
        Some(i) => &url[..i],
        None => url,
    };

    let segment = match without_suffix.rfind('/') {
        Some(i) => &without_suffix[i + 1..],
        None => without_suffix,
    };

    if segment.is_empty() {
        FALLBACK_CAPTION.to_string()
    } else {
        segment.to_string()
    }
}

/// Lazily project the list through the filter
///
/// Yields a [`GalleryItem`] for every URL whose caption or URL contains
/// the filter substring, case-insensitively. An empty filter passes
/// every item, in order.
pub fn project<'a>(
    items: &'a [String],
    filter: &str,
) -> impl Iterator<Item = GalleryItem> + 'a {
    let needle = filter.to_lowercase();
    items.iter().filter_map(move |url| {
        let caption = caption_for(url);
        let shown = needle.is_empty()
            || url.to_lowercase().contains(&needle)
            || caption.to_lowercase().contains(&needle);
        shown.then(|| GalleryItem {
            url: url.clone(),
            caption,
        })
    })
}

/// Render the full gallery view for a list and filter
pub fn render(items: &[String], filter: &str) -> GalleryView {
    if items.is_empty() {
        return GalleryView::Empty(EmptyReason::NoFavorites);
    }

    let shown: Vec<GalleryItem> = project(items, filter).collect();
    if shown.is_empty() {
        GalleryView::Empty(EmptyReason::NoMatches)
    } else {
        GalleryView::Gallery(shown)
    }
}
