//! Modal viewer state
//!
//! Two-state machine for the single-image detail overlay: closed, or
//! open on one URL. Transitions are synchronous and event-driven.

/// Viewer state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        url: String,
    },
}

/// Controls the single-image detail view
#[derive(Debug, Default)]
pub struct Viewer {
    state: ViewerState,
}

impl Viewer {
    /// Create a closed viewer
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view on a URL, replacing any previous selection
    pub fn open(&mut self, url: impl Into<String>) {
        self.state = ViewerState::Open { url: url.into() };
    }

    /// Close the detail view, dropping the selection
    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// The URL on display, if the viewer is open
    pub fn current(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Open { url } => Some(url),
            ViewerState::Closed => None,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let viewer = Viewer::new();
        assert!(!viewer.is_open());
        assert_eq!(viewer.current(), None);
        assert_eq!(*viewer.state(), ViewerState::Closed);
    }

    #[test]
    fn test_open_from_closed() {
        let mut viewer = Viewer::new();
        viewer.open("http://a.test/x.png");

        assert!(viewer.is_open());
        assert_eq!(viewer.current(), Some("http://a.test/x.png"));
    }

    #[test]
    fn test_open_from_open_replaces_payload() {
        let mut viewer = Viewer::new();
        viewer.open("http://a.test/x.png");
        viewer.open("http://b.test/y.png");

        assert!(viewer.is_open());
        assert_eq!(viewer.current(), Some("http://b.test/y.png"));
    }

    #[test]
    fn test_close_clears_payload() {
        let mut viewer = Viewer::new();
        viewer.open("http://a.test/x.png");
        viewer.close();

        assert!(!viewer.is_open());
        assert_eq!(viewer.current(), None);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut viewer = Viewer::new();
        viewer.close();
        assert_eq!(*viewer.state(), ViewerState::Closed);
    }
}
