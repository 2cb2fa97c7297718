use super::sizes::{BackdropSize, PosterSize, ProfileSize};

/// Pure, stateless resolver of provider image path fragments against a
/// configured image CDN base URL.
///
/// The provider returns image references as path fragments like
/// `/8uO0gUM8aNqYLs1OsTBQiXu0fEv.jpg`; the full URL is
/// `<base>/<size>/<fragment>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base: String,
}

impl ImageUrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Poster URL for a path fragment, or `None` for an empty fragment.
    pub fn poster(&self, path: &str, size: PosterSize) -> Option<String> {
        self.build(path, size.as_str())
    }

    /// Backdrop URL for a path fragment, or `None` for an empty fragment.
    pub fn backdrop(&self, path: &str, size: BackdropSize) -> Option<String> {
        self.build(path, size.as_str())
    }

    /// Profile URL for a path fragment, or `None` for an empty fragment.
    pub fn profile(&self, path: &str, size: ProfileSize) -> Option<String> {
        self.build(path, size.as_str())
    }

    fn build(&self, path: &str, size: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}{}", self.base, size, path))
    }
}
