use cinedex_model::{Movie, MovieDetails, Theme};

/// Fixed failure message for the popular-listing fetch.
pub const POPULAR_FETCH_ERROR: &str = "Failed to fetch popular movies";
/// Fixed failure message for catalog search.
pub const SEARCH_ERROR: &str = "Failed to search movies";
/// Fixed failure message for the details fetch.
pub const DETAILS_FETCH_ERROR: &str = "Failed to fetch movie details";

/// Pagination progress for one listing: current 1-based page and whether the
/// server reported further pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub has_more: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
        }
    }
}

impl PageCursor {
    /// Cursor after a successful fetch of `page`. `has_more` is recomputed
    /// from the server-reported page count, never advanced speculatively.
    pub(crate) fn after_fetch(page: u32, total_pages: i64) -> Self {
        Self {
            page,
            has_more: i64::from(page) < total_pages,
        }
    }
}

/// Snapshot of catalog browsing state.
///
/// Consumers read this; all mutation goes through
/// [`CatalogStore`](super::CatalogStore) operations.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub theme: Theme,
    /// Currently loaded popular listing, in provider order. Appended pages
    /// may repeat entries when the provider's underlying ordering shifts
    /// between calls; the provider's ordering is authoritative and no
    /// deduplication is applied.
    pub popular: Vec<Movie>,
    pub search_results: Vec<Movie>,
    /// At most one detail record; a new fetch replaces it only on success.
    pub details: Option<MovieDetails>,
    /// Favorites, keyed by movie id, insertion order preserved.
    pub favorites: Vec<Movie>,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub error: Option<String>,
    pub popular_cursor: PageCursor,
    pub search_cursor: PageCursor,
}

impl CatalogState {
    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.favorites.iter().any(|movie| movie.id == movie_id)
    }
}

/// Which state slice a committed change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Loading,
    Popular,
    Search,
    Details,
    Favorites,
    Theme,
    Error,
}
