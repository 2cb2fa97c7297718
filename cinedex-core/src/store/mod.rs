//! The catalog store: single source of truth for browsing state.
//!
//! The store is explicitly constructed at the application's composition
//! point and handed by reference to presentation surfaces; reads are
//! synchronous snapshots, mutations are async operations that suspend at the
//! provider call and commit on completion. The three fetch kinds (popular,
//! search, details) write disjoint state slices, so there is no
//! cross-operation locking beyond the single state lock.

mod debounce;
mod state;

pub use debounce::SearchDebounce;
pub use state::{
    CatalogState, PageCursor, StoreEvent, DETAILS_FETCH_ERROR,
    POPULAR_FETCH_ERROR, SEARCH_ERROR,
};

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cinedex_model::{Movie, PaginatedResponse, Theme, UserState};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::persist::UserStateStore;
use crate::provider::{MetadataProvider, ProviderError};

const EVENT_CAPACITY: usize = 64;

/// Application-lifetime state container for catalog browsing.
///
/// Network failures are caught inside each operation, converted to the fixed
/// message for that operation family, and stored in the shared `error`
/// field; the same failure is also returned so an awaiting caller can
/// inspect the outcome without polling the flags. Already-loaded data is
/// never discarded on failure.
pub struct CatalogStore {
    provider: Arc<dyn MetadataProvider>,
    user_state: Arc<dyn UserStateStore>,
    state: RwLock<CatalogState>,
    /// Issue stamp for the most recent details fetch; commits are guarded on
    /// it so a superseded response can never overwrite a newer one.
    details_generation: AtomicU64,
    events: broadcast::Sender<StoreEvent>,
}

impl CatalogStore {
    /// Build a store, restoring persisted theme and favorites if present.
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        user_state: Arc<dyn UserStateStore>,
    ) -> Self {
        let mut state = CatalogState::default();
        if let Some(restored) = user_state.load() {
            state.theme = restored.theme;
            state.favorites = restored.favorites;
        }

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            provider,
            user_state,
            state: RwLock::new(state),
            details_generation: AtomicU64::new(0),
            events,
        }
    }

    /// Cloned snapshot of the current state.
    pub fn snapshot(&self) -> CatalogState {
        self.state.read().clone()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme
    }

    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.state.read().is_favorite(movie_id)
    }

    /// Subscribe to committed state changes. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: StoreEvent) {
        let _ = self.events.send(event);
    }

    /// Fetch one page of the popular listing. Page 1 replaces the listing;
    /// later pages append in provider order.
    pub async fn fetch_popular(&self, page: u32) -> Result<(), ProviderError> {
        {
            let mut state = self.state.write();
            if page == 1 {
                state.is_loading = true;
                state.error = None;
            } else {
                state.is_loading_more = true;
            }
        }
        self.notify(StoreEvent::Loading);
        debug!(page, "fetching popular listing");

        match self.provider.popular(page).await {
            Ok(response) => {
                let PaginatedResponse {
                    results,
                    total_pages,
                    ..
                } = response;
                let mut state = self.state.write();
                if page == 1 {
                    state.popular = results;
                } else {
                    state.popular.extend(results);
                }
                state.popular_cursor = PageCursor::after_fetch(page, total_pages);
                state.is_loading = false;
                state.is_loading_more = false;
                drop(state);
                self.notify(StoreEvent::Popular);
                Ok(())
            }
            Err(err) => {
                warn!(page, error = %err, "popular listing fetch failed");
                let mut state = self.state.write();
                state.error = Some(POPULAR_FETCH_ERROR.to_string());
                state.is_loading = false;
                state.is_loading_more = false;
                drop(state);
                self.notify(StoreEvent::Error);
                Err(err)
            }
        }
    }

    /// Search the catalog. A whitespace-only query clears the results
    /// without contacting the provider; otherwise page 1 replaces the
    /// results and later pages append.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<(), ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            self.state.write().search_results.clear();
            self.notify(StoreEvent::Search);
            return Ok(());
        }

        {
            let mut state = self.state.write();
            if page == 1 {
                state.is_loading = true;
                state.error = None;
            } else {
                state.is_loading_more = true;
            }
        }
        self.notify(StoreEvent::Loading);
        debug!(query, page, "searching catalog");

        match self.provider.search(query, page).await {
            Ok(response) => {
                let PaginatedResponse {
                    results,
                    total_pages,
                    ..
                } = response;
                let mut state = self.state.write();
                if page == 1 {
                    state.search_results = results;
                } else {
                    state.search_results.extend(results);
                }
                state.search_cursor = PageCursor::after_fetch(page, total_pages);
                state.is_loading = false;
                state.is_loading_more = false;
                drop(state);
                self.notify(StoreEvent::Search);
                Ok(())
            }
            Err(err) => {
                warn!(query, page, error = %err, "catalog search failed");
                let mut state = self.state.write();
                state.error = Some(SEARCH_ERROR.to_string());
                state.is_loading = false;
                state.is_loading_more = false;
                drop(state);
                self.notify(StoreEvent::Error);
                Err(err)
            }
        }
    }

    /// Fetch the full detail record for one movie: base details, credits and
    /// videos are requested concurrently and merged only once all three
    /// resolve. The previous record stays visible until the merge commits.
    ///
    /// A fetch superseded by a newer one (navigation to another movie before
    /// this one resolved) is discarded at commit time and leaves all state
    /// to the newer operation.
    pub async fn fetch_details(
        &self,
        movie_id: i64,
    ) -> Result<(), ProviderError> {
        let generation =
            self.details_generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }
        self.notify(StoreEvent::Loading);
        debug!(movie_id, "fetching movie details");

        let joined = futures::try_join!(
            self.provider.details(movie_id),
            self.provider.credits(movie_id),
            self.provider.videos(movie_id),
        );

        match joined {
            Ok((mut details, credits, videos)) => {
                details.credits = credits;
                details.videos = videos;

                let mut state = self.state.write();
                if self.details_generation.load(Ordering::SeqCst) != generation
                {
                    debug!(movie_id, "discarding stale details response");
                    return Ok(());
                }
                state.details = Some(details);
                state.is_loading = false;
                drop(state);
                self.notify(StoreEvent::Details);
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.write();
                if self.details_generation.load(Ordering::SeqCst) != generation
                {
                    debug!(movie_id, "discarding stale details failure");
                    return Err(err);
                }
                warn!(movie_id, error = %err, "details fetch failed");
                state.error = Some(DETAILS_FETCH_ERROR.to_string());
                state.is_loading = false;
                drop(state);
                self.notify(StoreEvent::Error);
                Err(err)
            }
        }
    }

    /// Add a movie to favorites. A no-op if the id is already present.
    pub fn add_favorite(&self, movie: Movie) {
        let added = {
            let mut state = self.state.write();
            if state.is_favorite(movie.id) {
                false
            } else {
                state.favorites.push(movie);
                true
            }
        };
        if added {
            self.persist_user_state();
            self.notify(StoreEvent::Favorites);
        }
    }

    /// Remove a movie from favorites. A no-op if the id is absent.
    pub fn remove_favorite(&self, movie_id: i64) {
        let removed = {
            let mut state = self.state.write();
            let before = state.favorites.len();
            state.favorites.retain(|movie| movie.id != movie_id);
            state.favorites.len() != before
        };
        if removed {
            self.persist_user_state();
            self.notify(StoreEvent::Favorites);
        }
    }

    /// Empty the search results and reset the search cursor.
    pub fn clear_search(&self) {
        {
            let mut state = self.state.write();
            state.search_results.clear();
            state.search_cursor = PageCursor::default();
        }
        self.notify(StoreEvent::Search);
    }

    /// Reset the popular-listing cursor without touching the loaded listing,
    /// ahead of a fresh full refetch.
    pub fn reset_pagination(&self) {
        self.state.write().popular_cursor = PageCursor::default();
        self.notify(StoreEvent::Popular);
    }

    /// Flip the theme preference; persisted.
    pub fn toggle_theme(&self) {
        {
            let mut state = self.state.write();
            state.theme = state.theme.toggled();
        }
        self.persist_user_state();
        self.notify(StoreEvent::Theme);
    }

    fn persist_user_state(&self) {
        let user_state = {
            let state = self.state.read();
            UserState {
                theme: state.theme,
                favorites: state.favorites.clone(),
            }
        };
        if let Err(err) = self.user_state.save(&user_state) {
            warn!(error = %err, "failed to persist user state");
        }
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("CatalogStore")
            .field("popular_count", &state.popular.len())
            .field("search_count", &state.search_results.len())
            .field("favorite_count", &state.favorites.len())
            .field("has_details", &state.details.is_some())
            .field("is_loading", &state.is_loading)
            .field("is_loading_more", &state.is_loading_more)
            .field("error", &state.error)
            .finish()
    }
}
