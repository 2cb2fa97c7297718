//! Store behavior against a mocked provider: pagination, search, favorites,
//! details merging, theme, and change notification.

use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;
use cinedex_core::persist::{MemoryStore, UserStateStore};
use cinedex_core::provider::{MetadataProvider, ProviderError};
use cinedex_core::store::{
    CatalogStore, StoreEvent, DETAILS_FETCH_ERROR, POPULAR_FETCH_ERROR,
    SEARCH_ERROR,
};
use cinedex_model::{
    CastMember, Credits, CrewMember, Genre, Movie, MovieDetails,
    PaginatedResponse, Theme, UserState, Video, VideoList,
};
use mockall::predicate::eq;

mockall::mock! {
    pub Provider {}

    #[async_trait]
    impl MetadataProvider for Provider {
        async fn popular(
            &self,
            page: u32,
        ) -> Result<PaginatedResponse<Movie>, ProviderError>;

        async fn search(
            &self,
            query: &str,
            page: u32,
        ) -> Result<PaginatedResponse<Movie>, ProviderError>;

        async fn details(
            &self,
            movie_id: i64,
        ) -> Result<MovieDetails, ProviderError>;

        async fn credits(&self, movie_id: i64) -> Result<Credits, ProviderError>;

        async fn videos(&self, movie_id: i64) -> Result<VideoList, ProviderError>;
    }
}

fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: Some("2020-01-01".to_string()),
        vote_average: 7.0,
        vote_count: 100,
        genre_ids: vec![18],
        adult: false,
        original_language: "en".to_string(),
        original_title: title.to_string(),
        popularity: 10.0,
        video: false,
    }
}

fn listing(page: u32, total_pages: i64, ids: Range<i64>) -> PaginatedResponse<Movie> {
    let results: Vec<Movie> =
        ids.map(|id| movie(id, &format!("Movie {id}"))).collect();
    let total_results = total_pages * results.len().max(1) as i64;
    PaginatedResponse {
        page: i64::from(page),
        results,
        total_pages,
        total_results,
    }
}

fn api_error() -> ProviderError {
    ProviderError::Api {
        status: 503,
        message: "upstream unavailable".to_string(),
    }
}

fn store_with(provider: MockProvider) -> CatalogStore {
    CatalogStore::new(Arc::new(provider), Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn popular_page_one_replaces_and_later_pages_append() {
    let mut provider = MockProvider::new();
    provider
        .expect_popular()
        .with(eq(1u32))
        .returning(|_| Ok(listing(1, 5, 0..20)));
    provider
        .expect_popular()
        .with(eq(2u32))
        .returning(|_| Ok(listing(2, 5, 20..40)));
    provider
        .expect_popular()
        .with(eq(5u32))
        .returning(|_| Ok(listing(5, 5, 80..100)));
    let store = store_with(provider);

    store.fetch_popular(1).await.unwrap();
    let state = store.snapshot();
    assert!(!state.is_loading);
    assert!(!state.is_loading_more);
    assert_eq!(state.popular.len(), 20);
    assert_eq!(state.popular_cursor.page, 1);
    assert!(state.popular_cursor.has_more);

    store.fetch_popular(2).await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.popular.len(), 40);
    // Page-1 results followed by page-2 results, provider order preserved.
    assert_eq!(state.popular[0].id, 0);
    assert_eq!(state.popular[19].id, 19);
    assert_eq!(state.popular[20].id, 20);
    assert_eq!(state.popular[39].id, 39);
    assert_eq!(state.popular_cursor.page, 2);
    assert!(state.popular_cursor.has_more);

    store.fetch_popular(5).await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.popular_cursor.page, 5);
    assert!(!state.popular_cursor.has_more);
}

#[tokio::test]
async fn failed_page_keeps_loaded_listing_and_next_attempt_clears_error() {
    let mut provider = MockProvider::new();
    provider
        .expect_popular()
        .with(eq(1u32))
        .returning(|_| Ok(listing(1, 5, 0..20)));
    provider
        .expect_popular()
        .with(eq(2u32))
        .returning(|_| Err(api_error()));
    let store = store_with(provider);

    store.fetch_popular(1).await.unwrap();
    assert!(store.fetch_popular(2).await.is_err());

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(POPULAR_FETCH_ERROR));
    assert_eq!(state.popular.len(), 20);
    assert!(!state.is_loading);
    assert!(!state.is_loading_more);
    // The failure must not advance the cursor.
    assert_eq!(state.popular_cursor.page, 1);

    // A fresh page-1 attempt clears the error.
    store.fetch_popular(1).await.unwrap();
    assert!(store.snapshot().error.is_none());
}

#[tokio::test]
async fn adding_a_favorite_twice_is_a_no_op() {
    let persist = Arc::new(MemoryStore::new());
    let store =
        CatalogStore::new(Arc::new(MockProvider::new()), persist.clone());

    store.add_favorite(movie(1, "One"));
    store.add_favorite(movie(1, "One"));
    store.add_favorite(movie(2, "Two"));

    let ids: Vec<i64> =
        store.snapshot().favorites.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(store.is_favorite(1));

    store.remove_favorite(99); // absent id, no-op
    store.remove_favorite(1);
    let ids: Vec<i64> =
        store.snapshot().favorites.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(!store.is_favorite(1));

    // Every mutation is mirrored to persistence.
    let saved = persist.load().unwrap();
    let saved_ids: Vec<i64> = saved.favorites.iter().map(|m| m.id).collect();
    assert_eq!(saved_ids, vec![2]);
}

#[tokio::test]
async fn construction_restores_persisted_theme_and_favorites() {
    let persist = Arc::new(MemoryStore::new());
    persist
        .save(&UserState {
            theme: Theme::Light,
            favorites: vec![movie(7, "Seven"), movie(3, "Three")],
        })
        .unwrap();

    let store =
        CatalogStore::new(Arc::new(MockProvider::new()), persist.clone());
    assert_eq!(store.theme(), Theme::Light);
    assert!(store.is_favorite(7));
    let ids: Vec<i64> =
        store.snapshot().favorites.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![7, 3]);
}

#[tokio::test]
async fn blank_query_clears_results_without_a_provider_request() {
    let mut provider = MockProvider::new();
    // The only expectation; a request for the blank query would panic the
    // mock.
    provider
        .expect_search()
        .withf(|query, &page| query == "rust" && page == 1)
        .returning(|_, _| Ok(listing(1, 1, 0..3)));
    let store = store_with(provider);

    store.search("rust", 1).await.unwrap();
    assert_eq!(store.snapshot().search_results.len(), 3);

    store.search("   ", 1).await.unwrap();
    let state = store.snapshot();
    assert!(state.search_results.is_empty());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn search_query_is_trimmed_before_the_request() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|query, _| query == "dune")
        .returning(|_, _| Ok(listing(1, 1, 0..1)));
    let store = store_with(provider);

    store.search("  dune  ", 1).await.unwrap();
    assert_eq!(store.snapshot().search_results.len(), 1);
}

#[tokio::test]
async fn rapid_sequential_searches_each_replace_the_results() {
    // The debounce lives in the presentation layer; bypassing it must leave
    // the store correct, with the last call winning.
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|query, _| query == "a")
        .returning(|_, _| Ok(listing(1, 1, 0..2)));
    provider
        .expect_search()
        .withf(|query, _| query == "ab")
        .returning(|_, _| Ok(listing(1, 1, 10..12)));
    let store = store_with(provider);

    store.search("a", 1).await.unwrap();
    store.search("ab", 1).await.unwrap();

    let state = store.snapshot();
    let ids: Vec<i64> = state.search_results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(state.search_cursor.page, 1);
    assert!(!state.search_cursor.has_more);
}

#[tokio::test]
async fn search_pagination_appends_and_failure_keeps_results() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|query, &page| query == "saga" && page == 1)
        .returning(|_, _| Ok(listing(1, 3, 0..20)));
    provider
        .expect_search()
        .withf(|query, &page| query == "saga" && page == 2)
        .returning(|_, _| Ok(listing(2, 3, 20..40)));
    provider
        .expect_search()
        .withf(|query, &page| query == "saga" && page == 3)
        .returning(|_, _| Err(api_error()));
    let store = store_with(provider);

    store.search("saga", 1).await.unwrap();
    store.search("saga", 2).await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.search_results.len(), 40);
    assert_eq!(state.search_cursor.page, 2);
    assert!(state.search_cursor.has_more);

    assert!(store.search("saga", 3).await.is_err());
    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(SEARCH_ERROR));
    assert_eq!(state.search_results.len(), 40);
}

#[tokio::test]
async fn clear_search_empties_results_and_resets_the_cursor() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .returning(|_, _| Ok(listing(2, 3, 20..40)));
    let store = store_with(provider);

    store.search("saga", 2).await.unwrap();
    store.clear_search();

    let state = store.snapshot();
    assert!(state.search_results.is_empty());
    assert_eq!(state.search_cursor.page, 1);
    assert!(state.search_cursor.has_more);
}

#[tokio::test]
async fn reset_pagination_leaves_the_listing_loaded() {
    let mut provider = MockProvider::new();
    provider
        .expect_popular()
        .returning(|page| Ok(listing(page, 5, 0..20)));
    let store = store_with(provider);

    store.fetch_popular(1).await.unwrap();
    store.fetch_popular(2).await.unwrap();
    store.reset_pagination();

    let state = store.snapshot();
    assert_eq!(state.popular_cursor.page, 1);
    assert!(state.popular_cursor.has_more);
    assert_eq!(state.popular.len(), 40);
}

#[tokio::test]
async fn details_merges_base_credits_and_videos() {
    let mut provider = MockProvider::new();
    provider.expect_details().with(eq(550i64)).returning(|id| {
        Ok(MovieDetails {
            movie: movie(id, "Fight Club"),
            runtime: Some(139),
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
            credits: Credits::default(),
            videos: VideoList::default(),
        })
    });
    provider.expect_credits().with(eq(550i64)).returning(|_| {
        Ok(Credits {
            cast: vec![CastMember {
                id: 819,
                name: "Edward Norton".to_string(),
                character: "The Narrator".to_string(),
                profile_path: None,
            }],
            crew: vec![CrewMember {
                id: 7467,
                name: "David Fincher".to_string(),
                job: "Director".to_string(),
            }],
        })
    });
    provider.expect_videos().with(eq(550i64)).returning(|_| {
        Ok(VideoList {
            results: vec![Video {
                key: "SUXWAEX2jlg".to_string(),
                name: "Trailer 1".to_string(),
                site: "YouTube".to_string(),
                kind: "Trailer".to_string(),
            }],
        })
    });
    let store = store_with(provider);

    store.fetch_details(550).await.unwrap();

    let state = store.snapshot();
    let details = state.details.expect("details committed");
    assert_eq!(details.movie.id, 550);
    assert_eq!(details.runtime, Some(139));
    assert_eq!(details.genres[0].name, "Drama");
    assert_eq!(details.credits.cast[0].character, "The Narrator");
    assert_eq!(details.credits.crew[0].job, "Director");
    assert_eq!(
        details.videos.trailer().map(|v| v.key.as_str()),
        Some("SUXWAEX2jlg")
    );
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn details_failure_commits_nothing() {
    let mut provider = MockProvider::new();
    provider.expect_details().returning(|id| {
        Ok(MovieDetails {
            movie: movie(id, &format!("Movie {id}")),
            runtime: Some(100),
            genres: Vec::new(),
            credits: Credits::default(),
            videos: VideoList::default(),
        })
    });
    provider
        .expect_credits()
        .with(eq(1i64))
        .returning(|_| Ok(Credits::default()));
    provider
        .expect_credits()
        .with(eq(2i64))
        .returning(|_| Err(api_error()));
    provider
        .expect_videos()
        .returning(|_| Ok(VideoList::default()));
    let store = store_with(provider);

    store.fetch_details(1).await.unwrap();
    assert_eq!(store.snapshot().details.as_ref().unwrap().movie.id, 1);

    // One failing leg fails the whole fan-out; the previous record stays.
    assert!(store.fetch_details(2).await.is_err());
    let state = store.snapshot();
    assert_eq!(state.details.as_ref().unwrap().movie.id, 1);
    assert_eq!(state.error.as_deref(), Some(DETAILS_FETCH_ERROR));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn toggle_theme_flips_and_persists() {
    let persist = Arc::new(MemoryStore::new());
    let store =
        CatalogStore::new(Arc::new(MockProvider::new()), persist.clone());
    assert_eq!(store.theme(), Theme::Dark);

    store.toggle_theme();
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(persist.load().unwrap().theme, Theme::Light);

    store.toggle_theme();
    assert_eq!(persist.load().unwrap().theme, Theme::Dark);
}

#[tokio::test]
async fn subscribers_observe_committed_changes() {
    let mut provider = MockProvider::new();
    provider
        .expect_popular()
        .returning(|_| Ok(listing(1, 1, 0..2)));
    let store = store_with(provider);
    let mut events = store.subscribe();

    store.add_favorite(movie(5, "Five"));
    assert!(matches!(events.try_recv(), Ok(StoreEvent::Favorites)));

    store.fetch_popular(1).await.unwrap();
    assert!(matches!(events.try_recv(), Ok(StoreEvent::Loading)));
    assert!(matches!(events.try_recv(), Ok(StoreEvent::Popular)));

    store.toggle_theme();
    assert!(matches!(events.try_recv(), Ok(StoreEvent::Theme)));
}
