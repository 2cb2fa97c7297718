use std::time::{Duration, Instant};

/// Caller-side debounce for search-as-you-type.
///
/// Presentation surfaces record each keystroke and only invoke
/// [`CatalogStore::search`](super::CatalogStore::search) once input has been
/// quiet for the configured interval. The store itself stays correct when
/// the debounce is bypassed.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    interval: Duration,
    last_input: Option<Instant>,
}

impl SearchDebounce {
    /// Lower bound on the quiet interval.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(300);
    /// Default quiet interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Self::MIN_INTERVAL),
            last_input: None,
        }
    }

    /// Record a keystroke.
    pub fn record_input(&mut self) {
        self.last_input = Some(Instant::now());
    }

    /// Whether input has been quiet long enough to issue the query.
    pub fn ready(&self) -> bool {
        match self.last_input {
            None => true,
            Some(last) => last.elapsed() >= self.interval,
        }
    }

    pub fn reset(&mut self) {
        self.last_input = None;
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
