use serde::{Deserialize, Serialize};

use crate::media::Movie;

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The single record of user state that survives process restarts: theme
/// preference and the favorites list, keyed by movie id with insertion order
/// preserved for display.
///
/// Everything else the store holds (listings, search results, details) is
/// transient and refetched each session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub favorites: Vec<Movie>,
}
