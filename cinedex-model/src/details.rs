use std::fmt;

use serde::{Deserialize, Serialize};

use crate::media::Movie;

/// A `(id, name)` genre pair as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// One credited cast entry, ordered by the provider's billing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

/// One credited crew entry with its job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub job: String,
}

/// Cast and crew block from the credits endpoint. Provider order is
/// preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// One video record from the videos endpoint, used to locate a trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Ordered video list block from the videos endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

impl VideoList {
    /// The first YouTube video of type "Trailer", if any.
    pub fn trailer(&self) -> Option<&Video> {
        self.results
            .iter()
            .find(|video| video.kind == "Trailer" && video.site == "YouTube")
    }
}

/// Full detail record for one movie: the base fields of [`Movie`] plus
/// runtime, named genres, and the credits and videos blocks merged in from
/// their own endpoints.
///
/// The detail endpoint alone carries no credits or videos; both default to
/// empty and are filled in by whoever performs the three-way merge.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub runtime: Option<i64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub videos: VideoList,
}

impl fmt::Debug for MovieDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieDetails")
            .field("id", &self.movie.id)
            .field("title", &self.movie.title)
            .field("release_date", &self.movie.release_date)
            .field("runtime", &self.runtime)
            .field("genre_count", &self.genres.len())
            .field("cast_count", &self.credits.cast.len())
            .field("crew_count", &self.credits.crew.len())
            .field("video_count", &self.videos.results.len())
            .finish()
    }
}
