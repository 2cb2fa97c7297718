//! Core data model definitions shared across Cinedex crates.
#![allow(missing_docs)]

pub mod details;
pub mod image;
pub mod media;
pub mod prelude;
pub mod user_state;

// Intentionally curated re-exports for downstream consumers.
pub use details::{
    CastMember, Credits, CrewMember, Genre, MovieDetails, Video, VideoList,
};
pub use image::{BackdropSize, ImageUrlBuilder, PosterSize, ProfileSize};
pub use media::{Movie, PaginatedResponse};
pub use user_state::{Theme, UserState};
