//! Convenience re-exports for downstream crates.

pub use crate::details::{
    CastMember, Credits, CrewMember, Genre, MovieDetails, Video, VideoList,
};
pub use crate::image::{
    BackdropSize, ImageUrlBuilder, PosterSize, ProfileSize,
};
pub use crate::media::{Movie, PaginatedResponse};
pub use crate::user_state::{Theme, UserState};
