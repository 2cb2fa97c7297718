//! Image size buckets and URL resolution for provider image references.

mod sizes;
mod urls;

pub use sizes::{BackdropSize, PosterSize, ProfileSize};
pub use urls::ImageUrlBuilder;
