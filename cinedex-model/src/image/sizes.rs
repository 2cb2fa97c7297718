use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Poster image sizes (2:3 aspect ratio).
///
/// These are the size buckets the provider's image CDN accepts for poster
/// paths; `small`/`medium`/`large` name the buckets presentation surfaces
/// pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PosterSize {
    W185,
    #[default]
    W342,
    W500,
    Original,
}

impl PosterSize {
    pub const ALL: [PosterSize; 4] =
        [Self::W185, Self::W342, Self::W500, Self::Original];

    /// Small bucket (185px).
    pub const fn small() -> Self {
        Self::W185
    }

    /// Medium bucket (342px, default).
    pub const fn medium() -> Self {
        Self::W342
    }

    /// Large bucket (500px).
    pub const fn large() -> Self {
        Self::W500
    }

    /// URL path segment for this size.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "w185" => Some(Self::W185),
            "w342" => Some(Self::W342),
            "w500" => Some(Self::W500),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 16:9 widescreen backdrop sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackdropSize {
    W300,
    #[default]
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub const ALL: [BackdropSize; 4] =
        [Self::W300, Self::W780, Self::W1280, Self::Original];

    /// Small bucket (300px).
    pub const fn small() -> Self {
        Self::W300
    }

    /// Medium bucket (780px, default).
    pub const fn medium() -> Self {
        Self::W780
    }

    /// Large bucket (1280px).
    pub const fn large() -> Self {
        Self::W1280
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "w300" => Some(Self::W300),
            "w780" => Some(Self::W780),
            "w1280" => Some(Self::W1280),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

impl Display for BackdropSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person profile image sizes.
///
/// The large bucket is height-constrained (`h632`) rather than
/// width-constrained; the CDN accepts both axis prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub const ALL: [ProfileSize; 4] =
        [Self::W45, Self::W185, Self::H632, Self::Original];

    /// Small bucket (45px).
    pub const fn small() -> Self {
        Self::W45
    }

    /// Medium bucket (185px, default).
    pub const fn medium() -> Self {
        Self::W185
    }

    /// Large bucket (632px tall).
    pub const fn large() -> Self {
        Self::H632
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W185 => "w185",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "w45" => Some(Self::W45),
            "w185" => Some(Self::W185),
            "h632" => Some(Self::H632),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

impl Display for ProfileSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
