use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaList {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub item_count: u32,
}

impl Display for MediaList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} items)", self.name, self.item_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Only movies and TV shows can be list entries; people and the rest are `None`.
    pub fn from_api(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCandidate {
    pub id: u64,
    pub display_name: String,
    pub media_type: MediaType,
}

impl Display for MediaCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (Type: {}, ID: {})",
            self.display_name, self.media_type, self.id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub username: Option<String>,
}
