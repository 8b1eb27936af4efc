//! Track model

use serde::{Deserialize, Serialize};

use super::RawTrack;

/// Records returned by one search request
pub type PageBatch = Vec<RawTrack>;

/// What a client searches for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    /// Track name, matched case-insensitively
    pub name: String,
    /// Optional artist name, matched exactly
    #[serde(default)]
    pub artist: Option<String>,
}

impl SearchQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: None,
        }
    }

    pub fn by_name_and_artist(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: Some(artist.into()),
        }
    }

    /// Check whether a mapped track satisfies this query
    pub fn matches(&self, track: &Track) -> bool {
        if track.name.to_lowercase() != self.name.to_lowercase() {
            return false;
        }
        match &self.artist {
            Some(artist) => track.artist_name == *artist,
            None => true,
        }
    }
}

/// A search result with its album release date and genre names resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTrack {
    pub raw: RawTrack,
    /// Album's original release timestamp
    pub release_date: String,
    /// Resolved genre names; `None` when the track references no genres
    pub genre_names: Option<Vec<String>>,
}

/// Track information returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Release date of the album the track appears on
    pub release_date: String,
    pub album_name: String,
    pub artist_name: String,
    /// Length as "M:SS"
    pub length: String,
    /// Link to a short audio preview
    pub audio_snippet: String,
    pub genres: Vec<String>,
}
