//! Provider response shapes
//!
//! These mirror the catalog API's JSON exactly. Nothing outside the
//! resolvers and mappers should need to look at them.

use serde::{Deserialize, Serialize};

use super::{Album, Genre, Image};

/// Track record as returned by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_id: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub playback_seconds: u64,
    #[serde(default, rename = "previewURL")]
    pub preview_url: String,
    #[serde(default)]
    pub links: TrackLinks,
}

impl RawTrack {
    /// Genre ids referenced by this track, if any
    pub fn genre_ids(&self) -> &[String] {
        self.links
            .genres
            .as_ref()
            .map(|g| g.ids.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackLinks {
    #[serde(default)]
    pub genres: Option<GenreLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreLinks {
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Artist record as returned by the artist lookup endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bios: Option<Vec<Bio>>,
    #[serde(default)]
    pub album_groups: AlbumGroups,
    #[serde(default)]
    pub links: ArtistLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bio {
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumGroups {
    #[serde(default)]
    pub main: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistLinks {
    #[serde(default)]
    pub images: ImageLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLink {
    #[serde(default)]
    pub href: String,
}

/// `/search` response body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub meta: SearchMeta,
    pub search: SearchBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeta {
    #[serde(default)]
    pub total_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub data: SearchData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub tracks: Vec<RawTrack>,
}

/// `{ "albums": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumsEnvelope {
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// `{ "genres": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct GenresEnvelope {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// `{ "images": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesEnvelope {
    #[serde(default)]
    pub images: Vec<Image>,
}

/// `{ "artists": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsEnvelope {
    #[serde(default)]
    pub artists: Vec<RawArtist>,
}
