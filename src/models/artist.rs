//! Artist model

use serde::{Deserialize, Serialize};

use super::RawArtist;

/// An artist lookup with its image link and album names resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedArtist {
    pub raw: RawArtist,
    /// Resolved image URL; empty when the provider has no image
    pub image: String,
    /// Deduplicated album names in first-resolution order
    pub album_names: Vec<String>,
}

/// Artist information returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// First biography entry, or empty
    pub bio: String,
    /// Album names in the artist's main discography
    pub albums: Vec<String>,
    /// Link to an image of the artist
    pub image: String,
}

impl Artist {
    /// Format an artist name the way the provider expects it in lookup paths
    ///
    /// "Jay Z" -> "jay-z"
    pub fn lookup_name(name: &str) -> String {
        name.trim().replace(' ', "-").to_lowercase()
    }
}
