//! Data models for the catalog proxy
//!
//! Raw provider records live in `raw`; everything else is what clients see.

mod artist;
mod lookup;
pub mod raw;
mod track;

pub use artist::{Artist, EnrichedArtist};
pub use lookup::{Album, Genre, Image};
pub use raw::{RawArtist, RawTrack};
pub use track::{EnrichedTrack, PageBatch, SearchQuery, Track};
