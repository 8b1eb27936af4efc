//! Serializers for converting provider records to API responses
//!
//! Mappers only accept enriched records, so a track can never reach a
//! client without its release date having been resolved.

mod artist;
mod track;

pub use artist::ArtistMapper;
pub use track::TrackMapper;
