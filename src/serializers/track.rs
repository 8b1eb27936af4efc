//! Track mapper

use crate::models::{EnrichedTrack, Track};
use crate::utils::{date_only, format_duration};

pub struct TrackMapper;

impl TrackMapper {
    /// Convert an enriched provider track into the client model
    pub fn to_model(enriched: &EnrichedTrack) -> Track {
        let raw = &enriched.raw;
        Track {
            id: raw.id.clone(),
            name: raw.name.clone(),
            release_date: date_only(&enriched.release_date),
            album_name: raw.album_name.clone(),
            artist_name: raw.artist_name.clone(),
            length: format_duration(raw.playback_seconds),
            audio_snippet: raw.preview_url.clone(),
            genres: enriched.genre_names.clone().unwrap_or_default(),
        }
    }
}
