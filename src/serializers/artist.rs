//! Artist mapper

use crate::models::{Artist, EnrichedArtist};

pub struct ArtistMapper;

impl ArtistMapper {
    /// Convert an enriched provider artist into the client model.
    /// An artist without biographies gets an empty bio.
    pub fn to_model(enriched: &EnrichedArtist) -> Artist {
        let raw = &enriched.raw;
        let bio = raw
            .bios
            .as_ref()
            .and_then(|bios| bios.first())
            .map(|b| b.bio.clone())
            .unwrap_or_default();

        Artist {
            id: raw.id.clone(),
            name: raw.name.clone(),
            bio,
            albums: enriched.album_names.clone(),
            image: enriched.image.clone(),
        }
    }
}
