//! Artist lookup pipeline

use futures::future::try_join_all;
use std::collections::HashSet;

use super::CatalogService;
use crate::error::Result;
use crate::models::{Artist, EnrichedArtist};
use crate::serializers::ArtistMapper;

/// Marker the provider leaves in some album titles
const ALBUM_NAME_MARKER: &str = "XX";

impl CatalogService {
    /// Fetch an artist by display name with image and album names resolved
    pub async fn search_artist(&self, name: &str) -> Result<Artist> {
        let raw = self.resolve_artist(name).await?;

        let image_ref = raw.links.images.href.as_str();
        let image = async {
            if image_ref.is_empty() {
                Ok(String::new())
            } else {
                self.resolve_image(image_ref).await
            }
        };
        let albums = try_join_all(raw.album_groups.main.iter().map(|id| self.resolve_album(id)));

        let (image, albums) = futures::try_join!(image, albums)?;
        let album_names = clean_album_names(albums.into_iter().map(|album| album.name));

        tracing::debug!(
            "resolved artist '{}' with {} albums",
            raw.name,
            album_names.len()
        );

        let enriched = EnrichedArtist {
            raw,
            image,
            album_names,
        };
        Ok(ArtistMapper::to_model(&enriched))
    }
}

/// Strip the marker from each album name and drop repeats, keeping first-seen order
fn clean_album_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| name.replacen(ALBUM_NAME_MARKER, "", 1))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
