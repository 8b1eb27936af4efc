//! Enrichment resolvers
//!
//! Each resolver turns a reference found on a raw record (album id, genre
//! id, image link, artist name) into the value it points to. They hold no
//! state of their own and can run concurrently.

use super::{missing, CatalogService};
use crate::error::Result;
use crate::models::raw::{AlbumsEnvelope, ArtistsEnvelope, GenresEnvelope, ImagesEnvelope};
use crate::models::{Album, Artist, Genre, RawArtist};
use crate::utils::build_url;

impl CatalogService {
    /// Look up an album by id
    pub async fn resolve_album(&self, album_id: &str) -> Result<Album> {
        let url = self.entity_url(&self.config.albums_url, album_id);
        let context = format!("failed to get album with id {}", album_id);

        let envelope: AlbumsEnvelope = self.fetch(url, context.clone()).await?;
        envelope.albums.into_iter().next().ok_or_else(|| {
            missing(context, format!("album with id {} not found", album_id))
        })
    }

    /// Look up a genre by id
    pub async fn resolve_genre(&self, genre_id: &str) -> Result<Genre> {
        let url = self.entity_url(&self.config.genres_url, genre_id);
        let context = format!("failed to get genre with id {}", genre_id);

        let envelope: GenresEnvelope = self.fetch(url, context.clone()).await?;
        envelope.genres.into_iter().next().ok_or_else(|| {
            missing(context, format!("genre with id {} not found", genre_id))
        })
    }

    /// Resolve an image reference link to the first image's URL.
    ///
    /// The reference comes from a previous response and is requested as-is.
    /// An empty image list yields an empty string; only a failed request is an error.
    pub async fn resolve_image(&self, image_ref: &str) -> Result<String> {
        let url = build_url(&[image_ref, &self.config.api_key_query()]);

        let envelope: ImagesEnvelope = self.fetch(url, "failed to get image".to_string()).await?;
        Ok(envelope
            .images
            .into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_default())
    }

    /// Look up an artist by display name
    pub async fn resolve_artist(&self, artist_name: &str) -> Result<RawArtist> {
        let lookup_name = urlencoding::encode(&Artist::lookup_name(artist_name)).into_owned();
        let url = self.entity_url(&self.config.artists_url, &lookup_name);
        let context = format!("failed to get artist with name {}", artist_name);

        let envelope: ArtistsEnvelope = self.fetch(url, context.clone()).await?;
        envelope.artists.into_iter().next().ok_or_else(|| {
            missing(context, format!("artist with name {} not found", artist_name))
        })
    }
}
