//! Track search pipeline
//!
//! One search runs as: initial request, sequential pagination, capping,
//! concurrent enrichment, mapping, filtering. Any failure along the way
//! fails the whole search; there are no partial results.

use futures::future::try_join_all;
use tracing::{debug, info};

use super::CatalogService;
use crate::config::CapGranularity;
use crate::error::Result;
use crate::models::raw::SearchResponse;
use crate::models::{EnrichedTrack, PageBatch, RawTrack, SearchQuery, Track};
use crate::serializers::TrackMapper;
use crate::utils::build_url;

impl CatalogService {
    /// Search tracks by name, optionally scoped to an artist.
    ///
    /// Returns only tracks whose name matches the query (case-insensitive)
    /// and, for artist-scoped queries, whose artist name matches exactly.
    pub async fn search_tracks(&self, query: &SearchQuery) -> Result<Vec<Track>> {
        let batches = self.fetch_batches(&query.name).await?;
        let batches = cap_batches(
            batches,
            self.config.max_results,
            self.config.cap_granularity,
        );

        let enriched = self.enrich_batches(batches).await?;
        let candidates: usize = enriched.iter().map(Vec::len).sum();

        let tracks: Vec<Track> = enriched
            .iter()
            .flatten()
            .map(TrackMapper::to_model)
            .filter(|track| query.matches(track))
            .collect();

        info!(
            "track search '{}' matched {} of {} results",
            query.name,
            tracks.len(),
            candidates
        );

        Ok(tracks)
    }

    /// `{host}{base}/search?apikey={key}&query={term}&type=track`
    fn search_url(&self, term: &str) -> String {
        let encoded = urlencoding::encode(term);
        build_url(&[
            &self.config.host,
            &self.config.base_path,
            "/search",
            &self.config.api_key_query(),
            &format!("&query={}&type=track", encoded),
        ])
    }

    /// Issue the initial search and every follow-up page it calls for.
    ///
    /// Pages are requested one after another with a growing offset until
    /// the provider's total is reached, a page comes back empty, or the
    /// result cap is already satisfied.
    async fn fetch_batches(&self, term: &str) -> Result<Vec<PageBatch>> {
        let search_url = self.search_url(term);
        let context = format!("failed to get track with name {}", term);

        let first: SearchResponse = self.fetch(search_url.clone(), context.clone()).await?;
        let total = first.meta.total_count;
        let first_batch = first.search.data.tracks;

        let page_size = self.config.page_size;
        let mut fetched = first_batch.len();
        let mut batches = vec![first_batch];
        let mut offset = 0;

        while fetched < total && !self.cap_reached(batches.len(), fetched) {
            offset += page_size;
            let page_url = build_url(&[
                &search_url,
                &format!("&limit={}&offset={}", page_size, offset),
            ]);
            debug!("fetching search page at offset {} ({}/{})", offset, fetched, total);

            let page: SearchResponse = self.fetch(page_url, context.clone()).await?;
            let batch = page.search.data.tracks;
            if batch.is_empty() {
                debug!("provider returned an empty page at offset {}", offset);
                break;
            }

            fetched += batch.len();
            batches.push(batch);
        }

        debug!(
            "fetched {} records in {} pages for '{}' (total {})",
            fetched,
            batches.len(),
            term,
            total
        );

        Ok(batches)
    }

    fn cap_reached(&self, batch_count: usize, record_count: usize) -> bool {
        match self.config.cap_granularity {
            CapGranularity::Batch => batch_count >= self.config.max_results,
            CapGranularity::Record => record_count >= self.config.max_results,
        }
    }

    /// Enrich every record of every batch concurrently.
    ///
    /// The first failure ends the join; lookups still in flight are dropped.
    async fn enrich_batches(&self, batches: Vec<PageBatch>) -> Result<Vec<Vec<EnrichedTrack>>> {
        try_join_all(batches.into_iter().map(|batch| {
            try_join_all(batch.into_iter().map(|record| self.enrich_track(record)))
        }))
        .await
    }

    /// Attach the album release date and, when referenced, the genre names
    async fn enrich_track(&self, record: RawTrack) -> Result<EnrichedTrack> {
        let (album, genre_names) = futures::try_join!(
            self.resolve_album(&record.album_id),
            self.resolve_genre_names(record.genre_ids()),
        )?;

        Ok(EnrichedTrack {
            raw: record,
            release_date: album.originally_released,
            genre_names,
        })
    }

    /// Resolve all genre ids concurrently; `None` when there are none
    async fn resolve_genre_names(&self, genre_ids: &[String]) -> Result<Option<Vec<String>>> {
        if genre_ids.is_empty() {
            return Ok(None);
        }

        let genres = try_join_all(genre_ids.iter().map(|id| self.resolve_genre(id))).await?;
        Ok(Some(genres.into_iter().map(|genre| genre.name).collect()))
    }
}

/// Bound the batches handed to enrichment.
///
/// `Batch` keeps the first `max_results` batches whatever their size.
/// `Record` keeps at most `max_results` records, cutting the last batch short.
fn cap_batches(
    mut batches: Vec<PageBatch>,
    max_results: usize,
    granularity: CapGranularity,
) -> Vec<PageBatch> {
    match granularity {
        CapGranularity::Batch => {
            batches.truncate(max_results);
            batches
        }
        CapGranularity::Record => {
            let mut remaining = max_results;
            let mut capped = Vec::with_capacity(batches.len());
            for mut batch in batches {
                if remaining == 0 {
                    break;
                }
                batch.truncate(remaining);
                remaining -= batch.len();
                capped.push(batch);
            }
            capped
        }
    }
}
