//! Test utilities and fixtures for catalog tests.
//!
//! [`MockTransport`] stands in for the provider: it answers requests from a
//! table of canned bodies keyed by exact URL and records every URL it was
//! asked for. Unknown URLs get the provider's 404. Responses can be held
//! back for a while, or forever, to exercise concurrent and cancelled lookups.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use crate::client::{CatalogRequest, CatalogTransport};
use crate::config::CatalogConfig;
use crate::core::CatalogService;
use crate::error::{CatalogError, Result};
use crate::models::raw::{AlbumGroups, ArtistLinks, GenreLinks, ImageLink, TrackLinks};
use crate::models::{RawArtist, RawTrack};

pub const TEST_HOST: &str = "http://catalog.test";
pub const TEST_BASE_PATH: &str = "/v2.2";
pub const TEST_API_KEY: &str = "test-key";

pub const TEST_ALBUM_ID: &str = "test album id";
pub const TEST_ALBUM_NAME: &str = "test album name";
pub const TEST_RELEASE_DATE: &str = "1900-01-01T00:00:00";
pub const TEST_GENRE_ID: &str = "test genre id";
pub const TEST_GENRE_NAME: &str = "test genre name";
pub const TEST_IMAGE_REF: &str = "http://catalog.test/v2.2/artists/Art.test/images";
pub const TEST_LINK: &str = "test link";
pub const TEST_ARTIST_ID: &str = "test artist id";
pub const TEST_ARTIST_NAME: &str = "test artist name";
pub const TEST_FORMATTED_ARTIST_NAME: &str = "test-artist-name";
pub const TEST_TRACK_NAME: &str = "test track name";

#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Error { status: u16, message: String },
}

#[derive(Debug, Clone, Copy)]
enum MockDelay {
    For(Duration),
    Forever,
}

#[derive(Default)]
struct MockInner {
    responses: HashMap<String, MockResponse>,
    delays: HashMap<String, MockDelay>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Counts a request as in flight until dropped, including when the caller
/// abandons the request mid-way
struct InFlight<'a>(&'a MockInner);

impl<'a> InFlight<'a> {
    fn start(inner: &'a MockInner) -> Self {
        let now = inner.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        inner.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(inner)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Scripted provider. Clones share the same script and request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner_mut(&mut self) -> &mut MockInner {
        Arc::get_mut(&mut self.inner).expect("configure the mock before cloning it")
    }

    fn insert(mut self, url: &str, response: MockResponse) -> Self {
        self.inner_mut().responses.insert(url.to_string(), response);
        self
    }

    /// Answer `url` with a JSON body
    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.insert(url, MockResponse::Json(body))
    }

    /// Answer `url` with a provider failure
    pub fn with_error(self, url: &str, status: u16, message: &str) -> Self {
        self.insert(
            url,
            MockResponse::Error {
                status,
                message: message.to_string(),
            },
        )
    }

    /// Hold the answer for `url` back by `delay`
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.inner_mut()
            .delays
            .insert(url.to_string(), MockDelay::For(delay));
        self
    }

    /// Never answer `url`
    pub fn with_no_answer(mut self, url: &str) -> Self {
        self.inner_mut()
            .delays
            .insert(url.to_string(), MockDelay::Forever);
        self
    }

    /// Requests started but not yet answered or abandoned
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Most requests that were in flight at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.inner.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Every URL requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.lock().clone()
    }

    /// Requested URLs that hit the search endpoint
    pub fn search_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| url.contains("/search?"))
            .collect()
    }
}

#[async_trait]
impl CatalogTransport for MockTransport {
    async fn send(&self, request: &CatalogRequest) -> Result<Value> {
        self.inner.requests.lock().push(request.url.clone());
        let _in_flight = InFlight::start(&self.inner);

        match self.inner.delays.get(&request.url) {
            Some(MockDelay::For(delay)) => tokio::time::sleep(*delay).await,
            Some(MockDelay::Forever) => std::future::pending::<()>().await,
            None => {}
        }

        match self.inner.responses.get(&request.url) {
            Some(MockResponse::Json(body)) => Ok(body.clone()),
            Some(MockResponse::Error { status, message }) => {
                Err(CatalogError::from_status(*status, message.clone()))
            }
            None => Err(CatalogError::from_status(404, "Not Found")),
        }
    }
}

/// Log output collected from a thread-local subscriber
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture log output on the current thread until the guard is dropped
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    (capture, tracing::subscriber::set_default(subscriber))
}

pub fn test_config() -> CatalogConfig {
    CatalogConfig {
        host: TEST_HOST.to_string(),
        base_path: TEST_BASE_PATH.to_string(),
        api_key: TEST_API_KEY.to_string(),
        ..Default::default()
    }
}

pub fn service_with(transport: MockTransport) -> CatalogService {
    CatalogService::new(Arc::new(transport), test_config())
}

pub fn service_with_config(transport: MockTransport, config: CatalogConfig) -> CatalogService {
    CatalogService::new(Arc::new(transport), config)
}

pub fn album_url(id: &str) -> String {
    format!("{}{}/albums/{}?apikey={}", TEST_HOST, TEST_BASE_PATH, id, TEST_API_KEY)
}

pub fn genre_url(id: &str) -> String {
    format!("{}{}/genres/{}?apikey={}", TEST_HOST, TEST_BASE_PATH, id, TEST_API_KEY)
}

pub fn artist_url(lookup_name: &str) -> String {
    format!(
        "{}{}/artists/{}?apikey={}",
        TEST_HOST, TEST_BASE_PATH, lookup_name, TEST_API_KEY
    )
}

pub fn image_url(image_ref: &str) -> String {
    format!("{}?apikey={}", image_ref, TEST_API_KEY)
}

/// First search request for an already-encoded term
pub fn search_url(encoded_term: &str) -> String {
    format!(
        "{}{}/search?apikey={}&query={}&type=track",
        TEST_HOST, TEST_BASE_PATH, TEST_API_KEY, encoded_term
    )
}

/// Follow-up search request for a page
pub fn page_url(encoded_term: &str, limit: usize, offset: usize) -> String {
    format!("{}&limit={}&offset={}", search_url(encoded_term), limit, offset)
}

pub fn albums_body(id: &str, name: &str, released: &str) -> Value {
    json!({ "albums": [{ "id": id, "name": name, "originallyReleased": released }] })
}

pub fn genres_body(id: &str, name: &str) -> Value {
    json!({ "genres": [{ "id": id, "name": name }] })
}

pub fn search_body(total: usize, tracks: Vec<Value>) -> Value {
    json!({
        "meta": { "totalCount": total, "returnedCount": tracks.len() },
        "search": { "data": { "tracks": tracks } }
    })
}

pub fn raw_track_json(id: &str, name: &str, album_id: &str, genre_ids: &[&str]) -> Value {
    let mut track = json!({
        "id": id,
        "name": name,
        "albumId": album_id,
        "albumName": TEST_ALBUM_NAME,
        "artistId": TEST_ARTIST_ID,
        "artistName": TEST_ARTIST_NAME,
        "playbackSeconds": 205,
        "previewURL": "test preview url",
        "links": {}
    });
    if !genre_ids.is_empty() {
        track["links"] = json!({ "genres": { "ids": genre_ids } });
    }
    track
}

pub fn raw_track(id: &str, name: &str, album_id: &str, genre_ids: &[&str]) -> RawTrack {
    RawTrack {
        id: id.to_string(),
        name: name.to_string(),
        album_id: album_id.to_string(),
        album_name: TEST_ALBUM_NAME.to_string(),
        artist_id: TEST_ARTIST_ID.to_string(),
        artist_name: TEST_ARTIST_NAME.to_string(),
        playback_seconds: 205,
        preview_url: "test preview url".to_string(),
        links: TrackLinks {
            genres: if genre_ids.is_empty() {
                None
            } else {
                Some(GenreLinks {
                    ids: genre_ids.iter().map(|id| id.to_string()).collect(),
                })
            },
        },
    }
}

pub fn raw_artist_json(album_ids: &[&str], bio: Option<&str>) -> Value {
    let mut artist = json!({
        "id": TEST_ARTIST_ID,
        "name": TEST_ARTIST_NAME,
        "albumGroups": { "main": album_ids },
        "links": { "images": { "href": TEST_IMAGE_REF } }
    });
    if let Some(bio) = bio {
        artist["bios"] = json!([{ "bio": bio }]);
    }
    artist
}

pub fn raw_artist(album_ids: &[&str]) -> RawArtist {
    RawArtist {
        id: TEST_ARTIST_ID.to_string(),
        name: TEST_ARTIST_NAME.to_string(),
        bios: None,
        album_groups: AlbumGroups {
            main: album_ids.iter().map(|id| id.to_string()).collect(),
        },
        links: ArtistLinks {
            images: ImageLink {
                href: TEST_IMAGE_REF.to_string(),
            },
        },
    }
}
