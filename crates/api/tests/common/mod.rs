#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mangalib_core::catalog::{
    AuthorInput, GenreInput, InstanceStatus, MangaInput, MangaInstanceInput,
};
use mangalib_core::types::DbId;
use mangalib_db::models::author::Author;
use mangalib_db::models::genre::Genre;
use mangalib_db::models::manga::Manga;
use mangalib_db::models::manga_instance::MangaInstance;
use mangalib_db::store::{CatalogStore, MemoryCatalogStore};
use tower::ServiceExt;

use mangalib_api::config::ServerConfig;
use mangalib_api::router::build_app_router;
use mangalib_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

/// A fresh in-memory store plus an app wired to it.
pub fn memory_app() -> (Arc<MemoryCatalogStore>, Router) {
    let store = Arc::new(MemoryCatalogStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

fn url_encode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("response has a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_author(store: &MemoryCatalogStore, first: &str, family: &str) -> Author {
    store
        .create_author(&AuthorInput {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: None,
            date_of_death: None,
        })
        .await
        .unwrap()
}

pub async fn seed_genre(store: &MemoryCatalogStore, name: &str) -> Genre {
    store
        .create_genre(&GenreInput {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

pub async fn seed_manga(
    store: &MemoryCatalogStore,
    title: &str,
    author_id: DbId,
    genre_ids: Vec<DbId>,
) -> Manga {
    store
        .create_manga(&MangaInput {
            title: title.to_string(),
            author_id,
            summary: format!("About {title}."),
            isbn: "9780000000000".to_string(),
            genre_ids,
        })
        .await
        .unwrap()
}

pub async fn seed_instance(
    store: &MemoryCatalogStore,
    manga_id: DbId,
    status: InstanceStatus,
) -> MangaInstance {
    store
        .create_instance(&MangaInstanceInput {
            manga_id,
            imprint: "Shogakukan, 1994".to_string(),
            status,
            due_back: None,
        })
        .await
        .unwrap()
}
