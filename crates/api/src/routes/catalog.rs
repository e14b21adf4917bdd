//! Route definitions for the `/catalog` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{author, catalog, genre, manga, manga_instance};
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// Every entity follows the same eight-route pattern:
///
/// ```text
/// GET  /                               -> catalog::index
///
/// GET  /manga/create                   -> manga::create_get
/// POST /manga/create                   -> manga::create_post
/// GET  /manga/{id}/delete              -> manga::delete_get
/// POST /manga/{id}/delete              -> manga::delete_post
/// GET  /manga/{id}/update              -> manga::update_get
/// POST /manga/{id}/update              -> manga::update_post
/// GET  /manga/{id}                     -> manga::detail
/// GET  /mangas                         -> manga::list
///
/// ... same for /author, /genre, /mangainstance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        // --- Manga ---
        .route(
            "/manga/create",
            get(manga::create_get).post(manga::create_post),
        )
        .route(
            "/manga/{id}/delete",
            get(manga::delete_get).post(manga::delete_post),
        )
        .route(
            "/manga/{id}/update",
            get(manga::update_get).post(manga::update_post),
        )
        .route("/manga/{id}", get(manga::detail))
        .route("/mangas", get(manga::list))
        // --- Author ---
        .route(
            "/author/create",
            get(author::create_get).post(author::create_post),
        )
        .route(
            "/author/{id}/delete",
            get(author::delete_get).post(author::delete_post),
        )
        .route(
            "/author/{id}/update",
            get(author::update_get).post(author::update_post),
        )
        .route("/author/{id}", get(author::detail))
        .route("/authors", get(author::list))
        // --- Genre ---
        .route(
            "/genre/create",
            get(genre::create_get).post(genre::create_post),
        )
        .route(
            "/genre/{id}/delete",
            get(genre::delete_get).post(genre::delete_post),
        )
        .route(
            "/genre/{id}/update",
            get(genre::update_get).post(genre::update_post),
        )
        .route("/genre/{id}", get(genre::detail))
        .route("/genres", get(genre::list))
        // --- Manga instance ---
        .route(
            "/mangainstance/create",
            get(manga_instance::create_get).post(manga_instance::create_post),
        )
        .route(
            "/mangainstance/{id}/delete",
            get(manga_instance::delete_get).post(manga_instance::delete_post),
        )
        .route(
            "/mangainstance/{id}/update",
            get(manga_instance::update_get).post(manga_instance::update_post),
        )
        .route("/mangainstance/{id}", get(manga_instance::detail))
        .route("/mangainstances", get(manga_instance::list))
}
