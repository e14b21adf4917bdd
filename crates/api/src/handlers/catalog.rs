//! Handlers for the catalog home.

use axum::extract::State;
use mangalib_core::catalog::{InstanceStatus, CATALOG_ROOT};
use mangalib_db::models::catalog::CatalogCounts;

use crate::error::AppResult;
use crate::response::Page;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn root() -> Page {
    Page::redirect(CATALOG_ROOT)
}

/// GET /catalog
///
/// The five counts are fetched concurrently; the first failure aborts the
/// page.
pub async fn index(State(state): State<AppState>) -> AppResult<Page> {
    let store = &state.store;
    let (manga, manga_instance, manga_instance_available, author, genre) = tokio::try_join!(
        store.count_mangas(),
        store.count_instances(),
        store.count_instances_by_status(InstanceStatus::AVAILABLE),
        store.count_authors(),
        store.count_genres(),
    )?;

    let counts = CatalogCounts {
        manga,
        manga_instance,
        manga_instance_available,
        author,
        genre,
    };
    tracing::debug!(?counts, "Catalog counts computed");
    Ok(views::catalog::index(&counts).into())
}
