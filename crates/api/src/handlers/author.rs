//! Handlers for the author resource.

use axum::extract::{Path, State};
use mangalib_core::catalog::{list_url, resource_url, ResourceKind};
use mangalib_core::forms::{validate_author, AuthorDraft};
use mangalib_core::types::DbId;

use super::{form_data, not_found, FormPairs};
use crate::error::AppResult;
use crate::response::Page;
use crate::state::AppState;
use crate::views;

const KIND: ResourceKind = ResourceKind::Author;

/// GET /catalog/authors
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let authors = state.store.list_authors().await?;
    Ok(views::author::list(&authors).into())
}

/// GET /catalog/author/{id}
pub async fn detail(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (author, mangas) = tokio::try_join!(
        state.store.find_author(id),
        state.store.list_mangas_by_author(id),
    )?;
    let author = author.ok_or_else(|| not_found(KIND, id))?;
    Ok(views::author::detail(&author, &mangas).into())
}

/// GET /catalog/author/create
pub async fn create_get() -> Page {
    views::author::form("Create Author", &AuthorDraft::default(), &[]).into()
}

/// POST /catalog/author/create
pub async fn create_post(State(state): State<AppState>, form: FormPairs) -> AppResult<Page> {
    match validate_author(&form_data(form)) {
        Ok(input) => {
            let author = state.store.create_author(&input).await?;
            tracing::info!(author_id = author.id, "Author created");
            Ok(Page::redirect(resource_url(KIND, author.id)))
        }
        Err(rejected) => {
            tracing::debug!(violations = ?rejected.messages(), "Author submission rejected");
            Ok(views::author::form("Create Author", &rejected.draft, &rejected.violations).into())
        }
    }
}

/// GET /catalog/author/{id}/update
pub async fn update_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let author = state
        .store
        .find_author(id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(views::author::form("Update Author", &AuthorDraft::from(&author), &[]).into())
}

/// POST /catalog/author/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: FormPairs,
) -> AppResult<Page> {
    match validate_author(&form_data(form)) {
        Ok(input) => {
            let author = state
                .store
                .update_author(id, &input)
                .await?
                .ok_or_else(|| not_found(KIND, id))?;
            tracing::info!(author_id = author.id, "Author updated");
            Ok(Page::redirect(resource_url(KIND, author.id)))
        }
        Err(rejected) => {
            tracing::debug!(author_id = id, violations = ?rejected.messages(), "Author update rejected");
            Ok(views::author::form("Update Author", &rejected.draft, &rejected.violations).into())
        }
    }
}

/// GET /catalog/author/{id}/delete
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (author, mangas) = tokio::try_join!(
        state.store.find_author(id),
        state.store.list_mangas_by_author(id),
    )?;
    match author {
        Some(author) => Ok(views::author::delete(&author, &mangas).into()),
        None => Ok(Page::redirect(list_url(KIND))),
    }
}

/// POST /catalog/author/{id}/delete
///
/// Refused while mangas still reference the author.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (author, mangas) = tokio::try_join!(
        state.store.find_author(id),
        state.store.list_mangas_by_author(id),
    )?;
    let Some(author) = author else {
        return Ok(Page::redirect(list_url(KIND)));
    };
    if !mangas.is_empty() {
        tracing::info!(author_id = id, mangas = mangas.len(), "Author delete refused");
        return Ok(views::author::delete(&author, &mangas).into());
    }

    state.store.delete_author(id).await?;
    tracing::info!(author_id = id, "Author deleted");
    Ok(Page::redirect(list_url(KIND)))
}
