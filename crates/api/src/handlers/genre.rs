//! Handlers for the genre resource.

use axum::extract::{Path, State};
use mangalib_core::catalog::{list_url, resource_url, ResourceKind};
use mangalib_core::forms::genre::NAME_TAKEN;
use mangalib_core::forms::{validate_genre, GenreDraft};
use mangalib_core::types::DbId;
use mangalib_core::validation::FieldViolation;

use super::{form_data, not_found, FormPairs};
use crate::error::AppResult;
use crate::response::Page;
use crate::state::AppState;
use crate::views;

const KIND: ResourceKind = ResourceKind::Genre;

/// GET /catalog/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let genres = state.store.list_genres().await?;
    Ok(views::genre::list(&genres).into())
}

/// GET /catalog/genre/{id}
pub async fn detail(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (genre, mangas) = tokio::try_join!(
        state.store.find_genre(id),
        state.store.list_mangas_by_genre(id),
    )?;
    let genre = genre.ok_or_else(|| not_found(KIND, id))?;
    Ok(views::genre::detail(&genre, &mangas).into())
}

/// GET /catalog/genre/create
pub async fn create_get() -> Page {
    views::genre::form("Create Genre", &GenreDraft::default(), &[]).into()
}

/// POST /catalog/genre/create
///
/// A name that already exists (ignoring case) redirects to the existing
/// genre instead of creating a second one.
pub async fn create_post(State(state): State<AppState>, form: FormPairs) -> AppResult<Page> {
    let input = match validate_genre(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(violations = ?rejected.messages(), "Genre submission rejected");
            return Ok(views::genre::form("Create Genre", &rejected.draft, &rejected.violations).into());
        }
    };

    if let Some(existing) = state.store.find_genre_by_name(&input.name).await? {
        tracing::debug!(genre_id = existing.id, "Genre already exists");
        return Ok(Page::redirect(resource_url(KIND, existing.id)));
    }

    let genre = state.store.create_genre(&input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok(Page::redirect(resource_url(KIND, genre.id)))
}

/// GET /catalog/genre/{id}/update
pub async fn update_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let genre = state
        .store
        .find_genre(id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(views::genre::form("Update Genre", &GenreDraft::from(&genre), &[]).into())
}

/// POST /catalog/genre/{id}/update
///
/// Renaming onto a name another genre already uses (ignoring case)
/// re-renders the form.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: FormPairs,
) -> AppResult<Page> {
    let input = match validate_genre(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(genre_id = id, violations = ?rejected.messages(), "Genre update rejected");
            return Ok(views::genre::form("Update Genre", &rejected.draft, &rejected.violations).into());
        }
    };

    if let Some(existing) = state.store.find_genre_by_name(&input.name).await? {
        if existing.id != id {
            tracing::debug!(genre_id = id, existing_id = existing.id, "Genre name already taken");
            let draft = GenreDraft { name: input.name };
            let violations = [FieldViolation::new("name", NAME_TAKEN)];
            return Ok(views::genre::form("Update Genre", &draft, &violations).into());
        }
    }

    let genre = state
        .store
        .update_genre(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    tracing::info!(genre_id = genre.id, "Genre updated");
    Ok(Page::redirect(resource_url(KIND, genre.id)))
}

/// GET /catalog/genre/{id}/delete
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (genre, mangas) = tokio::try_join!(
        state.store.find_genre(id),
        state.store.list_mangas_by_genre(id),
    )?;
    match genre {
        Some(genre) => Ok(views::genre::delete(&genre, &mangas).into()),
        None => Ok(Page::redirect(list_url(KIND))),
    }
}

/// POST /catalog/genre/{id}/delete
///
/// Refused while mangas are still filed under the genre.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (genre, mangas) = tokio::try_join!(
        state.store.find_genre(id),
        state.store.list_mangas_by_genre(id),
    )?;
    let Some(genre) = genre else {
        return Ok(Page::redirect(list_url(KIND)));
    };
    if !mangas.is_empty() {
        tracing::info!(genre_id = id, mangas = mangas.len(), "Genre delete refused");
        return Ok(views::genre::delete(&genre, &mangas).into());
    }

    state.store.delete_genre(id).await?;
    tracing::info!(genre_id = id, "Genre deleted");
    Ok(Page::redirect(list_url(KIND)))
}
