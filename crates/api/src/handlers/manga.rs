//! Handlers for the manga resource.

use axum::extract::{Path, State};
use mangalib_core::catalog::{list_url, resource_url, MangaInput, ResourceKind};
use mangalib_core::forms::manga::{AUTHOR_INVALID, GENRE_INVALID};
use mangalib_core::forms::{mark_checked, validate_manga, MangaDraft};
use mangalib_core::types::DbId;
use mangalib_core::validation::FieldViolation;

use super::{form_data, not_found, FormPairs};
use crate::error::AppResult;
use crate::response::Page;
use crate::state::AppState;
use crate::views;

const KIND: ResourceKind = ResourceKind::Manga;

/// GET /catalog/mangas
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let mangas = state.store.list_manga_summaries().await?;
    Ok(views::manga::list(&mangas).into())
}

/// GET /catalog/manga/{id}
pub async fn detail(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (detail, instances) = tokio::try_join!(
        state.store.find_manga_detail(id),
        state.store.list_instances_by_manga(id),
    )?;
    let detail = detail.ok_or_else(|| not_found(KIND, id))?;
    Ok(views::manga::detail(&detail, &instances).into())
}

/// Render the form with fresh author and genre lists, pre-checking the
/// draft's genres.
async fn render_form(
    state: &AppState,
    title: &str,
    draft: &MangaDraft,
    violations: &[FieldViolation],
) -> AppResult<Page> {
    let (authors, genres) =
        tokio::try_join!(state.store.list_authors(), state.store.list_genres())?;
    let genres = mark_checked(genres, &draft.genre_ids, |g| g.id);
    Ok(views::manga::form(title, draft, &authors, &genres, violations).into())
}

/// Violations for an author or genres that are not in the store.
async fn unknown_references(state: &AppState, input: &MangaInput) -> AppResult<Vec<FieldViolation>> {
    let (author, genres) = tokio::try_join!(
        state.store.find_author(input.author_id),
        state.store.list_genres(),
    )?;
    let mut violations = Vec::new();
    if author.is_none() {
        violations.push(FieldViolation::new("author", AUTHOR_INVALID));
    }
    if !input
        .genre_ids
        .iter()
        .all(|id| genres.iter().any(|g| g.id == *id))
    {
        violations.push(FieldViolation::new("genre", GENRE_INVALID));
    }
    Ok(violations)
}

/// GET /catalog/manga/create
pub async fn create_get(State(state): State<AppState>) -> AppResult<Page> {
    render_form(&state, "Create Manga", &MangaDraft::default(), &[]).await
}

/// POST /catalog/manga/create
pub async fn create_post(State(state): State<AppState>, form: FormPairs) -> AppResult<Page> {
    let input = match validate_manga(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(violations = ?rejected.messages(), "Manga submission rejected");
            return render_form(&state, "Create Manga", &rejected.draft, &rejected.violations).await;
        }
    };

    let violations = unknown_references(&state, &input).await?;
    if !violations.is_empty() {
        tracing::debug!(author_id = input.author_id, "Manga references unknown records");
        return render_form(&state, "Create Manga", &MangaDraft::from(&input), &violations).await;
    }

    let manga = state.store.create_manga(&input).await?;
    tracing::info!(manga_id = manga.id, "Manga created");
    Ok(Page::redirect(resource_url(KIND, manga.id)))
}

/// GET /catalog/manga/{id}/update
pub async fn update_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (manga, authors, genres) = tokio::try_join!(
        state.store.find_manga(id),
        state.store.list_authors(),
        state.store.list_genres(),
    )?;
    let manga = manga.ok_or_else(|| not_found(KIND, id))?;
    let draft = MangaDraft::from(&manga);
    let genres = mark_checked(genres, &draft.genre_ids, |g| g.id);
    Ok(views::manga::form("Update Manga", &draft, &authors, &genres, &[]).into())
}

/// POST /catalog/manga/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: FormPairs,
) -> AppResult<Page> {
    let input = match validate_manga(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(manga_id = id, violations = ?rejected.messages(), "Manga update rejected");
            return render_form(&state, "Update Manga", &rejected.draft, &rejected.violations).await;
        }
    };

    let violations = unknown_references(&state, &input).await?;
    if !violations.is_empty() {
        tracing::debug!(manga_id = id, author_id = input.author_id, "Manga references unknown records");
        return render_form(&state, "Update Manga", &MangaDraft::from(&input), &violations).await;
    }

    let manga = state
        .store
        .update_manga(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    tracing::info!(manga_id = manga.id, "Manga updated");
    Ok(Page::redirect(resource_url(KIND, manga.id)))
}

/// GET /catalog/manga/{id}/delete
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (manga, instances) = tokio::try_join!(
        state.store.find_manga(id),
        state.store.list_instances_by_manga(id),
    )?;
    match manga {
        Some(manga) => Ok(views::manga::delete(&manga, &instances).into()),
        None => Ok(Page::redirect(list_url(KIND))),
    }
}

/// POST /catalog/manga/{id}/delete
///
/// Refused while copies of the manga exist: the confirmation page is shown
/// again listing them.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (manga, instances) = tokio::try_join!(
        state.store.find_manga(id),
        state.store.list_instances_by_manga(id),
    )?;
    let Some(manga) = manga else {
        return Ok(Page::redirect(list_url(KIND)));
    };
    if !instances.is_empty() {
        tracing::info!(manga_id = id, instances = instances.len(), "Manga delete refused");
        return Ok(views::manga::delete(&manga, &instances).into());
    }

    state.store.delete_manga(id).await?;
    tracing::info!(manga_id = id, "Manga deleted");
    Ok(Page::redirect(list_url(KIND)))
}
