//! Handlers for the manga instance resource.

use axum::extract::{Path, State};
use mangalib_core::catalog::{list_url, resource_url, ResourceKind};
use mangalib_core::forms::manga_instance::MANGA_INVALID;
use mangalib_core::forms::{validate_manga_instance, MangaInstanceDraft};
use mangalib_core::types::DbId;
use mangalib_core::validation::FieldViolation;

use super::{form_data, not_found, FormPairs};
use crate::error::AppResult;
use crate::response::Page;
use crate::state::AppState;
use crate::views;

const KIND: ResourceKind = ResourceKind::MangaInstance;

/// GET /catalog/mangainstances
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let instances = state.store.list_instances().await?;
    Ok(views::manga_instance::list(&instances).into())
}

/// GET /catalog/mangainstance/{id}
pub async fn detail(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let instance = state
        .store
        .find_instance(id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(views::manga_instance::detail(&instance).into())
}

async fn render_form(
    state: &AppState,
    title: &str,
    draft: &MangaInstanceDraft,
    violations: &[FieldViolation],
) -> AppResult<Page> {
    let mangas = state.store.list_mangas().await?;
    Ok(views::manga_instance::form(title, draft, &mangas, violations).into())
}

/// Violation for a manga that is not in the store.
async fn unknown_manga(state: &AppState, manga_id: DbId) -> AppResult<Option<FieldViolation>> {
    let manga = state.store.find_manga(manga_id).await?;
    Ok(manga
        .is_none()
        .then(|| FieldViolation::new("manga", MANGA_INVALID)))
}

/// GET /catalog/mangainstance/create
pub async fn create_get(State(state): State<AppState>) -> AppResult<Page> {
    render_form(&state, "Create MangaInstance", &MangaInstanceDraft::default(), &[]).await
}

/// POST /catalog/mangainstance/create
pub async fn create_post(State(state): State<AppState>, form: FormPairs) -> AppResult<Page> {
    let input = match validate_manga_instance(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(violations = ?rejected.messages(), "Manga instance submission rejected");
            return render_form(
                &state,
                "Create MangaInstance",
                &rejected.draft,
                &rejected.violations,
            )
            .await;
        }
    };

    if let Some(violation) = unknown_manga(&state, input.manga_id).await? {
        tracing::debug!(manga_id = input.manga_id, "Manga instance references unknown manga");
        let draft = MangaInstanceDraft::from(&input);
        return render_form(&state, "Create MangaInstance", &draft, &[violation]).await;
    }

    let instance = state.store.create_instance(&input).await?;
    tracing::info!(
        instance_id = instance.id,
        manga_id = instance.manga_id,
        "Manga instance created"
    );
    Ok(Page::redirect(resource_url(KIND, instance.id)))
}

/// GET /catalog/mangainstance/{id}/update
pub async fn update_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    let (instance, mangas) =
        tokio::try_join!(state.store.find_instance(id), state.store.list_mangas())?;
    let instance = instance.ok_or_else(|| not_found(KIND, id))?;
    let draft = MangaInstanceDraft::from(&instance.instance);
    Ok(views::manga_instance::form("Update MangaInstance", &draft, &mangas, &[]).into())
}

/// POST /catalog/mangainstance/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: FormPairs,
) -> AppResult<Page> {
    let input = match validate_manga_instance(&form_data(form)) {
        Ok(input) => input,
        Err(rejected) => {
            tracing::debug!(instance_id = id, violations = ?rejected.messages(), "Manga instance update rejected");
            return render_form(
                &state,
                "Update MangaInstance",
                &rejected.draft,
                &rejected.violations,
            )
            .await;
        }
    };

    if let Some(violation) = unknown_manga(&state, input.manga_id).await? {
        tracing::debug!(instance_id = id, manga_id = input.manga_id, "Manga instance references unknown manga");
        let draft = MangaInstanceDraft::from(&input);
        return render_form(&state, "Update MangaInstance", &draft, &[violation]).await;
    }

    let instance = state
        .store
        .update_instance(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    tracing::info!(instance_id = instance.id, "Manga instance updated");
    Ok(Page::redirect(resource_url(KIND, instance.id)))
}

/// GET /catalog/mangainstance/{id}/delete
pub async fn delete_get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    match state.store.find_instance(id).await? {
        Some(instance) => Ok(views::manga_instance::delete(&instance).into()),
        None => Ok(Page::redirect(list_url(KIND))),
    }
}

/// POST /catalog/mangainstance/{id}/delete
///
/// Instances have no dependents, so the delete always goes through.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Page> {
    if state.store.delete_instance(id).await? {
        tracing::info!(instance_id = id, "Manga instance deleted");
    }
    Ok(Page::redirect(list_url(KIND)))
}
