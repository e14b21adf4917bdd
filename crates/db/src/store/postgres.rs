//! PostgreSQL-backed store delegating to the repositories.

use async_trait::async_trait;
use mangalib_core::catalog::{
    AuthorInput, GenreInput, InstanceStatus, MangaInput, MangaInstanceInput,
};
use mangalib_core::types::DbId;
use sqlx::PgPool;

use super::{CatalogStore, StoreResult};
use crate::models::author::Author;
use crate::models::genre::Genre;
use crate::models::manga::{Manga, MangaDetail, MangaSummary};
use crate::models::manga_instance::{MangaInstance, MangaInstanceWithManga};
use crate::repositories::{AuthorRepo, GenreRepo, MangaInstanceRepo, MangaRepo};

#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        AuthorRepo::list(&self.pool).await
    }

    async fn find_author(&self, id: DbId) -> StoreResult<Option<Author>> {
        AuthorRepo::find_by_id(&self.pool, id).await
    }

    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author> {
        AuthorRepo::create(&self.pool, input).await
    }

    async fn update_author(&self, id: DbId, input: &AuthorInput) -> StoreResult<Option<Author>> {
        AuthorRepo::update(&self.pool, id, input).await
    }

    async fn delete_author(&self, id: DbId) -> StoreResult<bool> {
        AuthorRepo::delete(&self.pool, id).await
    }

    async fn count_authors(&self) -> StoreResult<i64> {
        AuthorRepo::count(&self.pool).await
    }

    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        GenreRepo::list(&self.pool).await
    }

    async fn find_genre(&self, id: DbId) -> StoreResult<Option<Genre>> {
        GenreRepo::find_by_id(&self.pool, id).await
    }

    async fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>> {
        GenreRepo::find_by_name(&self.pool, name).await
    }

    async fn create_genre(&self, input: &GenreInput) -> StoreResult<Genre> {
        GenreRepo::create(&self.pool, input).await
    }

    async fn update_genre(&self, id: DbId, input: &GenreInput) -> StoreResult<Option<Genre>> {
        GenreRepo::update(&self.pool, id, input).await
    }

    async fn delete_genre(&self, id: DbId) -> StoreResult<bool> {
        GenreRepo::delete(&self.pool, id).await
    }

    async fn count_genres(&self) -> StoreResult<i64> {
        GenreRepo::count(&self.pool).await
    }

    async fn list_mangas(&self) -> StoreResult<Vec<Manga>> {
        MangaRepo::list(&self.pool).await
    }

    async fn list_manga_summaries(&self) -> StoreResult<Vec<MangaSummary>> {
        MangaRepo::list_summaries(&self.pool).await
    }

    async fn list_mangas_by_author(&self, author_id: DbId) -> StoreResult<Vec<Manga>> {
        MangaRepo::list_by_author(&self.pool, author_id).await
    }

    async fn list_mangas_by_genre(&self, genre_id: DbId) -> StoreResult<Vec<Manga>> {
        MangaRepo::list_by_genre(&self.pool, genre_id).await
    }

    async fn find_manga(&self, id: DbId) -> StoreResult<Option<Manga>> {
        MangaRepo::find_by_id(&self.pool, id).await
    }

    async fn find_manga_detail(&self, id: DbId) -> StoreResult<Option<MangaDetail>> {
        let Some(manga) = MangaRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        let (author, genres) = tokio::try_join!(
            AuthorRepo::find_by_id(&self.pool, manga.author_id),
            GenreRepo::list_by_manga(&self.pool, manga.id),
        )?;
        Ok(Some(MangaDetail {
            manga,
            author,
            genres,
        }))
    }

    async fn create_manga(&self, input: &MangaInput) -> StoreResult<Manga> {
        MangaRepo::create(&self.pool, input).await
    }

    async fn update_manga(&self, id: DbId, input: &MangaInput) -> StoreResult<Option<Manga>> {
        MangaRepo::update(&self.pool, id, input).await
    }

    async fn delete_manga(&self, id: DbId) -> StoreResult<bool> {
        MangaRepo::delete(&self.pool, id).await
    }

    async fn count_mangas(&self) -> StoreResult<i64> {
        MangaRepo::count(&self.pool).await
    }

    async fn list_instances(&self) -> StoreResult<Vec<MangaInstanceWithManga>> {
        MangaInstanceRepo::list(&self.pool).await
    }

    async fn list_instances_by_manga(&self, manga_id: DbId) -> StoreResult<Vec<MangaInstance>> {
        MangaInstanceRepo::list_by_manga(&self.pool, manga_id).await
    }

    async fn find_instance(&self, id: DbId) -> StoreResult<Option<MangaInstanceWithManga>> {
        MangaInstanceRepo::find_by_id(&self.pool, id).await
    }

    async fn create_instance(&self, input: &MangaInstanceInput) -> StoreResult<MangaInstance> {
        MangaInstanceRepo::create(&self.pool, input).await
    }

    async fn update_instance(
        &self,
        id: DbId,
        input: &MangaInstanceInput,
    ) -> StoreResult<Option<MangaInstance>> {
        MangaInstanceRepo::update(&self.pool, id, input).await
    }

    async fn delete_instance(&self, id: DbId) -> StoreResult<bool> {
        MangaInstanceRepo::delete(&self.pool, id).await
    }

    async fn count_instances(&self) -> StoreResult<i64> {
        MangaInstanceRepo::count(&self.pool).await
    }

    async fn count_instances_by_status(&self, status: InstanceStatus) -> StoreResult<i64> {
        MangaInstanceRepo::count_by_status(&self.pool, status).await
    }
}
