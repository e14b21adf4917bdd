//! The record store capability handed to request handlers.
//!
//! Handlers only see [`CatalogStore`]; the binary picks
//! [`PgCatalogStore`] when a database is configured and
//! [`MemoryCatalogStore`] otherwise. Integration tests drive the HTTP layer
//! against the in-memory store.

mod memory;
mod postgres;

use async_trait::async_trait;
use mangalib_core::catalog::{
    AuthorInput, GenreInput, InstanceStatus, MangaInput, MangaInstanceInput,
};
use mangalib_core::types::DbId;

use crate::models::author::Author;
use crate::models::genre::Genre;
use crate::models::manga::{Manga, MangaDetail, MangaSummary};
use crate::models::manga_instance::{MangaInstance, MangaInstanceWithManga};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Store operations return raw `sqlx` errors; the HTTP layer classifies them.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence for the four catalog record types.
///
/// List operations return records in display order: mangas by title, authors
/// by family then first name, genres by name, instances by manga title then
/// id. `update_*` replaces the whole record and returns `None` when the id
/// does not resolve; `delete_*` returns whether a row was removed.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // --- Authors ---
    async fn list_authors(&self) -> StoreResult<Vec<Author>>;
    async fn find_author(&self, id: DbId) -> StoreResult<Option<Author>>;
    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author>;
    async fn update_author(&self, id: DbId, input: &AuthorInput) -> StoreResult<Option<Author>>;
    async fn delete_author(&self, id: DbId) -> StoreResult<bool>;
    async fn count_authors(&self) -> StoreResult<i64>;

    // --- Genres ---
    async fn list_genres(&self) -> StoreResult<Vec<Genre>>;
    async fn find_genre(&self, id: DbId) -> StoreResult<Option<Genre>>;
    /// Case-insensitive match on the genre name.
    async fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>>;
    async fn create_genre(&self, input: &GenreInput) -> StoreResult<Genre>;
    async fn update_genre(&self, id: DbId, input: &GenreInput) -> StoreResult<Option<Genre>>;
    async fn delete_genre(&self, id: DbId) -> StoreResult<bool>;
    async fn count_genres(&self) -> StoreResult<i64>;

    // --- Mangas ---
    async fn list_mangas(&self) -> StoreResult<Vec<Manga>>;
    async fn list_manga_summaries(&self) -> StoreResult<Vec<MangaSummary>>;
    async fn list_mangas_by_author(&self, author_id: DbId) -> StoreResult<Vec<Manga>>;
    async fn list_mangas_by_genre(&self, genre_id: DbId) -> StoreResult<Vec<Manga>>;
    async fn find_manga(&self, id: DbId) -> StoreResult<Option<Manga>>;
    /// A manga with its author and genres resolved.
    async fn find_manga_detail(&self, id: DbId) -> StoreResult<Option<MangaDetail>>;
    async fn create_manga(&self, input: &MangaInput) -> StoreResult<Manga>;
    async fn update_manga(&self, id: DbId, input: &MangaInput) -> StoreResult<Option<Manga>>;
    async fn delete_manga(&self, id: DbId) -> StoreResult<bool>;
    async fn count_mangas(&self) -> StoreResult<i64>;

    // --- Manga instances ---
    async fn list_instances(&self) -> StoreResult<Vec<MangaInstanceWithManga>>;
    async fn list_instances_by_manga(&self, manga_id: DbId) -> StoreResult<Vec<MangaInstance>>;
    async fn find_instance(&self, id: DbId) -> StoreResult<Option<MangaInstanceWithManga>>;
    async fn create_instance(&self, input: &MangaInstanceInput) -> StoreResult<MangaInstance>;
    async fn update_instance(
        &self,
        id: DbId,
        input: &MangaInstanceInput,
    ) -> StoreResult<Option<MangaInstance>>;
    async fn delete_instance(&self, id: DbId) -> StoreResult<bool>;
    async fn count_instances(&self) -> StoreResult<i64>;
    async fn count_instances_by_status(&self, status: InstanceStatus) -> StoreResult<i64>;
}
