//! Repository for the `manga_instances` table.

use mangalib_core::catalog::{InstanceStatus, MangaInstanceInput};
use mangalib_core::types::DbId;
use sqlx::PgPool;

use crate::models::manga_instance::{MangaInstance, MangaInstanceWithManga};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, manga_id, imprint, status, due_back";

/// Instance columns joined with the manga title, selected from
/// `manga_instances i`.
const SELECT_WITH_MANGA: &str = "SELECT i.id, i.manga_id, i.imprint, i.status, i.due_back,
        m.title AS manga_title
     FROM manga_instances i
     LEFT JOIN mangas m ON m.id = i.manga_id";

/// Provides CRUD operations for manga instances.
pub struct MangaInstanceRepo;

impl MangaInstanceRepo {
    /// Insert a new instance. A missing `due_back` defaults to today.
    pub async fn create(
        pool: &PgPool,
        input: &MangaInstanceInput,
    ) -> Result<MangaInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO manga_instances (manga_id, imprint, status, due_back)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MangaInstance>(&query)
            .bind(input.manga_id)
            .bind(&input.imprint)
            .bind(input.status.as_str())
            .bind(input.due_back)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MangaInstanceWithManga>, sqlx::Error> {
        let query = format!("{SELECT_WITH_MANGA} WHERE i.id = $1");
        sqlx::query_as::<_, MangaInstanceWithManga>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all instances ordered by manga title, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<MangaInstanceWithManga>, sqlx::Error> {
        let query = format!("{SELECT_WITH_MANGA} ORDER BY m.title, i.id");
        sqlx::query_as::<_, MangaInstanceWithManga>(&query)
            .fetch_all(pool)
            .await
    }

    /// Instances of one manga, ordered by id.
    pub async fn list_by_manga(
        pool: &PgPool,
        manga_id: DbId,
    ) -> Result<Vec<MangaInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manga_instances WHERE manga_id = $1 ORDER BY id");
        sqlx::query_as::<_, MangaInstance>(&query)
            .bind(manga_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every column of an instance. A missing `due_back` resets it
    /// to today.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MangaInstanceInput,
    ) -> Result<Option<MangaInstance>, sqlx::Error> {
        let query = format!(
            "UPDATE manga_instances SET
                manga_id = $2,
                imprint = $3,
                status = $4,
                due_back = COALESCE($5, CURRENT_DATE)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MangaInstance>(&query)
            .bind(id)
            .bind(input.manga_id)
            .bind(&input.imprint)
            .bind(input.status.as_str())
            .bind(input.due_back)
            .fetch_optional(pool)
            .await
    }

    /// Delete an instance by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manga_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM manga_instances")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_status(pool: &PgPool, status: InstanceStatus) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM manga_instances WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }
}
