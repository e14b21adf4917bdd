//! Repository for the `authors` table.

use mangalib_core::catalog::AuthorInput;
use mangalib_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::Author;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, family_name, date_of_birth, date_of_death";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &AuthorInput) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (first_name, family_name, date_of_birth, date_of_death)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.first_name)
            .bind(&input.family_name)
            .bind(input.date_of_birth)
            .bind(input.date_of_death)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all authors ordered by family name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY family_name, first_name, id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Replace every column of an author.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AuthorInput,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                first_name = $2,
                family_name = $3,
                date_of_birth = $4,
                date_of_death = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.family_name)
            .bind(input.date_of_birth)
            .bind(input.date_of_death)
            .fetch_optional(pool)
            .await
    }

    /// Delete an author by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors")
            .fetch_one(pool)
            .await
    }
}
