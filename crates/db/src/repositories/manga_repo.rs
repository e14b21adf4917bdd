//! Repository for the `mangas` table and its `manga_genres` join table.

use mangalib_core::catalog::MangaInput;
use mangalib_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::manga::{Manga, MangaSummary};

/// Manga columns plus the aggregated genre ids, selected from `mangas m`.
const SELECT_MANGA: &str = "SELECT m.id, m.title, m.author_id, m.summary, m.isbn,
        ARRAY(SELECT mg.genre_id FROM manga_genres mg
              WHERE mg.manga_id = m.id ORDER BY mg.genre_id) AS genre_ids
     FROM mangas m";

/// Provides CRUD operations for mangas.
///
/// Writes replace the genre set inside the same transaction as the row.
pub struct MangaRepo;

impl MangaRepo {
    pub async fn create(pool: &PgPool, input: &MangaInput) -> Result<Manga, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO mangas (title, author_id, summary, isbn)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.author_id)
        .bind(&input.summary)
        .bind(&input.isbn)
        .fetch_one(&mut *tx)
        .await?;
        Self::insert_genres(&mut tx, id, &input.genre_ids).await?;
        tx.commit().await?;
        tracing::debug!(manga_id = id, genres = input.genre_ids.len(), "Manga row and genre links inserted");

        Ok(Self::row_from_input(id, input))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Manga>, sqlx::Error> {
        let query = format!("{SELECT_MANGA} WHERE m.id = $1");
        sqlx::query_as::<_, Manga>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all mangas ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!("{SELECT_MANGA} ORDER BY m.title, m.id");
        sqlx::query_as::<_, Manga>(&query).fetch_all(pool).await
    }

    /// List projection with author names, ordered by title.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<MangaSummary>, sqlx::Error> {
        sqlx::query_as::<_, MangaSummary>(
            "SELECT m.id, m.title, m.author_id,
                    a.family_name || ', ' || a.first_name AS author_name
             FROM mangas m
             LEFT JOIN authors a ON a.id = m.author_id
             ORDER BY m.title, m.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Mangas written by an author, ordered by title.
    pub async fn list_by_author(pool: &PgPool, author_id: DbId) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!("{SELECT_MANGA} WHERE m.author_id = $1 ORDER BY m.title, m.id");
        sqlx::query_as::<_, Manga>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Mangas tagged with a genre, ordered by title.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!(
            "{SELECT_MANGA}
             WHERE EXISTS (SELECT 1 FROM manga_genres g
                           WHERE g.manga_id = m.id AND g.genre_id = $1)
             ORDER BY m.title, m.id"
        );
        sqlx::query_as::<_, Manga>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a manga and its genre set at an existing id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MangaInput,
    ) -> Result<Option<Manga>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE mangas SET
                title = $2,
                author_id = $3,
                summary = $4,
                isbn = $5
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.author_id)
        .bind(&input.summary)
        .bind(&input.isbn)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            tracing::debug!(manga_id = id, "Manga update matched no row, rolling back");
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query("DELETE FROM manga_genres WHERE manga_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        Self::insert_genres(&mut tx, id, &input.genre_ids).await?;
        tx.commit().await?;

        Ok(Some(Self::row_from_input(id, input)))
    }

    /// Delete a manga by ID. Genre links cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mangas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mangas")
            .fetch_one(pool)
            .await
    }

    async fn insert_genres(
        tx: &mut Transaction<'_, Postgres>,
        manga_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if genre_ids.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO manga_genres (manga_id, genre_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(manga_id)
        .bind(genre_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    fn row_from_input(id: DbId, input: &MangaInput) -> Manga {
        let mut genre_ids = input.genre_ids.clone();
        genre_ids.sort_unstable();
        genre_ids.dedup();
        Manga {
            id,
            title: input.title.clone(),
            author_id: input.author_id,
            summary: input.summary.clone(),
            isbn: input.isbn.clone(),
            genre_ids,
        }
    }
}
