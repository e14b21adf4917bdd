//! Manga row models.

use mangalib_core::forms::MangaDraft;
use mangalib_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::author::Author;
use crate::models::genre::Genre;

/// A row from the `mangas` table with its genre ids gathered from
/// `manga_genres`, ascending.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Manga {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<DbId>,
}

/// List projection: title plus the author's display name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MangaSummary {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    /// `None` when the referenced author no longer resolves.
    pub author_name: Option<String>,
}

/// A manga with its references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangaDetail {
    pub manga: Manga,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
}

impl From<&Manga> for MangaDraft {
    fn from(manga: &Manga) -> Self {
        Self {
            title: manga.title.clone(),
            author_id: Some(manga.author_id),
            summary: manga.summary.clone(),
            isbn: manga.isbn.clone(),
            genre_ids: manga.genre_ids.clone(),
        }
    }
}
