//! In-process store holding every table behind one `RwLock`.
//!
//! Mirrors the PostgreSQL store's ordering and defaults but enforces no
//! foreign keys: references are plain identifiers here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use mangalib_core::catalog::{
    AuthorInput, GenreInput, InstanceStatus, MangaInput, MangaInstanceInput,
};
use mangalib_core::types::DbId;
use tokio::sync::RwLock;

use super::{CatalogStore, StoreResult};
use crate::models::author::Author;
use crate::models::genre::Genre;
use crate::models::manga::{Manga, MangaDetail, MangaSummary};
use crate::models::manga_instance::{MangaInstance, MangaInstanceWithManga};

/// One table: rows keyed by id plus its id sequence.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Overwrite an existing row; `None` if the id is unknown.
    fn replace(&mut self, id: DbId, row: T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn count(&self) -> i64 {
        self.rows.len() as i64
    }
}

#[derive(Debug, Default)]
struct Tables {
    authors: Table<Author>,
    genres: Table<Genre>,
    mangas: Table<Manga>,
    instances: Table<MangaInstance>,
}

impl Tables {
    fn with_manga(&self, instance: MangaInstance) -> MangaInstanceWithManga {
        let manga_title = self
            .mangas
            .rows
            .get(&instance.manga_id)
            .map(|m| m.title.clone());
        MangaInstanceWithManga {
            instance,
            manga_title,
        }
    }

    fn mangas_where(&self, pred: impl Fn(&Manga) -> bool) -> Vec<Manga> {
        let mut mangas: Vec<Manga> = self.mangas.rows.values().filter(|m| pred(*m)).cloned().collect();
        sort_mangas(&mut mangas);
        mangas
    }
}

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_mangas(mangas: &mut [Manga]) {
    mangas.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
}

fn author_row(id: DbId, input: &AuthorInput) -> Author {
    Author {
        id,
        first_name: input.first_name.clone(),
        family_name: input.family_name.clone(),
        date_of_birth: input.date_of_birth,
        date_of_death: input.date_of_death,
    }
}

fn manga_row(id: DbId, input: &MangaInput) -> Manga {
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

fn instance_row(id: DbId, input: &MangaInstanceInput) -> MangaInstance {
    MangaInstance {
        id,
        manga_id: input.manga_id,
        imprint: input.imprint.clone(),
        status: input.status,
        due_back: input
            .due_back
            .unwrap_or_else(|| Utc::now().date_naive()),
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        let tables = self.tables.read().await;
        let mut authors: Vec<Author> = tables.authors.rows.values().cloned().collect();
        authors.sort_by(|a, b| {
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then(a.id.cmp(&b.id))
        });
        Ok(authors)
    }

    async fn find_author(&self, id: DbId) -> StoreResult<Option<Author>> {
        Ok(self.tables.read().await.authors.get(id))
    }

    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author> {
        let mut tables = self.tables.write().await;
        let id = tables.authors.next_id();
        let author = author_row(id, input);
        tables.authors.rows.insert(id, author.clone());
        Ok(author)
    }

    async fn update_author(&self, id: DbId, input: &AuthorInput) -> StoreResult<Option<Author>> {
        let mut tables = self.tables.write().await;
        Ok(tables.authors.replace(id, author_row(id, input)))
    }

    async fn delete_author(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.authors.remove(id))
    }

    async fn count_authors(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.authors.count())
    }

    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        let tables = self.tables.read().await;
        let mut genres: Vec<Genre> = tables.genres.rows.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(genres)
    }

    async fn find_genre(&self, id: DbId) -> StoreResult<Option<Genre>> {
        Ok(self.tables.read().await.genres.get(id))
    }

    async fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>> {
        let needle = name.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .genres
            .rows
            .values()
            .find(|g| g.name.to_lowercase() == needle)
            .cloned())
    }

    async fn create_genre(&self, input: &GenreInput) -> StoreResult<Genre> {
        let mut tables = self.tables.write().await;
        let id = tables.genres.next_id();
        let genre = Genre {
            id,
            name: input.name.clone(),
        };
        tables.genres.rows.insert(id, genre.clone());
        Ok(genre)
    }

    async fn update_genre(&self, id: DbId, input: &GenreInput) -> StoreResult<Option<Genre>> {
        let mut tables = self.tables.write().await;
        let genre = Genre {
            id,
            name: input.name.clone(),
        };
        Ok(tables.genres.replace(id, genre))
    }

    async fn delete_genre(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.genres.remove(id))
    }

    async fn count_genres(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.genres.count())
    }

    async fn list_mangas(&self) -> StoreResult<Vec<Manga>> {
        Ok(self.tables.read().await.mangas_where(|_| true))
    }

    async fn list_manga_summaries(&self) -> StoreResult<Vec<MangaSummary>> {
        let tables = self.tables.read().await;
        Ok(tables
            .mangas_where(|_| true)
            .into_iter()
            .map(|m| MangaSummary {
                author_name: tables
                    .authors
                    .rows
                    .get(&m.author_id)
                    .map(|a| format!("{}, {}", a.family_name, a.first_name)),
                id: m.id,
                title: m.title,
                author_id: m.author_id,
            })
            .collect())
    }

    async fn list_mangas_by_author(&self, author_id: DbId) -> StoreResult<Vec<Manga>> {
        Ok(self
            .tables
            .read()
            .await
            .mangas_where(|m| m.author_id == author_id))
    }

    async fn list_mangas_by_genre(&self, genre_id: DbId) -> StoreResult<Vec<Manga>> {
        Ok(self
            .tables
            .read()
            .await
            .mangas_where(|m| m.genre_ids.contains(&genre_id)))
    }

    async fn find_manga(&self, id: DbId) -> StoreResult<Option<Manga>> {
        Ok(self.tables.read().await.mangas.get(id))
    }

    async fn find_manga_detail(&self, id: DbId) -> StoreResult<Option<MangaDetail>> {
        let tables = self.tables.read().await;
        let Some(manga) = tables.mangas.get(id) else {
            return Ok(None);
        };
        let author = tables.authors.get(manga.author_id);
        let mut genres: Vec<Genre> = manga
            .genre_ids
            .iter()
            .filter_map(|gid| tables.genres.get(*gid))
            .collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(Some(MangaDetail {
            manga,
            author,
            genres,
        }))
    }

    async fn create_manga(&self, input: &MangaInput) -> StoreResult<Manga> {
        let mut tables = self.tables.write().await;
        let id = tables.mangas.next_id();
        let manga = manga_row(id, input);
        tables.mangas.rows.insert(id, manga.clone());
        Ok(manga)
    }

    async fn update_manga(&self, id: DbId, input: &MangaInput) -> StoreResult<Option<Manga>> {
        let mut tables = self.tables.write().await;
        Ok(tables.mangas.replace(id, manga_row(id, input)))
    }

    async fn delete_manga(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.mangas.remove(id))
    }

    async fn count_mangas(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.mangas.count())
    }

    async fn list_instances(&self) -> StoreResult<Vec<MangaInstanceWithManga>> {
        let tables = self.tables.read().await;
        let mut instances: Vec<MangaInstanceWithManga> = tables
            .instances
            .rows
            .values()
            .cloned()
            .map(|i| tables.with_manga(i))
            .collect();
        // Unresolved titles sort last.
        instances.sort_by(|a, b| {
            (a.manga_title.is_none(), &a.manga_title, a.instance.id).cmp(&(
                b.manga_title.is_none(),
                &b.manga_title,
                b.instance.id,
            ))
        });
        Ok(instances)
    }

    async fn list_instances_by_manga(&self, manga_id: DbId) -> StoreResult<Vec<MangaInstance>> {
        let tables = self.tables.read().await;
        Ok(tables
            .instances
            .rows
            .values()
            .filter(|i| i.manga_id == manga_id)
            .cloned()
            .collect())
    }

    async fn find_instance(&self, id: DbId) -> StoreResult<Option<MangaInstanceWithManga>> {
        let tables = self.tables.read().await;
        Ok(tables.instances.get(id).map(|i| tables.with_manga(i)))
    }

    async fn create_instance(&self, input: &MangaInstanceInput) -> StoreResult<MangaInstance> {
        let mut tables = self.tables.write().await;
        let id = tables.instances.next_id();
        let instance = instance_row(id, input);
        tables.instances.rows.insert(id, instance.clone());
        Ok(instance)
    }

    async fn update_instance(
        &self,
        id: DbId,
        input: &MangaInstanceInput,
    ) -> StoreResult<Option<MangaInstance>> {
        let mut tables = self.tables.write().await;
        Ok(tables.instances.replace(id, instance_row(id, input)))
    }

    async fn delete_instance(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.instances.remove(id))
    }

    async fn count_instances(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.instances.count())
    }

    async fn count_instances_by_status(&self, status: InstanceStatus) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables
            .instances
            .rows
            .values()
            .filter(|i| i.status == status)
            .count() as i64)
    }
}
