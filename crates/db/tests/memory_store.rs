//! Behaviour of the in-memory catalog store.
//!
//! The HTTP integration tests run against this store, so its ordering,
//! defaults and replace semantics must match the PostgreSQL repositories.

use chrono::{NaiveDate, Utc};
use mangalib_core::catalog::{
    AuthorInput, GenreInput, InstanceStatus, MangaInput, MangaInstanceInput,
};
use mangalib_db::store::{CatalogStore, MemoryCatalogStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_author(first: &str, family: &str) -> AuthorInput {
    AuthorInput {
        first_name: first.to_string(),
        family_name: family.to_string(),
        date_of_birth: None,
        date_of_death: None,
    }
}

fn new_genre(name: &str) -> GenreInput {
    GenreInput {
        name: name.to_string(),
    }
}

fn new_manga(title: &str, author_id: i64, genre_ids: Vec<i64>) -> MangaInput {
    MangaInput {
        title: title.to_string(),
        author_id,
        summary: "summary".to_string(),
        isbn: "978".to_string(),
        genre_ids,
    }
}

fn new_instance(manga_id: i64, status: InstanceStatus) -> MangaInstanceInput {
    MangaInstanceInput {
        manga_id,
        imprint: "Shueisha".to_string(),
        status,
        due_back: None,
    }
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authors_list_by_family_then_first_name() {
    let store = MemoryCatalogStore::new();
    store.create_author(&new_author("Naoki", "Urasawa")).await.unwrap();
    store.create_author(&new_author("Rumiko", "Takahashi")).await.unwrap();
    store.create_author(&new_author("Kazuo", "Takahashi")).await.unwrap();

    let names: Vec<String> = store
        .list_authors()
        .await
        .unwrap()
        .iter()
        .map(|a| a.name())
        .collect();
    assert_eq!(
        names,
        vec!["Takahashi, Kazuo", "Takahashi, Rumiko", "Urasawa, Naoki"]
    );
}

#[tokio::test]
async fn update_keeps_id_and_replaces_fields() {
    let store = MemoryCatalogStore::new();
    let created = store.create_author(&new_author("Akira", "Toriyama")).await.unwrap();

    let mut input = new_author("Akira", "Toriyama");
    input.date_of_death = NaiveDate::from_ymd_opt(2024, 3, 1);
    let updated = store
        .update_author(created.id, &input)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date_of_death, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(store.count_authors().await.unwrap(), 1);
}

#[tokio::test]
async fn update_of_unknown_id_returns_none() {
    let store = MemoryCatalogStore::new();
    let result = store.update_author(99, &new_author("A", "B")).await.unwrap();
    assert!(result.is_none());
    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn ids_are_never_reused() {
    let store = MemoryCatalogStore::new();
    let first = store.create_genre(&new_genre("Horror")).await.unwrap();
    assert!(store.delete_genre(first.id).await.unwrap());
    let second = store.create_genre(&new_genre("Comedy")).await.unwrap();
    assert_ne!(first.id, second.id);
    assert!(!store.delete_genre(first.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[tokio::test]
async fn genre_lookup_by_name_ignores_case() {
    let store = MemoryCatalogStore::new();
    let genre = store.create_genre(&new_genre("Seinen")).await.unwrap();
    let found = store.find_genre_by_name("sEINEN").await.unwrap();
    assert_eq!(found, Some(genre));
    assert_eq!(store.find_genre_by_name("Shonen").await.unwrap(), None);
}

// ---------------------------------------------------------------------------
// Mangas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manga_detail_resolves_author_and_genres() {
    let store = MemoryCatalogStore::new();
    let author = store.create_author(&new_author("Kentaro", "Miura")).await.unwrap();
    let fantasy = store.create_genre(&new_genre("Fantasy")).await.unwrap();
    let horror = store.create_genre(&new_genre("Dark")).await.unwrap();
    let manga = store
        .create_manga(&new_manga("Berserk", author.id, vec![fantasy.id, horror.id, fantasy.id]))
        .await
        .unwrap();

    assert_eq!(manga.genre_ids, vec![fantasy.id, horror.id]);

    let detail = store.find_manga_detail(manga.id).await.unwrap().unwrap();
    assert_eq!(detail.author, Some(author));
    let genre_names: Vec<_> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(genre_names, vec!["Dark", "Fantasy"]);
}

#[tokio::test]
async fn summaries_are_sorted_by_title_with_author_names() {
    let store = MemoryCatalogStore::new();
    let author = store.create_author(&new_author("Hajime", "Isayama")).await.unwrap();
    store.create_manga(&new_manga("Zeta", author.id, vec![])).await.unwrap();
    store.create_manga(&new_manga("Alpha", author.id, vec![])).await.unwrap();

    let summaries = store.list_manga_summaries().await.unwrap();
    let titles: Vec<_> = summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Zeta"]);
    assert_eq!(summaries[0].author_name.as_deref(), Some("Isayama, Hajime"));
}

#[tokio::test]
async fn mangas_filter_by_author_and_genre() {
    let store = MemoryCatalogStore::new();
    let a = store.create_author(&new_author("A", "One")).await.unwrap();
    let b = store.create_author(&new_author("B", "Two")).await.unwrap();
    let g = store.create_genre(&new_genre("Sports")).await.unwrap();
    store.create_manga(&new_manga("Slam Dunk", a.id, vec![g.id])).await.unwrap();
    store.create_manga(&new_manga("Monster", b.id, vec![])).await.unwrap();

    assert_eq!(store.list_mangas_by_author(a.id).await.unwrap().len(), 1);
    let by_genre = store.list_mangas_by_genre(g.id).await.unwrap();
    assert_eq!(by_genre.len(), 1);
    assert_eq!(by_genre[0].title, "Slam Dunk");
}

// ---------------------------------------------------------------------------
// Instances
// ---------------------------------------------------------------------------

#[tokio::test]
async fn instance_due_back_defaults_to_today() {
    let store = MemoryCatalogStore::new();
    let instance = store
        .create_instance(&new_instance(1, InstanceStatus::default()))
        .await
        .unwrap();
    assert_eq!(instance.due_back, Utc::now().date_naive());
}

#[tokio::test]
async fn instances_carry_manga_titles_and_count_by_status() {
    let store = MemoryCatalogStore::new();
    let author = store.create_author(&new_author("Eiichiro", "Oda")).await.unwrap();
    let manga = store.create_manga(&new_manga("One Piece", author.id, vec![])).await.unwrap();
    store
        .create_instance(&new_instance(manga.id, InstanceStatus::CurrentlyPublishing))
        .await
        .unwrap();
    store
        .create_instance(&new_instance(manga.id, InstanceStatus::FinishedPublishing))
        .await
        .unwrap();
    store
        .create_instance(&new_instance(404, InstanceStatus::FinishedPublishing))
        .await
        .unwrap();

    let listed = store.list_instances().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].manga_title.as_deref(), Some("One Piece"));
    assert_eq!(listed[2].manga_title, None);

    assert_eq!(store.list_instances_by_manga(manga.id).await.unwrap().len(), 2);
    assert_eq!(store.count_instances().await.unwrap(), 3);
    assert_eq!(
        store
            .count_instances_by_status(InstanceStatus::FinishedPublishing)
            .await
            .unwrap(),
        2
    );
}
