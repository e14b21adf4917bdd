//! HTTP-level tests for the genre pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, memory_app, post_form, seed_author, seed_genre, seed_manga};
use mangalib_db::store::CatalogStore;

#[tokio::test]
async fn create_redirects_to_new_genre() {
    let (store, app) = memory_app();

    let response = post_form(&app, "/catalog/genre/create", &[("name", " Seinen ")]).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let genres = store.list_genres().await.unwrap();
    assert_eq!(genres[0].name, "Seinen");
    assert_eq!(location(&response), format!("/catalog/genre/{}", genres[0].id));
}

#[tokio::test]
async fn existing_name_redirects_instead_of_duplicating() {
    let (store, app) = memory_app();
    let existing = seed_genre(&store, "Shoujo").await;

    let response = post_form(&app, "/catalog/genre/create", &[("name", "SHOUJO")]).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/catalog/genre/{}", existing.id));
    assert_eq!(store.count_genres().await.unwrap(), 1);
}

#[tokio::test]
async fn name_length_is_enforced() {
    let (store, app) = memory_app();

    let body = body_text(post_form(&app, "/catalog/genre/create", &[("name", "ab")]).await).await;
    assert!(body.contains("Genre name must contain at least 3 characters"));

    let long = "x".repeat(101);
    let body = body_text(post_form(&app, "/catalog/genre/create", &[("name", &long)]).await).await;
    assert!(body.contains("Genre name must not exceed 100 characters"));

    assert_eq!(store.count_genres().await.unwrap(), 0);
}

#[tokio::test]
async fn detail_lists_mangas_in_genre() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Makoto", "Yukimura").await;
    let genre = seed_genre(&store, "Historical").await;
    seed_manga(&store, "Vinland Saga", author.id, vec![genre.id]).await;
    seed_manga(&store, "Planetes", author.id, vec![]).await;

    let body = body_text(get(&app, &format!("/catalog/genre/{}", genre.id)).await).await;
    assert!(body.contains("Genre: Historical"));
    assert!(body.contains("Vinland Saga"));
    assert!(!body.contains("Planetes"));
}

#[tokio::test]
async fn update_renames_in_place() {
    let (store, app) = memory_app();
    let genre = seed_genre(&store, "Mecha").await;

    let response = post_form(
        &app,
        &format!("/catalog/genre/{}/update", genre.id),
        &[("name", "Super Robot")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/catalog/genre/{}", genre.id));
    assert_eq!(
        store.find_genre(genre.id).await.unwrap().unwrap().name,
        "Super Robot"
    );
}

#[tokio::test]
async fn delete_is_refused_while_mangas_use_the_genre() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Kohei", "Horikoshi").await;
    let genre = seed_genre(&store, "Superhero").await;
    seed_manga(&store, "My Hero Academia", author.id, vec![genre.id]).await;

    let response = post_form(&app, &format!("/catalog/genre/{}/delete", genre.id), &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Delete the following mangas before attempting to delete this genre."));
    assert_eq!(store.count_genres().await.unwrap(), 1);
}

#[tokio::test]
async fn unused_genre_is_deleted() {
    let (store, app) = memory_app();
    let genre = seed_genre(&store, "Isekai").await;

    let confirm = body_text(get(&app, &format!("/catalog/genre/{}/delete", genre.id)).await).await;
    assert!(confirm.contains("Do you really want to delete this Genre?"));

    let response = post_form(&app, &format!("/catalog/genre/{}/delete", genre.id), &[]).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog/genres");
    assert_eq!(store.count_genres().await.unwrap(), 0);
}

#[tokio::test]
async fn length_limit_counts_submitted_characters() {
    let (store, app) = memory_app();
    let name = format!("{}<&>", "x".repeat(97));

    let response = post_form(&app, "/catalog/genre/create", &[("name", &name)]).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let genres = store.list_genres().await.unwrap();
    assert_eq!(genres[0].name, format!("{}&lt;&amp;&gt;", "x".repeat(97)));
}

#[tokio::test]
async fn unknown_genre_is_not_found() {
    let (_store, app) = memory_app();

    assert_eq!(get(&app, "/catalog/genre/9").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get(&app, "/catalog/genre/9/update").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn update_of_unknown_genre_is_not_found() {
    let (store, app) = memory_app();

    let response = post_form(&app, "/catalog/genre/9/update", &[("name", "Josei")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.count_genres().await.unwrap(), 0);
}

#[tokio::test]
async fn rename_onto_another_genres_name_is_refused() {
    let (store, app) = memory_app();
    seed_genre(&store, "Seinen").await;
    let shonen = seed_genre(&store, "Shonen").await;

    let response = post_form(
        &app,
        &format!("/catalog/genre/{}/update", shonen.id),
        &[("name", "seinen")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Update Genre"));
    assert!(body.contains("Another genre already uses this name"));
    let names: Vec<_> = store
        .list_genres()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Seinen", "Shonen"]);
}

#[tokio::test]
async fn rename_may_change_case_of_own_name() {
    let (store, app) = memory_app();
    let genre = seed_genre(&store, "shoujo").await;

    let response = post_form(
        &app,
        &format!("/catalog/genre/{}/update", genre.id),
        &[("name", "Shoujo")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(store.find_genre(genre.id).await.unwrap().unwrap().name, "Shoujo");
}
