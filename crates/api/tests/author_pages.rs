//! HTTP-level tests for the author pages.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_text, get, location, memory_app, post_form, seed_author, seed_manga};
use mangalib_db::store::CatalogStore;

#[tokio::test]
async fn list_orders_by_family_then_first_name() {
    let (store, app) = memory_app();
    seed_author(&store, "Rumiko", "Takahashi").await;
    seed_author(&store, "Kazuki", "Takahashi").await;
    seed_author(&store, "Osamu", "Tezuka").await;

    let body = body_text(get(&app, "/catalog/authors").await).await;
    let kazuki = body.find("Takahashi, Kazuki").unwrap();
    let rumiko = body.find("Takahashi, Rumiko").unwrap();
    let osamu = body.find("Tezuka, Osamu").unwrap();
    assert!(kazuki < rumiko && rumiko < osamu);
}

#[tokio::test]
async fn create_stores_dates_and_redirects() {
    let (store, app) = memory_app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        &[
            ("first_name", "Osamu"),
            ("family_name", "Tezuka"),
            ("date_of_birth", "1928-11-03"),
            ("date_of_death", "1989-02-09"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let authors = store.list_authors().await.unwrap();
    assert_eq!(location(&response), format!("/catalog/author/{}", authors[0].id));
    assert_eq!(authors[0].date_of_birth, NaiveDate::from_ymd_opt(1928, 11, 3));
    assert_eq!(authors[0].date_of_death, NaiveDate::from_ymd_opt(1989, 2, 9));
}

#[tokio::test]
async fn create_reports_name_and_date_problems() {
    let (store, app) = memory_app();

    let response = post_form(
        &app,
        "/catalog/author/create",
        &[
            ("first_name", "Go Nagai"),
            ("family_name", ""),
            ("date_of_birth", "someday"),
            ("date_of_death", ""),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("First name has non-alphanumeric characters."));
    assert!(body.contains("Family name must be specified."));
    assert!(body.contains("Invalid date of birth"));
    assert!(!body.contains("Invalid date of death"));
    assert!(body.contains("value=\"Go Nagai\""));
    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn detail_lists_the_authors_mangas() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Hajime", "Isayama").await;
    seed_manga(&store, "Attack on Titan", author.id, vec![]).await;

    let response = get(&app, &format!("/catalog/author/{}", author.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Author: Isayama, Hajime"));
    assert!(body.contains("Attack on Titan"));
}

#[tokio::test]
async fn unknown_author_is_not_found() {
    let (_store, app) = memory_app();
    let response = get(&app, "/catalog/author/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_preserves_identifier() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Yoshihiro", "Togashi").await;

    let form = body_text(get(&app, &format!("/catalog/author/{}/update", author.id)).await).await;
    assert!(form.contains("value=\"Yoshihiro\""));

    let response = post_form(
        &app,
        &format!("/catalog/author/{}/update", author.id),
        &[
            ("first_name", "Yoshihiro"),
            ("family_name", "Togashi"),
            ("date_of_birth", "1966-04-27"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/catalog/author/{}", author.id));
    let stored = store.find_author(author.id).await.unwrap().unwrap();
    assert_eq!(stored.date_of_birth, NaiveDate::from_ymd_opt(1966, 4, 27));
}

#[tokio::test]
async fn delete_is_refused_while_mangas_reference_the_author() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Hirohiko", "Araki").await;
    seed_manga(&store, "JoJo", author.id, vec![]).await;

    let response = post_form(&app, &format!("/catalog/author/{}/delete", author.id), &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Delete the following mangas before attempting to delete this author."));
    assert!(store.find_author(author.id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_without_mangas_redirects_to_list() {
    let (store, app) = memory_app();
    let author = seed_author(&store, "Ken", "Akamatsu").await;

    let response = post_form(&app, &format!("/catalog/author/{}/delete", author.id), &[]).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/catalog/authors");
    assert_eq!(store.count_authors().await.unwrap(), 0);
}

#[tokio::test]
async fn update_of_unknown_author_is_not_found() {
    let (store, app) = memory_app();

    let response = post_form(
        &app,
        "/catalog/author/5/update",
        &[("first_name", "Rumiko"), ("family_name", "Takahashi")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.count_authors().await.unwrap(), 0);
}
