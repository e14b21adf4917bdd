//! Genre pages.

use maud::{html, Markup};
use mangalib_core::catalog::{resource_url, ResourceKind};
use mangalib_core::forms::GenreDraft;
use mangalib_core::validation::FieldViolation;
use mangalib_db::models::genre::Genre;
use mangalib_db::models::manga::Manga;

use super::author::manga_summaries;
use super::{layout, record_actions, stored, violation_list};

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(resource_url(ResourceKind::Genre, genre.id)) { (stored(&genre.name)) } }
                    }
                }
            }
        },
    )
}

pub fn detail(genre: &Genre, mangas: &[Manga]) -> Markup {
    layout(
        html! { "Genre: " (stored(&genre.name)) },
        html! {
            div {
                h4 { "Mangas" }
                @if mangas.is_empty() {
                    p { "This genre has no mangas." }
                } @else {
                    (manga_summaries(mangas))
                }
            }
            (record_actions(&resource_url(ResourceKind::Genre, genre.id)))
        },
    )
}

pub fn form(title: &str, draft: &GenreDraft, violations: &[FieldViolation]) -> Markup {
    layout(
        title,
        html! {
            form method="POST" {
                div {
                    label for="name" { "Genre:" }
                    input id="name" type="text" name="name" placeholder="Fantasy, Poetry etc." required value=(stored(&draft.name));
                }
                button type="submit" { "Submit" }
            }
            (violation_list(violations))
        },
    )
}

pub fn delete(genre: &Genre, mangas: &[Manga]) -> Markup {
    layout(
        html! { "Delete Genre: " (stored(&genre.name)) },
        html! {
            @if !mangas.is_empty() {
                p { strong { "Delete the following mangas before attempting to delete this genre." } }
                (manga_summaries(mangas))
            } @else {
                p { "Do you really want to delete this Genre?" }
                form method="POST" {
                    input type="hidden" name="genreid" value=(genre.id);
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}
