//! Author pages.

use maud::{html, Markup};
use mangalib_core::catalog::{resource_url, ResourceKind};
use mangalib_core::forms::AuthorDraft;
use mangalib_core::validation::FieldViolation;
use mangalib_db::models::author::Author;
use mangalib_db::models::manga::Manga;

use super::{date_value, layout, record_actions, stored, violation_list};

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(resource_url(ResourceKind::Author, author.id)) { (stored(&author.name())) }
                            " (" (author.lifespan()) ")"
                        }
                    }
                }
            }
        },
    )
}

/// Titles with their summaries, as listed under an author or genre.
pub(super) fn manga_summaries(mangas: &[Manga]) -> Markup {
    html! {
        dl {
            @for manga in mangas {
                dt { a href=(resource_url(ResourceKind::Manga, manga.id)) { (stored(&manga.title)) } }
                dd { (stored(&manga.summary)) }
            }
        }
    }
}

pub fn detail(author: &Author, mangas: &[Manga]) -> Markup {
    layout(
        html! { "Author: " (stored(&author.name())) },
        html! {
            p { (author.lifespan()) }
            div {
                h4 { "Mangas" }
                @if mangas.is_empty() {
                    p { "This author has no mangas." }
                } @else {
                    (manga_summaries(mangas))
                }
            }
            (record_actions(&resource_url(ResourceKind::Author, author.id)))
        },
    )
}

pub fn form(title: &str, draft: &AuthorDraft, violations: &[FieldViolation]) -> Markup {
    layout(
        title,
        html! {
            form method="POST" {
                div {
                    label for="first_name" { "First Name:" }
                    input id="first_name" type="text" name="first_name" placeholder="First name" required value=(stored(&draft.first_name));
                    label for="family_name" { "Family Name:" }
                    input id="family_name" type="text" name="family_name" placeholder="Family name" required value=(stored(&draft.family_name));
                }
                div {
                    label for="date_of_birth" { "Date of birth:" }
                    input id="date_of_birth" type="date" name="date_of_birth" value=(date_value(draft.date_of_birth));
                }
                div {
                    label for="date_of_death" { "Date of death:" }
                    input id="date_of_death" type="date" name="date_of_death" value=(date_value(draft.date_of_death));
                }
                button type="submit" { "Submit" }
            }
            (violation_list(violations))
        },
    )
}

pub fn delete(author: &Author, mangas: &[Manga]) -> Markup {
    layout(
        html! { "Delete Author: " (stored(&author.name())) },
        html! {
            p { (author.lifespan()) }
            @if !mangas.is_empty() {
                p { strong { "Delete the following mangas before attempting to delete this author." } }
                (manga_summaries(mangas))
            } @else {
                p { "Do you really want to delete this Author?" }
                form method="POST" {
                    input type="hidden" name="authorid" value=(author.id);
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}
