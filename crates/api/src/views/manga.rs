//! Manga pages.

use maud::{html, Markup};
use mangalib_core::catalog::{resource_url, ResourceKind};
use mangalib_core::forms::{Choice, MangaDraft};
use mangalib_core::validation::FieldViolation;
use mangalib_db::models::author::Author;
use mangalib_db::models::genre::Genre;
use mangalib_db::models::manga::{Manga, MangaDetail, MangaSummary};
use mangalib_db::models::manga_instance::MangaInstance;

use super::{layout, record_actions, stored, violation_list};

pub fn list(mangas: &[MangaSummary]) -> Markup {
    layout(
        "Manga List",
        html! {
            @if mangas.is_empty() {
                p { "There are no mangas." }
            } @else {
                ul {
                    @for manga in mangas {
                        li {
                            a href=(resource_url(ResourceKind::Manga, manga.id)) { (stored(&manga.title)) }
                            @if let Some(author) = &manga.author_name {
                                " (" (stored(author)) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(detail: &MangaDetail, instances: &[MangaInstance]) -> Markup {
    let manga = &detail.manga;
    layout(
        stored(&manga.title),
        html! {
            p {
                strong { "Author: " }
                @if let Some(author) = &detail.author {
                    a href=(resource_url(ResourceKind::Author, author.id)) { (stored(&author.name())) }
                }
            }
            p { strong { "Summary: " } (stored(&manga.summary)) }
            p { strong { "ISBN: " } (stored(&manga.isbn)) }
            p {
                strong { "Genre: " }
                @for (i, genre) in detail.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(resource_url(ResourceKind::Genre, genre.id)) { (stored(&genre.name)) }
                }
            }
            div {
                h4 { "Copies" }
                @if instances.is_empty() {
                    p { "There are no copies of this manga in the library." }
                }
                @for instance in instances {
                    hr;
                    (super::manga_instance::status_line(instance))
                    p { strong { "Imprint: " } (stored(&instance.imprint)) }
                    p {
                        strong { "Id: " }
                        a href=(resource_url(ResourceKind::MangaInstance, instance.id)) { (instance.id) }
                    }
                }
            }
            (record_actions(&resource_url(ResourceKind::Manga, manga.id)))
        },
    )
}

/// Create/update form. `genres` carries the pre-checked state of each box.
pub fn form(
    title: &str,
    draft: &MangaDraft,
    authors: &[Author],
    genres: &[Choice<Genre>],
    violations: &[FieldViolation],
) -> Markup {
    layout(
        title,
        html! {
            form method="POST" {
                div {
                    label for="title" { "Title:" }
                    input id="title" type="text" name="title" placeholder="Name of manga" required value=(stored(&draft.title));
                }
                div {
                    label for="author" { "Author:" }
                    select id="author" name="author" required {
                        option value="" { "--Please select an author--" }
                        @for author in authors {
                            option value=(author.id) selected[draft.author_id == Some(author.id)] {
                                (stored(&author.name()))
                            }
                        }
                    }
                }
                div {
                    label for="summary" { "Summary:" }
                    textarea id="summary" name="summary" placeholder="Summary" required { (stored(&draft.summary)) }
                }
                div {
                    label for="isbn" { "ISBN:" }
                    input id="isbn" type="text" name="isbn" placeholder="ISBN13" required value=(stored(&draft.isbn));
                }
                div {
                    label { "Genre:" }
                    @for choice in genres {
                        @let id = format!("genre-{}", choice.item.id);
                        div {
                            input type="checkbox" name="genre" id=(id) value=(choice.item.id) checked[choice.checked];
                            label for=(id) { (stored(&choice.item.name)) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (violation_list(violations))
        },
    )
}

/// Delete confirmation. While copies exist the form is withheld.
pub fn delete(manga: &Manga, instances: &[MangaInstance]) -> Markup {
    layout(
        "Delete Manga",
        html! {
            h2 { (stored(&manga.title)) }
            @if !instances.is_empty() {
                p { strong { "Delete the following copies before attempting to delete this manga." } }
                ul {
                    @for instance in instances {
                        li {
                            a href=(resource_url(ResourceKind::MangaInstance, instance.id)) {
                                (stored(&instance.imprint)) " (" (instance.status.as_str()) ")"
                            }
                        }
                    }
                }
            } @else {
                p { "Do you really want to delete this Manga?" }
                form method="POST" {
                    input type="hidden" name="mangaid" value=(manga.id);
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}
