//! Manga instance (physical copy) pages.

use maud::{html, Markup};
use mangalib_core::catalog::{resource_url, InstanceStatus, ResourceKind};
use mangalib_core::forms::MangaInstanceDraft;
use mangalib_core::validation::FieldViolation;
use mangalib_db::models::manga::Manga;
use mangalib_db::models::manga_instance::{MangaInstance, MangaInstanceWithManga};

use super::{date_value, layout, record_actions, stored, violation_list};

fn status_class(status: InstanceStatus) -> &'static str {
    if status.is_available() {
        "text-success"
    } else {
        "text-warning"
    }
}

/// Status paragraph; copies still publishing also show their due date.
pub(super) fn status_line(instance: &MangaInstance) -> Markup {
    html! {
        p {
            strong { "Status: " }
            span class=(status_class(instance.status)) { (instance.status.as_str()) }
            @if !instance.status.is_available() {
                " (Due: " (instance.due_back_formatted()) ")"
            }
        }
    }
}

fn manga_title(row: &MangaInstanceWithManga) -> Markup {
    match &row.manga_title {
        Some(title) => html! { (stored(title)) },
        None => html! { "(unknown manga)" },
    }
}

pub fn list(instances: &[MangaInstanceWithManga]) -> Markup {
    layout(
        "Manga Instance List",
        html! {
            @if instances.is_empty() {
                p { "There are no manga copies in this library." }
            } @else {
                ul {
                    @for row in instances {
                        @let instance = &row.instance;
                        li {
                            a href=(resource_url(ResourceKind::MangaInstance, instance.id)) {
                                (manga_title(row)) " : " (stored(&instance.imprint))
                            }
                            " - "
                            span class=(status_class(instance.status)) { (instance.status.as_str()) }
                            @if !instance.status.is_available() {
                                span { " (Due: " (instance.due_back_formatted()) ")" }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(row: &MangaInstanceWithManga) -> Markup {
    let instance = &row.instance;
    layout(
        format!("ID: {}", instance.id),
        html! {
            p {
                strong { "Title: " }
                a href=(resource_url(ResourceKind::Manga, instance.manga_id)) { (manga_title(row)) }
            }
            p { strong { "Imprint: " } (stored(&instance.imprint)) }
            (status_line(instance))
            (record_actions(&resource_url(ResourceKind::MangaInstance, instance.id)))
        },
    )
}

pub fn form(
    title: &str,
    draft: &MangaInstanceDraft,
    mangas: &[Manga],
    violations: &[FieldViolation],
) -> Markup {
    layout(
        title,
        html! {
            form method="POST" {
                div {
                    label for="manga" { "Manga:" }
                    select id="manga" name="manga" required {
                        option value="" { "--Please select a manga--" }
                        @for manga in mangas {
                            option value=(manga.id) selected[draft.manga_id == Some(manga.id)] {
                                (stored(&manga.title))
                            }
                        }
                    }
                }
                div {
                    label for="imprint" { "Imprint:" }
                    input id="imprint" type="text" name="imprint" placeholder="Publisher and date information" required value=(stored(&draft.imprint));
                }
                div {
                    label for="due_back" { "Date when manga available:" }
                    input id="due_back" type="date" name="due_back" value=(date_value(draft.due_back));
                }
                div {
                    label for="status" { "Status:" }
                    select id="status" name="status" required {
                        @for status in InstanceStatus::ALL {
                            option value=(status.as_str()) selected[draft.status == status] { (status.as_str()) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (violation_list(violations))
        },
    )
}

pub fn delete(row: &MangaInstanceWithManga) -> Markup {
    let instance = &row.instance;
    layout(
        "Delete MangaInstance",
        html! {
            p { strong { "ID: " } (instance.id) }
            p {
                strong { "Title: " }
                a href=(resource_url(ResourceKind::Manga, instance.manga_id)) { (manga_title(row)) }
            }
            p { strong { "Imprint: " } (stored(&instance.imprint)) }
            (status_line(instance))
            p { "Do you really want to delete this MangaInstance?" }
            form method="POST" {
                input type="hidden" name="mangainstanceid" value=(instance.id);
                button type="submit" { "Delete" }
            }
        },
    )
}
