//! Server-rendered HTML pages.
//!
//! Record text is escaped once by the validation layer before it is
//! stored, so stored strings are emitted through [`stored`] instead of
//! being escaped a second time. Everything else goes through maud's own
//! escaping.

pub mod author;
pub mod catalog;
pub mod error;
pub mod genre;
pub mod manga;
pub mod manga_instance;

use maud::{html, Markup, PreEscaped, Render, DOCTYPE};
use mangalib_core::catalog::{list_url, ResourceKind, CATALOG_ROOT};
use mangalib_core::types::Date;
use mangalib_core::validation::FieldViolation;

/// Emit already-sanitized record text verbatim.
pub fn stored(text: &str) -> PreEscaped<&str> {
    PreEscaped(text)
}

/// Page shell with the catalog sidebar.
pub fn layout(title: impl Render, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                nav {
                    ul {
                        li { a href=(CATALOG_ROOT) { "Home" } }
                        li { a href=(list_url(ResourceKind::Manga)) { "All mangas" } }
                        li { a href=(list_url(ResourceKind::Author)) { "All authors" } }
                        li { a href=(list_url(ResourceKind::Genre)) { "All genres" } }
                        li { a href=(list_url(ResourceKind::MangaInstance)) { "All manga instances" } }
                    }
                    hr;
                    ul {
                        li { a href=(create_url(ResourceKind::Author)) { "Create new author" } }
                        li { a href=(create_url(ResourceKind::Genre)) { "Create new genre" } }
                        li { a href=(create_url(ResourceKind::Manga)) { "Create new manga" } }
                        li { a href=(create_url(ResourceKind::MangaInstance)) { "Create new manga instance" } }
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

fn create_url(kind: ResourceKind) -> String {
    format!("{CATALOG_ROOT}/{}/create", kind.segment())
}

/// Value for an `<input type="date">`.
fn date_value(date: Option<Date>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Validation messages shown under a re-rendered form.
fn violation_list(violations: &[FieldViolation]) -> Markup {
    html! {
        @if !violations.is_empty() {
            ul class="errors" {
                @for violation in violations {
                    li { (violation.message) }
                }
            }
        }
    }
}

/// Links shown at the bottom of every detail page.
fn record_actions(url: &str) -> Markup {
    html! {
        hr;
        p {
            a href=(format!("{url}/delete")) { "Delete" }
            " | "
            a href=(format!("{url}/update")) { "Update" }
        }
    }
}
