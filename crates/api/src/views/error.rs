use axum::http::StatusCode;
use maud::{html, Markup};
use mangalib_core::catalog::CATALOG_ROOT;

use super::layout;

pub fn page(status: StatusCode, message: &str) -> Markup {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    layout(
        title,
        html! {
            p { (message) }
            p { a href=(CATALOG_ROOT) { "Back to the catalog" } }
        },
    )
}
