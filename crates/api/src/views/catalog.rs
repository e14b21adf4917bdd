use maud::{html, Markup};
use mangalib_db::models::catalog::CatalogCounts;

use super::layout;

/// The catalog home: record totals.
pub fn index(counts: &CatalogCounts) -> Markup {
    layout(
        "Local Library Home",
        html! {
            p {
                "Welcome to " em { "MangaLib" } ", a very basic manga library website."
            }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul {
                li { strong { "Mangas:" } " " (counts.manga) }
                li { strong { "Copies:" } " " (counts.manga_instance) }
                li { strong { "Copies available:" } " " (counts.manga_instance_available) }
                li { strong { "Authors:" } " " (counts.author) }
                li { strong { "Genres:" } " " (counts.genre) }
            }
        },
    )
}
