//! Canonical URL derivation for catalog records.
//!
//! URLs are computed from the identifier on demand and never stored.

use crate::types::DbId;

/// Mount point of every catalog route.
pub const CATALOG_ROOT: &str = "/catalog";

/// The four record types held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Manga,
    Author,
    Genre,
    MangaInstance,
}

impl ResourceKind {
    /// Path segment used for single-record routes (`/catalog/<segment>/{id}`).
    pub fn segment(self) -> &'static str {
        match self {
            Self::Manga => "manga",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::MangaInstance => "mangainstance",
        }
    }

    /// Path segment of the list route (`/catalog/<plural>`).
    pub fn plural_segment(self) -> &'static str {
        match self {
            Self::Manga => "mangas",
            Self::Author => "authors",
            Self::Genre => "genres",
            Self::MangaInstance => "mangainstances",
        }
    }

    /// Human-readable entity name used in errors and page titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manga => "Manga",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::MangaInstance => "MangaInstance",
        }
    }
}

/// Canonical detail URL of a record, e.g. `/catalog/manga/42`.
pub fn resource_url(kind: ResourceKind, id: DbId) -> String {
    format!("{CATALOG_ROOT}/{}/{id}", kind.segment())
}

/// URL of the list view for a record type, e.g. `/catalog/mangas`.
pub fn list_url(kind: ResourceKind) -> String {
    format!("{CATALOG_ROOT}/{}", kind.plural_segment())
}
