//! Catalog-wide aggregates.

use serde::Serialize;

/// Record totals shown on the catalog home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub manga: i64,
    pub manga_instance: i64,
    pub manga_instance_available: i64,
    pub author: i64,
    pub genre: i64,
}
