use std::sync::Arc;

use mangalib_db::store::CatalogStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Record store for the four catalog entities.
    pub store: Arc<dyn CatalogStore>,
}
