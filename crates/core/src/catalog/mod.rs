//! Catalog domain: resource kinds, canonical URLs, instance status and the
//! validated write inputs handed to the record store.

pub mod input;
pub mod resource;
pub mod status;

pub use input::{AuthorInput, GenreInput, MangaInput, MangaInstanceInput};
pub use resource::{list_url, resource_url, ResourceKind, CATALOG_ROOT};
pub use status::InstanceStatus;
