//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod genre_repo;
pub mod manga_instance_repo;
pub mod manga_repo;

pub use author_repo::AuthorRepo;
pub use genre_repo::GenreRepo;
pub use manga_instance_repo::MangaInstanceRepo;
pub use manga_repo::MangaRepo;
