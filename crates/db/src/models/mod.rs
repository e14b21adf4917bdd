//! Row models for the catalog tables.
//!
//! Each submodule contains the `FromRow` + `Serialize` row struct(s) for one
//! table, plus conversions into the form drafts used to pre-populate update
//! forms. Write inputs live in `mangalib_core::catalog`.

pub mod author;
pub mod catalog;
pub mod genre;
pub mod manga;
pub mod manga_instance;
