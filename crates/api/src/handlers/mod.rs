//! Request handlers: one module per catalog entity plus the catalog home.
//!
//! Every entity exposes the same operations (`list`, `detail`,
//! `create_get`/`create_post`, `update_get`/`update_post`,
//! `delete_get`/`delete_post`). Form bodies are decoded into key/value
//! pairs so repeated keys such as `genre` survive, then validated through
//! `mangalib_core::forms`.

pub mod author;
pub mod catalog;
pub mod genre;
pub mod manga;
pub mod manga_instance;

use axum::Form;
use mangalib_core::catalog::ResourceKind;
use mangalib_core::error::CoreError;
use mangalib_core::forms::FormData;
use mangalib_core::types::DbId;

use crate::error::AppError;

/// Urlencoded body with every value of repeated keys preserved.
pub type FormPairs = Form<Vec<(String, String)>>;

fn form_data(Form(pairs): FormPairs) -> FormData {
    FormData::from_pairs(pairs)
}

fn not_found(kind: ResourceKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: kind.label(),
        id,
    })
}
