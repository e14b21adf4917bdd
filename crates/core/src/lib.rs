//! Pure catalog logic shared by the store and the HTTP layer.
//!
//! Nothing in this crate touches the database or the network: domain
//! types, canonical URLs, form normalization and the validation pipeline.

pub mod catalog;
pub mod error;
pub mod forms;
pub mod types;
pub mod validation;
