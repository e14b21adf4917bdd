//! Form normalization and per-entity submission validators.
//!
//! Handlers decode the urlencoded body into key/value pairs, wrap them in
//! [`FormData`] and pass that to the entity's `validate` function, which
//! returns either the store input or a [`Rejected`](crate::validation::Rejected)
//! draft for re-rendering.

pub mod author;
pub mod genre;
pub mod manga;
pub mod manga_instance;

use std::collections::HashMap;

use crate::types::DbId;

pub use author::{validate_author, AuthorDraft};
pub use genre::{validate_genre, GenreDraft};
pub use manga::{validate_manga, MangaDraft};
pub use manga_instance::{validate_manga_instance, MangaInstanceDraft};

/// Submitted form fields, keeping every value of repeated keys.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Build from decoded `application/x-www-form-urlencoded` pairs.
    ///
    /// A `name[]` key is folded into `name`, so array-style and repeated
    /// submissions end up in the same place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            let mut key = key.into();
            if let Some(stripped) = key.strip_suffix("[]") {
                key = stripped.to_string();
            }
            fields.entry(key).or_default().push(value.into());
        }
        Self { fields }
    }

    /// First value submitted under `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value submitted under `name`.
    ///
    /// A scalar submission yields a one-element collection and an absent
    /// field an empty one.
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.fields
            .get(name)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// A reference-domain option offered by a form, with its pre-checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub item: T,
    pub checked: bool,
}

/// Pair every option with whether its identifier is among `selected`.
pub fn mark_checked<T>(
    items: Vec<T>,
    selected: &[DbId],
    id_of: impl Fn(&T) -> DbId,
) -> Vec<Choice<T>> {
    items
        .into_iter()
        .map(|item| {
            let checked = selected.contains(&id_of(&item));
            Choice { item, checked }
        })
        .collect()
}
