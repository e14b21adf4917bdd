//! Response descriptor returned by the catalog handlers.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;

/// Either a rendered page or a redirect to another catalog URL.
#[derive(Debug)]
pub enum Page {
    Html(Markup),
    /// `302 Found` to the given location.
    Redirect(String),
}

impl Page {
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(location.into())
    }
}

impl From<Markup> for Page {
    fn from(markup: Markup) -> Self {
        Self::Html(markup)
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self {
            Page::Html(markup) => Html(markup.into_string()).into_response(),
            Page::Redirect(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
        }
    }
}
