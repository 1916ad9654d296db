use axum::extract::{Path as ReqPath, Query, Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::data::*;
use crate::html;
use crate::AppState;

pub mod comments;
pub mod files;
pub mod pages;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Unknown asset requested: {0}")]
    UnknownAsset(String),
    #[error("Comment session `{0}` is not open")]
    SessionNotFound(String),
    #[error("Comment content is blank")]
    BlankComment,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::UnknownRoute(_) | Error::UnknownAsset(_) | Error::SessionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Error::BlankComment => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Error::UnknownRoute(_) | Error::UnknownAsset(_) => {
                "The page you are looking for does not exist."
            }
            Error::SessionNotFound(_) => {
                "This discussion has expired. Reload the post to start a new one."
            }
            Error::BlankComment => "Comments cannot be blank.",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            warn!(error = %self, %status, "Replying with error");
        }

        (status, html::pages::error(status.as_u16(), self.message())).into_response()
    }
}

/// The identity of whoever is reading. The site has no accounts, so every
/// reader comments anonymously.
pub fn viewer() -> Author {
    Author::anonymous()
}

pub async fn fallback(request: Request) -> Error {
    Error::UnknownRoute(request.into_parts().0.uri)
}
