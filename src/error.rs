//! Error types for the blog core.
//!
//! Errors reaching the HTTP boundary are rendered as small HTML pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::content::PostId;

/// Blog error type.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// No post is stored under the requested id.
    #[error("post {0} not found")]
    NotFound(PostId),

    /// The path looks like a post page but is not a canonical post URL.
    #[error("no page at {0}")]
    PageNotFound(String),

    /// A post was submitted without a title.
    ///
    /// Raised by `jammlog new`. No built-in route accepts posts; the 400
    /// mapping covers routers that embed [`PostStore`](crate::store::PostStore)
    /// writes.
    #[error("post title must not be empty")]
    EmptyTitle,

    /// A template failed to render.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Internal error (I/O, serialization, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("There is no post with id {id}."),
            ),
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("There is no page at {}.", tera::escape_html(path)),
            ),
            Self::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                self.to_string(),
            ),
            Self::Template(err) => {
                tracing::error!(error = %err, "template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "The page could not be rendered.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred.".to_string(),
                )
            }
        };

        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<p>{message}</p>\n<a href=\"/blog/\">Back to Blog</a>\n</body>\n</html>\n"
        );

        (status, Html(body)).into_response()
    }
}
