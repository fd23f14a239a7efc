//! Request error type with IntoResponse
//!
//! This is the only place internal failures become HTTP status codes.
//! Server-side failures are logged here and answered with the bare status
//! text, so nothing internal reaches the client.

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;
use crate::views::ViewError;

#[derive(Debug)]
pub enum ApiError {
    /// Missing or expired snippet, bad id, unknown route (404)
    NotFound,

    /// Malformed user input (400)
    BadRequest { reason: String },

    /// Storage failure (500, logged)
    Database(StoreError),

    /// Template lookup or execution failure (500, logged)
    View(ViewError),

    /// Programming fault such as extractor misuse or a handler panic (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::View(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// `err: cause: cause` for errors whose Display hides the interesting part.
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Method and URI come from the enclosing http_request span.
        match &self {
            Self::NotFound => {}
            Self::BadRequest { reason } => {
                tracing::debug!(%reason, "rejected request");
            }
            Self::Database(e) => {
                tracing::error!(error = %error_chain(e), backtrace = %Backtrace::capture(), "database error");
            }
            Self::View(e) => {
                tracing::error!(error = %error_chain(e), backtrace = %Backtrace::capture(), "render error");
            }
            Self::Internal { message } => {
                tracing::error!(error = %message, backtrace = %Backtrace::capture(), "internal error");
            }
        }

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoRecord => Self::NotFound,
            _ => Self::Database(e),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        Self::View(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn no_record_is_404() {
        let response = ApiError::from(StoreError::NoRecord).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not Found");
    }

    #[tokio::test]
    async fn database_error_is_generic_500() {
        let err = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ApiError::Database(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn unknown_page_is_500() {
        let err = ApiError::from(ViewError::UnknownPage("missing.html".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(response).await.contains("missing.html"));
    }

    #[tokio::test]
    async fn bad_request_hides_reason() {
        let err = ApiError::BadRequest {
            reason: "Failed to deserialize form body: expires: invalid digit".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Bad Request");
    }

    #[test]
    fn chain_includes_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ViewError::Write(io);
        assert!(error_chain(&err).contains("disk on fire"));
    }
}
