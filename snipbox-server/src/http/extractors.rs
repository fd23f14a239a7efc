//! Custom Axum extractors

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Snippet id from the path. Anything that is not a positive integer is a
/// 404, same as an id with no snippet behind it.
pub struct SnippetId(pub i64);

impl<S> FromRequestParts<S> for SnippetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        match raw.parse::<i64>() {
            Ok(id) if id >= 1 => Ok(Self(id)),
            _ => Err(ApiError::NotFound),
        }
    }
}

/// URL-encoded POST body decoded into `T`.
///
/// A body the client got wrong is a 400. A rejection that only a wiring
/// mistake can produce (this extractor reading a query string on a GET
/// route, or a rejection kind this code does not know about) is an
/// internal fault, logged and answered with 500.
pub struct ValidForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(classify_form_rejection)?;
        Ok(Self(value))
    }
}

fn classify_form_rejection(rejection: FormRejection) -> ApiError {
    match rejection {
        FormRejection::InvalidFormContentType(_)
        | FormRejection::FailedToDeserializeFormBody(_)
        | FormRejection::BytesRejection(_) => ApiError::BadRequest {
            reason: rejection.body_text(),
        },
        _ => ApiError::Internal {
            message: format!("form decoder misuse: {}", rejection.body_text()),
        },
    }
}
