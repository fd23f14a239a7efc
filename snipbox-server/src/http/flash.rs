//! One-shot flash messages carried in a cookie
//!
//! `SetFlash` stores a message on a response (typically a redirect). The
//! next page that shows it extracts `Flash` and returns it as a response
//! part, which expires the cookie so the message is seen once.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponseParts, ResponseParts};

use super::error::ApiError;

pub const FLASH_COOKIE: &str = "snipbox_flash";

/// Flash message read from the request, if any.
#[derive(Debug, Default)]
pub struct Flash(Option<String>);

impl Flash {
    pub fn message(&self) -> Option<String> {
        self.0.clone()
    }

    fn from_cookie_header(value: &str) -> Option<String> {
        value
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, raw)| raw)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| urlencoding::decode(raw).ok())
            .map(|decoded| decoded.into_owned())
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let message = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(Flash::from_cookie_header);
        Ok(Self(message))
    }
}

/// Returning the extracted flash consumes it.
impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.0.is_some() {
            res.headers_mut().append(
                SET_COOKIE,
                HeaderValue::from_static("snipbox_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
            );
        }
        Ok(res)
    }
}

/// Store a flash message for the next page view.
pub struct SetFlash(String);

impl SetFlash {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl IntoResponseParts for SetFlash {
    type Error = ApiError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            urlencoding::encode(&self.0)
        );
        let value = HeaderValue::from_str(&cookie).map_err(|e| ApiError::Internal {
            message: format!("invalid flash cookie: {}", e),
        })?;
        res.headers_mut().append(SET_COOKIE, value);
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn reads_flash_among_other_cookies() {
        let header = "theme=dark; snipbox_flash=Snippet%20successfully%20created%21; lang=en";
        assert_eq!(
            Flash::from_cookie_header(header).as_deref(),
            Some("Snippet successfully created!")
        );
    }

    #[test]
    fn empty_or_absent_cookie_is_none() {
        assert_eq!(Flash::from_cookie_header("snipbox_flash="), None);
        assert_eq!(Flash::from_cookie_header("theme=dark"), None);
    }

    #[test]
    fn returned_flash_clears_cookie() {
        let response = (Flash(Some("hi".into())), StatusCode::OK).into_response();
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("snipbox_flash=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn returned_empty_flash_leaves_cookies_alone() {
        let response = (Flash(None), StatusCode::OK).into_response();
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[test]
    fn set_flash_encodes_message() {
        let response = (SetFlash::new("Saved; 100%"), StatusCode::OK).into_response();
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("snipbox_flash=Saved%3B%20100%25;"));
        assert_eq!(
            Flash::from_cookie_header(cookie.split(';').next().unwrap()).as_deref(),
            Some("Saved; 100%")
        );
    }
}
