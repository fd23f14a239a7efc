//! Route handlers
//!
//! - home: latest snippets
//! - snippets: view and create

pub mod home;
pub mod snippets;

use axum::Router;

use crate::http::error::ApiError;
use crate::state::AppState;

/// All page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(snippets::router())
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
