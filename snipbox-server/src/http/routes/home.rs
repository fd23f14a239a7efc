//! Home page

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::http::error::ApiError;
use crate::http::flash::Flash;
use crate::state::AppState;
use crate::views::TemplateData;

/// GET / - latest unexpired snippets
async fn home(State(state): State<AppState>, flash: Flash) -> Result<(Flash, Response), ApiError> {
    let snippets = state.snippets().latest().await?;

    let data = TemplateData::new(flash.message()).with_snippets(snippets);
    let page = state.templates().render("home.html", StatusCode::OK, &data)?;

    Ok((flash, page))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
