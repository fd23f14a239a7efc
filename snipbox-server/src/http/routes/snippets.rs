//! Snippet pages

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use snipbox_core::SnippetCreateForm;

use crate::http::error::ApiError;
use crate::http::extractors::{SnippetId, ValidForm};
use crate::http::flash::{Flash, SetFlash};
use crate::state::AppState;
use crate::views::TemplateData;

/// GET /snippet/view/{id}
async fn snippet_view(
    State(state): State<AppState>,
    SnippetId(id): SnippetId,
    flash: Flash,
) -> Result<(Flash, Response), ApiError> {
    let snippet = state.snippets().get(id).await?;

    let data = TemplateData::new(flash.message()).with_snippet(snippet);
    let page = state.templates().render("view.html", StatusCode::OK, &data)?;

    Ok((flash, page))
}

/// GET /snippet/create - empty form
async fn snippet_create(State(state): State<AppState>) -> Result<Response, ApiError> {
    let data = TemplateData::new(None).with_form(SnippetCreateForm::default());
    Ok(state.templates().render("create.html", StatusCode::OK, &data)?)
}

/// POST /snippet/create
///
/// Invalid input re-renders the form with 422 and per-field messages.
/// Success redirects to the new snippet with a flash message.
async fn snippet_create_post(
    State(state): State<AppState>,
    ValidForm(mut form): ValidForm<SnippetCreateForm>,
) -> Result<Response, ApiError> {
    if !form.validate() {
        let data = TemplateData::new(None).with_form(form);
        return Ok(state
            .templates()
            .render("create.html", StatusCode::UNPROCESSABLE_ENTITY, &data)?);
    }

    let id = state
        .snippets()
        .create(&form.title, &form.content, form.expires)
        .await?;
    tracing::info!(id, expires_days = form.expires, "snippet created");

    Ok((
        SetFlash::new("Snippet successfully created!"),
        Redirect::to(&format!("/snippet/view/{}", id)),
    )
        .into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/snippet/view/{id}", get(snippet_view))
        .route("/snippet/create", get(snippet_create).post(snippet_create_post))
}
