//! Data bag handed to templates

use chrono::{Datelike, Utc};
use serde::Serialize;
use snipbox_core::{Snippet, SnippetCreateForm};

/// Everything a page template may read.
///
/// Every key is always present in the template context (`null` or an empty
/// list when unused) so templates can test them with `{% if %}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateData {
    pub current_year: i32,
    pub snippet: Option<Snippet>,
    pub snippets: Vec<Snippet>,
    pub form: Option<SnippetCreateForm>,
    pub flash: Option<String>,
}

impl TemplateData {
    /// Fresh data bag for one render, carrying the flash message already
    /// taken from the request.
    pub fn new(flash: Option<String>) -> Self {
        Self {
            current_year: Utc::now().year(),
            flash,
            ..Self::default()
        }
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.snippets = snippets;
        self
    }

    pub fn with_form(mut self, form: SnippetCreateForm) -> Self {
        self.form = Some(form);
        self
    }
}
