//! Application state shared across handlers

use std::sync::Arc;

use crate::db::SnippetStore;
use crate::views::TemplateCache;

/// Shared application state
///
/// Both members are fixed at startup; handlers only read through them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    snippets: Box<dyn SnippetStore>,
    templates: TemplateCache,
}

impl AppState {
    pub fn new(snippets: impl SnippetStore + 'static, templates: TemplateCache) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                snippets: Box::new(snippets),
                templates,
            }),
        }
    }

    pub fn snippets(&self) -> &dyn SnippetStore {
        self.inner.snippets.as_ref()
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.inner.templates
    }
}
