//! snipbox-server: storage, views and HTTP routes for snipbox
//!
//! The CLI wires these together; tests use the same pieces with an
//! in-memory store.

pub mod db;
pub mod http;
pub mod state;
pub mod views;

pub use db::{MemorySnippetStore, SnippetRepo, SnippetStore, StoreError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
pub use views::{TemplateCache, TemplateData, ViewError, REQUIRED_PAGES};
