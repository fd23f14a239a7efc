//! snipbox-core: domain types shared by the server and the CLI
//!
//! Holds the `Snippet` record, the create-form validation rules and the
//! TOML/env configuration. Nothing in here touches the network or a database.

pub mod config;
pub mod error;
pub mod form;
pub mod snippet;
pub mod validation;

pub use config::{DatabaseConfig, ServerSection, SnipboxConfig, UiConfig};
pub use error::{CoreError, Result};
pub use form::{SnippetCreateForm, PERMITTED_LIFETIMES};
pub use snippet::{Snippet, LATEST_LIMIT};
pub use validation::{FieldErrors, ValidationError};
