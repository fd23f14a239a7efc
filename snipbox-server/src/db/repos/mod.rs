//! Repository implementations for database access

pub mod snippets;

pub use snippets::SnippetRepo;
