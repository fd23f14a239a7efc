//! Database layer - connection pool, schema and snippet storage
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Expiry is a WHERE clause, rows are never deleted
//! - Absent and expired rows both surface as `StoreError::NoRecord`

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemorySnippetStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::SnippetRepo;
pub use store::{SnippetStore, StoreError};
