//! SQLite persistence for the chartbase chart catalog.
//!
//! The catalog database holds namespace-partitioned chart metadata: one row
//! per chart, its version entries in stored order, and maintainers shared
//! through a junction table. Repositories scope the charts they seed to a
//! namespace.
//!
//! Layout:
//!
//! - [`schema`] - diesel table definitions
//! - [`models`] - queryable row structs and insertables
//! - [`repository`] - query operations ([`CatalogRepository`])
//! - [`connection`] - connection management with embedded migrations
//! - [`migration`] - the migration harness

pub mod connection;
pub mod error;
pub mod migration;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::DbConnection;
pub use error::{DbError, Result};
pub use repository::CatalogRepository;
