//! Core chart-catalog service.
//!
//! This crate resolves charts out of a seeded catalog store: a chart by
//! identifier with every known version, or narrowed to exactly one requested
//! version. See [`catalog::ChartCatalog`] for the lookup operations and
//! [`catalog::ChartStore`] for the store contract they run against.

use error::CatalogError;

pub mod catalog;
pub mod config;
pub mod database;
pub mod error;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
