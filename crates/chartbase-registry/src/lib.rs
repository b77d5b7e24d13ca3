//! Chart metadata models for the chartbase catalog.
//!
//! This crate defines the domain types shared across the catalog: charts,
//! chart versions, maintainers and the repositories that scope them. It also
//! provides [`ChartRef`], the parsed form of a `repo-name/chart-name` chart
//! identifier.
//!
//! The types here are plain data. Persistence lives in `chartbase-db` and the
//! lookup logic in `chartbase-core`; both consume these models.

pub mod chart;
pub mod error;
pub mod reference;

pub use chart::{Chart, ChartVersion, Maintainer, Repo};
pub use error::{RegistryError, Result};
pub use reference::ChartRef;
