//! Chart lookup and version resolution.

pub mod lookup;
pub mod store;

pub use lookup::ChartCatalog;
pub use store::{ChartStore, SqliteChartStore};
