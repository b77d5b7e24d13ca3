//! Store capability for chart lookups.

use chartbase_db::CatalogRepository;
use chartbase_registry::Chart;

use crate::{database::CatalogDatabase, CatalogResult};

/// Narrow read-only contract the lookup logic depends on.
///
/// `Ok(None)` is the store's "no such chart" signal and is mapped 1:1 to
/// [`crate::error::CatalogError::ChartNotFound`] by the catalog. Any other
/// failure passes through unchanged.
pub trait ChartStore {
    /// Fetches a chart with every known version, by identifier.
    fn chart_with_versions(&self, chart_id: &str) -> CatalogResult<Option<Chart>>;
}

/// SQLite-backed chart store, scoped to one namespace.
///
/// The namespace is fixed at construction: lookups through this store only
/// see charts seeded under it. Partitioning is the store's job; the catalog
/// on top never mentions namespaces.
pub struct SqliteChartStore {
    db: CatalogDatabase,
    namespace: String,
}

impl SqliteChartStore {
    pub fn new(db: CatalogDatabase, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl ChartStore for SqliteChartStore {
    fn chart_with_versions(&self, chart_id: &str) -> CatalogResult<Option<Chart>> {
        self.db.with_conn(|conn| {
            CatalogRepository::find_chart_with_versions(conn, &self.namespace, chart_id)
        })
    }
}
