//! Chart lookup operations.

use chartbase_registry::{Chart, ChartRef};

use crate::{catalog::store::ChartStore, error::CatalogError, CatalogResult};

/// Read-only catalog over a chart store.
///
/// The catalog holds nothing but the store handle: every call is a single
/// independent round trip, so one instance can be shared across callers
/// without any locking discipline of its own.
pub struct ChartCatalog<S> {
    store: S,
}

impl<S: ChartStore> ChartCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolves a chart by identifier, with every known version.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ChartNotFound`] if the store has no chart with
    /// this identifier.
    pub fn chart(&self, chart_id: &str) -> CatalogResult<Chart> {
        self.store
            .chart_with_versions(chart_id)?
            .ok_or_else(|| CatalogError::ChartNotFound(chart_id.to_string()))
    }

    /// Resolves a chart by parsed reference.
    pub fn chart_by_ref(&self, chart_ref: &ChartRef) -> CatalogResult<Chart> {
        self.chart(&chart_ref.chart_id())
    }

    /// Resolves a chart narrowed to exactly one version.
    ///
    /// The requested version is matched against the chart's version entries
    /// by exact, case-sensitive string comparison; there is no range or
    /// semver matching. On a match the returned chart is the full record with
    /// its version list replaced by that single entry. Should the list ever
    /// contain duplicate version strings, the first entry in stored order
    /// wins.
    ///
    /// An empty `version` requests no narrowing and returns the chart as
    /// [`Self::chart`] would.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ChartNotFound`] if the store has no chart with
    /// this identifier, and [`CatalogError::ChartVersionNotFound`] if the
    /// chart exists but no version entry matches.
    pub fn chart_version(&self, chart_id: &str, version: &str) -> CatalogResult<Chart> {
        let mut chart = self.chart(chart_id)?;
        if version.is_empty() {
            return Ok(chart);
        }

        let matched = chart.versions.iter().find(|v| v.version == version);
        match matched {
            Some(v) => {
                chart.versions = vec![v.clone()];
                Ok(chart)
            }
            None => Err(CatalogError::ChartVersionNotFound {
                chart_id: chart_id.to_string(),
                version: version.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chartbase_registry::{ChartVersion, Repo};

    use super::*;
    use crate::{catalog::store::SqliteChartStore, database::CatalogDatabase};

    /// Store fake backed by a map, keyed by chart id.
    struct InMemoryStore {
        charts: HashMap<String, Chart>,
    }

    impl InMemoryStore {
        fn seeded(charts: Vec<Chart>) -> Self {
            Self {
                charts: charts.into_iter().map(|c| (c.chart_id.clone(), c)).collect(),
            }
        }
    }

    impl ChartStore for InMemoryStore {
        fn chart_with_versions(&self, chart_id: &str) -> CatalogResult<Option<Chart>> {
            Ok(self.charts.get(chart_id).cloned())
        }
    }

    fn chart_with_versions(chart_id: &str, name: &str, versions: &[&str]) -> Chart {
        Chart {
            chart_id: chart_id.to_string(),
            name: name.to_string(),
            versions: versions
                .iter()
                .map(|v| ChartVersion {
                    version: (*v).to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn catalog_with(charts: Vec<Chart>) -> ChartCatalog<InMemoryStore> {
        ChartCatalog::new(InMemoryStore::seeded(charts))
    }

    #[test]
    fn test_chart_missing_fails_not_found() {
        let catalog = catalog_with(vec![]);

        let err = catalog.chart("doesnt-exist-1").unwrap_err();
        assert!(matches!(err, CatalogError::ChartNotFound(id) if id == "doesnt-exist-1"));
    }

    #[test]
    fn test_chart_returns_seeded_record() {
        let catalog = catalog_with(vec![chart_with_versions(
            "chart-1",
            "my-chart",
            &["1.2.3", "4.5.6"],
        )]);

        let chart = catalog.chart("chart-1").unwrap();
        assert_eq!(chart.name, "my-chart");
        assert_eq!(chart.versions.len(), 2);
    }

    #[test]
    fn test_chart_version_on_missing_chart_fails_not_found() {
        let catalog = catalog_with(vec![]);

        let err = catalog.chart_version("doesnt-exist-1", "1.2.3").unwrap_err();
        assert!(matches!(err, CatalogError::ChartNotFound(_)));
    }

    #[test]
    fn test_chart_version_missing_version_fails_version_not_found() {
        let catalog = catalog_with(vec![chart_with_versions("chart-1", "my-chart", &["1.2.3"])]);

        let err = catalog.chart_version("chart-1", "doesnt-exist").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ChartVersionNotFound { chart_id, version }
                if chart_id == "chart-1" && version == "doesnt-exist"
        ));
    }

    #[test]
    fn test_chart_version_narrows_to_single_entry() {
        let catalog = catalog_with(vec![chart_with_versions(
            "chart-1",
            "my-chart",
            &["1.2.3", "4.5.6"],
        )]);

        let chart = catalog.chart_version("chart-1", "1.2.3").unwrap();
        assert_eq!(chart.versions.len(), 1);
        assert_eq!(chart.versions[0].version, "1.2.3");
        // Everything except the version list is the stored record.
        assert_eq!(chart.name, "my-chart");
        assert_eq!(chart.chart_id, "chart-1");
    }

    #[test]
    fn test_chart_version_matches_exactly() {
        let catalog = catalog_with(vec![chart_with_versions("chart-1", "my-chart", &["1.2.3"])]);

        // No prefix, suffix, or case-insensitive matching.
        assert!(catalog.chart_version("chart-1", "1.2").is_err());
        assert!(catalog.chart_version("chart-1", "1.2.3.4").is_err());
        assert!(catalog.chart_version("chart-1", "V1.2.3").is_err());
    }

    #[test]
    fn test_chart_version_duplicate_takes_first_stored() {
        let mut chart = chart_with_versions("chart-1", "my-chart", &["1.2.3", "1.2.3"]);
        chart.versions[0].digest = Some("first".to_string());
        chart.versions[1].digest = Some("second".to_string());
        let catalog = catalog_with(vec![chart]);

        let narrowed = catalog.chart_version("chart-1", "1.2.3").unwrap();
        assert_eq!(narrowed.versions.len(), 1);
        assert_eq!(narrowed.versions[0].digest.as_deref(), Some("first"));
    }

    #[test]
    fn test_chart_version_empty_version_means_no_narrowing() {
        let catalog = catalog_with(vec![chart_with_versions(
            "chart-1",
            "my-chart",
            &["1.2.3", "4.5.6"],
        )]);

        let chart = catalog.chart_version("chart-1", "").unwrap();
        assert_eq!(chart.versions.len(), 2);
    }

    #[test]
    fn test_repeated_lookups_are_equal() {
        let catalog = catalog_with(vec![chart_with_versions(
            "chart-1",
            "my-chart",
            &["1.2.3", "4.5.6"],
        )]);

        assert_eq!(catalog.chart("chart-1").unwrap(), catalog.chart("chart-1").unwrap());
        assert_eq!(
            catalog.chart_version("chart-1", "4.5.6").unwrap(),
            catalog.chart_version("chart-1", "4.5.6").unwrap()
        );
    }

    #[test]
    fn test_chart_by_ref() {
        let catalog = catalog_with(vec![chart_with_versions(
            "stable/wordpress",
            "wordpress",
            &["1.2.3"],
        )]);

        let chart_ref = ChartRef::try_from("stable/wordpress").unwrap();
        let chart = catalog.chart_by_ref(&chart_ref).unwrap();
        assert_eq!(chart.name, "wordpress");
    }

    // The same contract, driven through the real store.

    fn seeded_sqlite_catalog(namespace: &str) -> ChartCatalog<SqliteChartStore> {
        let db = CatalogDatabase::open_in_memory().unwrap();
        let repo = Repo {
            name: "repo-name".to_string(),
            namespace: "namespace-1".to_string(),
            url: None,
        };
        db.import_charts(
            &[Chart {
                name: "my-chart".to_string(),
                versions: vec![
                    ChartVersion {
                        version: "1.2.3".to_string(),
                        ..Default::default()
                    },
                    ChartVersion {
                        version: "4.5.6".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            &repo,
        )
        .unwrap();

        ChartCatalog::new(SqliteChartStore::new(db, namespace))
    }

    #[test]
    fn test_sqlite_store_lookup() {
        let catalog = seeded_sqlite_catalog("namespace-1");

        let chart = catalog.chart("repo-name/my-chart").unwrap();
        assert_eq!(chart.name, "my-chart");
        assert_eq!(chart.repo.namespace, "namespace-1");

        let narrowed = catalog.chart_version("repo-name/my-chart", "1.2.3").unwrap();
        assert_eq!(narrowed.versions.len(), 1);
        assert_eq!(narrowed.versions[0].version, "1.2.3");

        assert!(matches!(
            catalog.chart_version("repo-name/my-chart", "doesnt-exist"),
            Err(CatalogError::ChartVersionNotFound { .. })
        ));
    }

    #[test]
    fn test_sqlite_store_namespace_isolation() {
        // Seeded under namespace-1, looked up through a store scoped elsewhere.
        let catalog = seeded_sqlite_catalog("namespace-2");

        assert!(matches!(
            catalog.chart("repo-name/my-chart"),
            Err(CatalogError::ChartNotFound(_))
        ));
    }
}
