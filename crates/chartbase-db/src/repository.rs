//! Catalog repository for chart metadata queries and seeding.

use diesel::{dsl::sql, prelude::*, sql_types::Integer};
use serde_json::json;
use tracing::debug;

use chartbase_registry::{Chart, Repo};
use url::Url;

use crate::{
    models::{
        ChartRow, ChartVersionRow, MaintainerRow, NewChart, NewChartMaintainer, NewChartVersion,
        NewMaintainer, NewRepository, RepositoryRow,
    },
    schema::{chart_maintainers, chart_versions, charts, maintainers, repositories},
};

/// Repository for catalog operations.
///
/// All methods are stateless and take the connection explicitly, so callers
/// decide how connections are shared and locked.
pub struct CatalogRepository;

impl CatalogRepository {
    /// Finds a chart row by namespace and chart identifier.
    pub fn find_chart(
        conn: &mut SqliteConnection,
        namespace: &str,
        chart_id: &str,
    ) -> QueryResult<Option<ChartRow>> {
        charts::table
            .filter(charts::namespace.eq(namespace))
            .filter(charts::chart_id.eq(chart_id))
            .select(ChartRow::as_select())
            .first(conn)
            .optional()
    }

    /// Finds a chart and assembles the full record: every version entry in
    /// stored order, maintainers, and the owning repository.
    ///
    /// Returns `Ok(None)` when no chart row matches; that is the store's
    /// "no such row" signal.
    pub fn find_chart_with_versions(
        conn: &mut SqliteConnection,
        namespace: &str,
        chart_id: &str,
    ) -> QueryResult<Option<Chart>> {
        let Some(row) = Self::find_chart(conn, namespace, chart_id)? else {
            return Ok(None);
        };

        let versions = Self::chart_versions(conn, row.id)?;
        let chart_maintainers = Self::chart_maintainers(conn, row.id)?;
        let repository = Self::find_repository(conn, row.repository_id)?;

        Ok(Some(Chart {
            chart_id: row.chart_id,
            name: row.name,
            description: row.description,
            home: row.home,
            icon: row.icon,
            category: row.category,
            keywords: row.keywords.unwrap_or_default(),
            sources: row.sources.unwrap_or_default(),
            maintainers: chart_maintainers.into_iter().map(Into::into).collect(),
            repo: repository.into(),
            versions: versions.into_iter().map(Into::into).collect(),
        }))
    }

    /// Lists chart rows in a namespace, name order.
    pub fn list_charts(
        conn: &mut SqliteConnection,
        namespace: &str,
    ) -> QueryResult<Vec<ChartRow>> {
        charts::table
            .filter(charts::namespace.eq(namespace))
            .order(charts::name.asc())
            .select(ChartRow::as_select())
            .load(conn)
    }

    /// Checks if a chart with the given identifier exists in a namespace.
    pub fn chart_exists(
        conn: &mut SqliteConnection,
        namespace: &str,
        chart_id: &str,
    ) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(
            charts::table
                .filter(charts::namespace.eq(namespace))
                .filter(charts::chart_id.eq(chart_id)),
        ))
        .get_result(conn)
    }

    /// Counts charts in a namespace.
    pub fn count(conn: &mut SqliteConnection, namespace: &str) -> QueryResult<i64> {
        charts::table
            .filter(charts::namespace.eq(namespace))
            .count()
            .get_result(conn)
    }

    /// Version entries for a chart, in stored order.
    fn chart_versions(
        conn: &mut SqliteConnection,
        chart_key: i32,
    ) -> QueryResult<Vec<ChartVersionRow>> {
        chart_versions::table
            .filter(chart_versions::chart_key.eq(chart_key))
            .order(chart_versions::id.asc())
            .select(ChartVersionRow::as_select())
            .load(conn)
    }

    /// Maintainers linked to a chart.
    fn chart_maintainers(
        conn: &mut SqliteConnection,
        chart_key: i32,
    ) -> QueryResult<Vec<MaintainerRow>> {
        maintainers::table
            .inner_join(
                chart_maintainers::table
                    .on(maintainers::id.eq(chart_maintainers::maintainer_id)),
            )
            .filter(chart_maintainers::chart_key.eq(chart_key))
            .select(MaintainerRow::as_select())
            .load(conn)
    }

    fn find_repository(
        conn: &mut SqliteConnection,
        repository_id: i32,
    ) -> QueryResult<RepositoryRow> {
        repositories::table
            .filter(repositories::id.eq(repository_id))
            .select(RepositoryRow::as_select())
            .first(conn)
    }

    /// Seeds charts under a namespace/repo pairing.
    ///
    /// Upserts the repository row, then inserts each chart with its versions
    /// and maintainers. A chart that already exists under the same
    /// `(chart_id, namespace)` is left untouched; use
    /// [`Self::delete_repo_charts`] first for a re-import.
    pub fn import_charts(
        conn: &mut SqliteConnection,
        charts_to_import: &[Chart],
        repo: &Repo,
    ) -> QueryResult<()> {
        conn.transaction(|conn| {
            let repository_id = Self::upsert_repository(conn, repo)?;

            for chart in charts_to_import {
                Self::insert_chart(conn, chart, repo, repository_id)?;
            }
            Ok::<(), diesel::result::Error>(())
        })?;

        debug!(
            repo = %repo.name,
            namespace = %repo.namespace,
            count = charts_to_import.len(),
            "imported charts"
        );
        Ok(())
    }

    /// Deletes every chart a repository seeded into a namespace.
    ///
    /// Version entries and maintainer links go with the charts via cascade.
    pub fn delete_repo_charts(
        conn: &mut SqliteConnection,
        namespace: &str,
        repo_name: &str,
    ) -> QueryResult<usize> {
        let repo_ids = repositories::table
            .filter(repositories::name.eq(repo_name))
            .filter(repositories::namespace.eq(namespace))
            .select(repositories::id);

        diesel::delete(
            charts::table
                .filter(charts::namespace.eq(namespace))
                .filter(charts::repository_id.eq_any(repo_ids)),
        )
        .execute(conn)
    }

    fn upsert_repository(conn: &mut SqliteConnection, repo: &Repo) -> QueryResult<i32> {
        let url = repo.url.as_ref().map(Url::as_str);
        diesel::insert_into(repositories::table)
            .values(&NewRepository {
                name: &repo.name,
                namespace: &repo.namespace,
                url,
            })
            .on_conflict((repositories::name, repositories::namespace))
            .do_update()
            .set(repositories::url.eq(url))
            .execute(conn)?;

        repositories::table
            .filter(repositories::name.eq(&repo.name))
            .filter(repositories::namespace.eq(&repo.namespace))
            .select(repositories::id)
            .first(conn)
    }

    fn insert_chart(
        conn: &mut SqliteConnection,
        chart: &Chart,
        repo: &Repo,
        repository_id: i32,
    ) -> QueryResult<()> {
        let chart_id = if chart.chart_id.is_empty() {
            format!("{}/{}", repo.name, chart.name)
        } else {
            chart.chart_id.clone()
        };

        let new_chart = NewChart {
            chart_id: &chart_id,
            namespace: &repo.namespace,
            name: &chart.name,
            description: chart.description.as_deref(),
            home: chart.home.as_deref(),
            icon: chart.icon.as_deref(),
            category: chart.category.as_deref(),
            keywords: (!chart.keywords.is_empty()).then(|| json!(chart.keywords)),
            sources: (!chart.sources.is_empty()).then(|| json!(chart.sources)),
            repository_id,
        };

        let inserted = diesel::insert_into(charts::table)
            .values(&new_chart)
            .on_conflict((charts::chart_id, charts::namespace))
            .do_nothing()
            .execute(conn)?;

        if inserted == 0 {
            return Ok(());
        }

        let chart_key = Self::last_insert_id(conn)?;

        for version in &chart.versions {
            let new_version = NewChartVersion {
                chart_key,
                version: &version.version,
                app_version: version.app_version.as_deref(),
                created: version.created.map(|dt| dt.to_rfc3339()),
                digest: version.digest.as_deref(),
                urls: (!version.urls.is_empty()).then(|| json!(version.urls)),
            };
            diesel::insert_into(chart_versions::table)
                .values(&new_version)
                .execute(conn)?;
        }

        for maintainer in &chart.maintainers {
            let maintainer_id =
                Self::find_or_create_maintainer(conn, &maintainer.name, maintainer.email.as_deref())?;
            Self::link_maintainer(conn, chart_key, maintainer_id)?;
        }

        Ok(())
    }

    /// Finds or creates a maintainer keyed by name and email.
    fn find_or_create_maintainer(
        conn: &mut SqliteConnection,
        name: &str,
        email: Option<&str>,
    ) -> QueryResult<i32> {
        let mut query = maintainers::table
            .into_boxed()
            .filter(maintainers::name.eq(name));
        query = match email {
            Some(email) => query.filter(maintainers::email.eq(email)),
            None => query.filter(maintainers::email.is_null()),
        };

        let existing: Option<MaintainerRow> = query
            .select(MaintainerRow::as_select())
            .first(conn)
            .optional()?;

        if let Some(m) = existing {
            return Ok(m.id);
        }

        diesel::insert_into(maintainers::table)
            .values(&NewMaintainer { name, email })
            .execute(conn)?;

        Self::last_insert_id(conn)
    }

    /// Links a maintainer to a chart.
    fn link_maintainer(
        conn: &mut SqliteConnection,
        chart_key: i32,
        maintainer_id: i32,
    ) -> QueryResult<usize> {
        diesel::insert_into(chart_maintainers::table)
            .values(&NewChartMaintainer {
                chart_key,
                maintainer_id,
            })
            .on_conflict_do_nothing()
            .execute(conn)
    }

    /// Gets the last inserted row ID.
    fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
        diesel::select(sql::<Integer>("last_insert_rowid()")).get_result(conn)
    }
}
