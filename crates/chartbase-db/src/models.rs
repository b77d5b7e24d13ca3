//! Row models for the catalog database.
//!
//! List-valued columns (`keywords`, `sources`, `urls`) are stored as JSONB;
//! their row structs carry a hand-written `Queryable` impl that decodes the
//! JSON value, as diesel cannot derive that mapping.

use chrono::{DateTime, Utc};
use diesel::{prelude::*, sqlite::Sqlite};
use serde_json::Value;

use chartbase_registry::{ChartVersion, Maintainer, Repo};
use url::Url;

use crate::schema::*;

#[derive(Debug, Clone, Selectable)]
#[diesel(table_name = charts)]
pub struct ChartRow {
    pub id: i32,
    pub chart_id: String,
    pub namespace: String,
    pub name: String,
    pub description: Option<String>,
    pub home: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub sources: Option<Vec<String>>,
    pub repository_id: i32,
}

impl Queryable<charts::SqlType, Sqlite> for ChartRow {
    type Row = (
        i32,
        String,
        String,
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<Value>,
        Option<Value>,
        i32,
    );

    fn build(row: Self::Row) -> diesel::deserialize::Result<Self> {
        Ok(Self {
            id: row.0,
            chart_id: row.1,
            namespace: row.2,
            name: row.3,
            description: row.4,
            home: row.5,
            icon: row.6,
            category: row.7,
            keywords: row.8.map(|v| serde_json::from_value(v).unwrap_or_default()),
            sources: row.9.map(|v| serde_json::from_value(v).unwrap_or_default()),
            repository_id: row.10,
        })
    }
}

#[derive(Debug, Clone, Selectable)]
#[diesel(table_name = chart_versions)]
pub struct ChartVersionRow {
    pub id: i32,
    pub chart_key: i32,
    pub version: String,
    pub app_version: Option<String>,
    pub created: Option<String>,
    pub digest: Option<String>,
    pub urls: Option<Vec<String>>,
}

impl Queryable<chart_versions::SqlType, Sqlite> for ChartVersionRow {
    type Row = (
        i32,
        i32,
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<Value>,
    );

    fn build(row: Self::Row) -> diesel::deserialize::Result<Self> {
        Ok(Self {
            id: row.0,
            chart_key: row.1,
            version: row.2,
            app_version: row.3,
            created: row.4,
            digest: row.5,
            urls: row.6.map(|v| serde_json::from_value(v).unwrap_or_default()),
        })
    }
}

impl From<ChartVersionRow> for ChartVersion {
    fn from(row: ChartVersionRow) -> Self {
        ChartVersion {
            version: row.version,
            app_version: row.app_version,
            created: row
                .created
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            digest: row.digest,
            urls: row.urls.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintainers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MaintainerRow {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

impl From<MaintainerRow> for Maintainer {
    fn from(row: MaintainerRow) -> Self {
        Maintainer {
            name: row.name,
            email: row.email,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = repositories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RepositoryRow {
    pub id: i32,
    pub name: String,
    pub namespace: String,
    pub url: Option<String>,
}

impl From<RepositoryRow> for Repo {
    fn from(row: RepositoryRow) -> Self {
        Repo {
            name: row.name,
            namespace: row.namespace,
            url: row.url.and_then(|s| Url::parse(&s).ok()),
        }
    }
}

#[derive(Default, Insertable)]
#[diesel(table_name = repositories)]
pub struct NewRepository<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub url: Option<&'a str>,
}

#[derive(Default, Insertable)]
#[diesel(table_name = charts)]
pub struct NewChart<'a> {
    pub chart_id: &'a str,
    pub namespace: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub home: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub category: Option<&'a str>,
    pub keywords: Option<Value>,
    pub sources: Option<Value>,
    pub repository_id: i32,
}

#[derive(Default, Insertable)]
#[diesel(table_name = chart_versions)]
pub struct NewChartVersion<'a> {
    pub chart_key: i32,
    pub version: &'a str,
    pub app_version: Option<&'a str>,
    pub created: Option<String>,
    pub digest: Option<&'a str>,
    pub urls: Option<Value>,
}

#[derive(Default, Insertable)]
#[diesel(table_name = maintainers)]
pub struct NewMaintainer<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
}

#[derive(Default, Insertable)]
#[diesel(table_name = chart_maintainers)]
pub struct NewChartMaintainer {
    pub chart_key: i32,
    pub maintainer_id: i32,
}
