//! Chart and repository metadata structures.
//!
//! This module defines the [`Chart`] record as it is exchanged with the
//! catalog store, along with its version entries and maintainers. The serde
//! shapes are lenient where repository indexes are sloppy in practice: empty
//! strings collapse to `None`, and list fields default to empty.
//!
//! A chart's `versions` list preserves storage order. Nothing here sorts or
//! deduplicates versions; selection by version string is the lookup layer's
//! concern.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

fn empty_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Chart maintainer information.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Maintainer {
    pub name: String,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub email: Option<String>,
}

impl fmt::Display for Maintainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} ({})", self.name, email),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A single released version of a chart.
///
/// Multiple entries may exist per chart. Version strings are expected to be
/// unique within a chart's version list, but that is a producer-side
/// convention and is not enforced here.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartVersion {
    pub version: String,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub app_version: Option<String>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub digest: Option<String>,

    #[serde(default)]
    pub urls: Vec<String>,
}

/// A repository grouping, scoped to a namespace.
///
/// Repositories partition the stored charts: the same chart identifier may be
/// seeded under different namespaces without collision.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Repo {
    pub name: String,
    pub namespace: String,

    #[serde(default)]
    pub url: Option<Url>,
}

/// A package chart with its known versions.
///
/// `chart_id` is unique within a namespace and conventionally takes the
/// `repo-name/chart-name` form (see [`crate::ChartRef`]).
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Chart {
    #[serde(default)]
    pub chart_id: String,

    pub name: String,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub home: Option<String>,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub icon: Option<String>,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub maintainers: Vec<Maintainer>,

    #[serde(default)]
    pub repo: Repo,

    #[serde(default)]
    pub versions: Vec<ChartVersion>,
}
