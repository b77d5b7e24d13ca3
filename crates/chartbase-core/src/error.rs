//! Error types for chartbase-core.

use chartbase_db::DbError;
use chartbase_registry::RegistryError;
use miette::Diagnostic;
use thiserror::Error;

/// Core error type for catalog operations.
///
/// The two lookup failures are separate variants on purpose: callers need to
/// distinguish "no such chart" from "chart exists, but not at this version".
#[derive(Error, Diagnostic, Debug)]
pub enum CatalogError {
    #[error("Chart '{0}' not found")]
    #[diagnostic(
        code(chartbase::chart_not_found),
        help("Check the chart id, or seed the catalog for this namespace")
    )]
    ChartNotFound(String),

    #[error("Chart '{chart_id}' has no version '{version}'")]
    #[diagnostic(
        code(chartbase::chart_version_not_found),
        help("Fetch the chart without a version to see what is available")
    )]
    ChartVersionNotFound { chart_id: String, version: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error("Error while {action}")]
    #[diagnostic(code(chartbase::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(chartbase::toml), help("Check your configuration syntax"))]
    TomlError(#[from] toml::de::Error),

    #[error("Thread lock poison error")]
    #[diagnostic(
        code(chartbase::poison),
        help("This is an internal error, please report it")
    )]
    PoisonError,
}
