//! Error types for the registry crate.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while handling chart metadata.
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("Invalid chart reference: {0}")]
    #[diagnostic(
        code(chartbase_registry::invalid_chart_ref),
        help("Use format: repo-name/chart-name (e.g., 'stable/wordpress')")
    )]
    InvalidChartRef(String),
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
