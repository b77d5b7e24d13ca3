//! Error types for chartbase-db.

use miette::Diagnostic;
use thiserror::Error;

/// Database error type for catalog storage operations.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database connection failed: {0}")]
    #[diagnostic(
        code(chartbase_db::connection),
        help("Check if the database file exists and is accessible")
    )]
    ConnectionError(String),

    #[error("Database query failed: {0}")]
    #[diagnostic(
        code(chartbase_db::query),
        help("Re-seed the catalog if the database contents look stale")
    )]
    QueryError(String),

    #[error("Database migration failed: {0}")]
    #[diagnostic(
        code(chartbase_db::migration),
        help("The database schema may be corrupted. Try removing and re-seeding it.")
    )]
    MigrationError(String),

    #[error("Record not found: {0}")]
    #[diagnostic(
        code(chartbase_db::not_found),
        help("Check the identifier, or re-seed the catalog")
    )]
    NotFound(String),

    #[error("Database integrity error: {0}")]
    #[diagnostic(
        code(chartbase_db::integrity),
        help("The database may be corrupted. Try removing and re-seeding it.")
    )]
    IntegrityError(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(chartbase_db::io), help("Check file permissions and disk space"))]
    IoError(#[from] std::io::Error),
}

impl From<diesel::result::Error> for DbError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => DbError::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(_, info) => {
                DbError::QueryError(info.message().to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}

impl From<diesel::result::ConnectionError> for DbError {
    fn from(err: diesel::result::ConnectionError) -> Self {
        DbError::ConnectionError(err.to_string())
    }
}

/// Result type alias for chartbase-db operations.
pub type Result<T> = std::result::Result<T, DbError>;
