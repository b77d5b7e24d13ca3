//! Database connection management.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use chartbase_db::{connection::DbConnection, CatalogRepository};
use chartbase_registry::{Chart, Repo};
use diesel::Connection as DieselConnection;

use crate::{error::CatalogError, CatalogResult};

/// Thread-safe wrapper around the catalog database connection.
///
/// The service layer holds no state of its own; the connection behind this
/// wrapper is the only shared resource, and the mutex is the only lock.
pub struct CatalogDatabase {
    conn: Arc<Mutex<DbConnection>>,
}

impl CatalogDatabase {
    /// Opens the catalog database at `path`, running migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let conn = DbConnection::open(path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an in-memory catalog database.
    pub fn open_in_memory() -> CatalogResult<Self> {
        let conn = DbConnection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Gets a guard on the underlying connection.
    pub fn conn(&self) -> CatalogResult<std::sync::MutexGuard<'_, DbConnection>> {
        self.conn.lock().map_err(|_| CatalogError::PoisonError)
    }

    /// Executes a function with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&mut diesel::SqliteConnection) -> diesel::QueryResult<T>,
    {
        let mut conn = self.conn.lock().map_err(|_| CatalogError::PoisonError)?;
        f(conn.conn()).map_err(|e| CatalogError::Db(e.into()))
    }

    /// Executes a function within a transaction.
    pub fn transaction<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&mut diesel::SqliteConnection) -> diesel::QueryResult<T>,
    {
        let mut conn = self.conn.lock().map_err(|_| CatalogError::PoisonError)?;
        conn.conn()
            .transaction(f)
            .map_err(|e| CatalogError::Db(e.into()))
    }

    /// Seeds charts under a namespace/repo pairing.
    ///
    /// Population-side interface; the lookup contract never writes.
    pub fn import_charts(&self, charts: &[Chart], repo: &Repo) -> CatalogResult<()> {
        self.with_conn(|conn| CatalogRepository::import_charts(conn, charts, repo))
    }
}

impl Clone for CatalogDatabase {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}
