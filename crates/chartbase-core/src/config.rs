//! Catalog configuration.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::CatalogError, CatalogResult};

/// Environment variable overriding the configured database path.
pub const DB_PATH_ENV: &str = "CHARTBASE_DB_PATH";

/// Catalog service configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Namespace this catalog instance serves.
    /// Default: "default"
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Path to the catalog database file.
    /// Default: catalog.db in the working directory
    pub db_path: Option<String>,
}

fn default_namespace() -> String {
    "default".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            db_path: None,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let content = fs::read_to_string(&path).map_err(|err| CatalogError::IoError {
            action: format!("reading config file {}", path.as_ref().display()),
            source: err,
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "loaded catalog config");
        Ok(config)
    }

    /// Resolves the database path.
    ///
    /// The `CHARTBASE_DB_PATH` environment variable takes precedence over the
    /// configured value.
    pub fn db_path(&self) -> PathBuf {
        env::var(DB_PATH_ENV)
            .ok()
            .or_else(|| self.db_path.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("catalog.db"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn with_env<F>(vars: Vec<(&str, &str)>, f: F)
    where
        F: FnOnce(),
    {
        let old_vars: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, env::var(k).ok()))
            .collect();

        for (key, value) in &vars {
            env::set_var(key, value);
        }

        f();

        for (key, old_value) in old_vars {
            match old_value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.namespace, "default");
        assert_eq!(config.db_path(), PathBuf::from("catalog.db"));
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "namespace = \"namespace-1\"\ndb_path = \"/var/lib/chartbase/catalog.db\""
        )
        .unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.namespace, "namespace-1");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/var/lib/chartbase/catalog.db")
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CatalogConfig::load("/nonexistent/chartbase.toml").unwrap_err();
        assert!(matches!(err, CatalogError::IoError { .. }));
    }

    #[test]
    #[serial]
    fn test_env_overrides_db_path() {
        let config = CatalogConfig {
            db_path: Some("configured.db".to_string()),
            ..Default::default()
        };

        with_env(vec![(DB_PATH_ENV, "/tmp/override.db")], || {
            assert_eq!(config.db_path(), PathBuf::from("/tmp/override.db"));
        });
        assert_eq!(config.db_path(), PathBuf::from("configured.db"));
    }
}
