//! Chart identifier parsing.

use std::fmt;

use crate::error::RegistryError;

/// Parsed chart identifier.
///
/// Chart identifiers take the form `repo-name/chart-name`, e.g.
/// `stable/wordpress`. Both components must be non-empty and the identifier
/// must contain exactly one separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRef {
    pub repo: String,
    pub name: String,
}

impl ChartRef {
    /// Returns the canonical `repo-name/chart-name` identifier.
    pub fn chart_id(&self) -> String {
        format!("{}/{}", self.repo, self.name)
    }
}

impl TryFrom<&str> for ChartRef {
    type Error = RegistryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RegistryError::InvalidChartRef(
                "chart reference can't be empty".into(),
            ));
        }

        let (repo, name) = value.split_once('/').ok_or_else(|| {
            RegistryError::InvalidChartRef(format!("missing repo component in '{value}'"))
        })?;

        if repo.is_empty() || name.is_empty() {
            return Err(RegistryError::InvalidChartRef(format!(
                "empty component in '{value}'"
            )));
        }
        if name.contains('/') {
            return Err(RegistryError::InvalidChartRef(format!(
                "too many components in '{value}'"
            )));
        }

        Ok(ChartRef {
            repo: repo.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ChartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.repo, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_repo_and_name() {
        let chart_ref = ChartRef::try_from("stable/wordpress").unwrap();
        assert_eq!(chart_ref.repo, "stable");
        assert_eq!(chart_ref.name, "wordpress");
        assert_eq!(chart_ref.chart_id(), "stable/wordpress");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let chart_ref = ChartRef::try_from("  bitnami/redis ").unwrap();
        assert_eq!(chart_ref.repo, "bitnami");
        assert_eq!(chart_ref.name, "redis");
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(ChartRef::try_from("").is_err());
        assert!(ChartRef::try_from("   ").is_err());
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert!(ChartRef::try_from("wordpress").is_err());
    }

    #[test]
    fn test_rejects_empty_components() {
        assert!(ChartRef::try_from("/wordpress").is_err());
        assert!(ChartRef::try_from("stable/").is_err());
        assert!(ChartRef::try_from("/").is_err());
    }

    #[test]
    fn test_rejects_extra_components() {
        assert!(ChartRef::try_from("stable/wordpress/extra").is_err());
    }
}
