//! Configuration loading
//!
//! Connection strings for the two candidate stores are read once from the
//! environment at startup. Absence or malformation is a fatal startup
//! condition; there is no runtime re-read.

use crate::{Error, Result};

/// Environment variable naming the primary candidate connection string
pub const PRIMARY_URL_VAR: &str = "POSTGRES_URL";

/// Environment variable naming the secondary candidate connection string
pub const SECONDARY_URL_VAR: &str = "DATABASE_URL";

/// Connection strings for the two candidate backing stores
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub primary_url: String,
    pub secondary_url: String,
}

impl DatabaseConfig {
    /// Load both connection strings from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(PRIMARY_URL_VAR).ok(),
            std::env::var(SECONDARY_URL_VAR).ok(),
        )
    }

    /// Build the config from already-looked-up values
    ///
    /// Separated from `from_env` so validation is testable without
    /// touching process environment.
    pub fn from_vars(primary: Option<String>, secondary: Option<String>) -> Result<Self> {
        let primary_url = validate_url(PRIMARY_URL_VAR, primary)?;
        let secondary_url = validate_url(SECONDARY_URL_VAR, secondary)?;

        Ok(Self {
            primary_url,
            secondary_url,
        })
    }
}

/// Require a present, non-empty postgres connection string
fn validate_url(var: &str, value: Option<String>) -> Result<String> {
    let url = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set", var)))?;

    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(Error::Config(format!(
            "{} is not a postgres connection string",
            var
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_urls_present() {
        let config = DatabaseConfig::from_vars(
            Some("postgres://localhost/ledger".to_string()),
            Some("postgresql://db.example.com/ledger".to_string()),
        )
        .unwrap();

        assert_eq!(config.primary_url, "postgres://localhost/ledger");
        assert_eq!(config.secondary_url, "postgresql://db.example.com/ledger");
    }

    #[test]
    fn test_missing_primary_is_fatal() {
        let result =
            DatabaseConfig::from_vars(None, Some("postgres://localhost/ledger".to_string()));

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_secondary_is_fatal() {
        let result =
            DatabaseConfig::from_vars(Some("postgres://localhost/ledger".to_string()), None);

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_url_is_fatal() {
        let result = DatabaseConfig::from_vars(
            Some("   ".to_string()),
            Some("postgres://localhost/ledger".to_string()),
        );

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_non_postgres_scheme_is_fatal() {
        let result = DatabaseConfig::from_vars(
            Some("mysql://localhost/ledger".to_string()),
            Some("postgres://localhost/ledger".to_string()),
        );

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
