use std::fmt;

use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Infrastructure settings read once at startup
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment
    ///
    /// * `DATABASE_URL` - connection string, defaults to a local SQLite file
    /// * `HOST` - bind address, defaults to `0.0.0.0`
    /// * `PORT` - bind port, defaults to `3000`
    pub fn from_env_provider(env_provider: &dyn EnvironmentProvider) -> Result<Self, ApplicationError> {
        let database_url = env_provider
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ApplicationError::InvalidSetting {
                setting_name: "DATABASE_URL".to_string(),
                reason: "Database URL cannot be empty".to_string(),
            });
        }

        let server_host = env_provider
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if server_host.trim().is_empty() {
            return Err(ApplicationError::InvalidSetting {
                setting_name: "HOST".to_string(),
                reason: "Host address cannot be empty".to_string(),
            });
        }

        let server_port = match env_provider.get_var("PORT") {
            Some(value) => parse_port(&value, "PORT")?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL advertised in the OpenAPI document
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.server_port)
    }
}

/// Parse a port number in the range 1-65535
fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
    let port = value.trim().parse::<u16>().map_err(|e| ApplicationError::ParseError {
        setting_name: setting_name.to_string(),
        error: format!("Expected port number (1-65535), got '{}': {}", value, e),
    })?;

    if port == 0 {
        return Err(ApplicationError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "Port number must be between 1 and 65535".to_string(),
        });
    }

    Ok(port)
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite://test.db")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080");

        let settings = BootstrapSettings::from_env_provider(&env).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(&MockEnvironment::empty()).unwrap();

        assert_eq!(settings.database_url(), "sqlite://inventory.db?mode=rwc");
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.public_url(), "http://localhost:3000");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "not-a-port");
        let err = BootstrapSettings::from_env_provider(&env).unwrap_err();
        assert!(matches!(err, ApplicationError::ParseError { ref setting_name, .. } if setting_name == "PORT"));

        let env = MockEnvironment::empty().with_var("PORT", "0");
        let err = BootstrapSettings::from_env_provider(&env).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidSetting { .. }));

        let env = MockEnvironment::empty().with_var("PORT", "70000");
        assert!(BootstrapSettings::from_env_provider(&env).is_err());
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "  ");
        let err = BootstrapSettings::from_env_provider(&env).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid setting 'DATABASE_URL': Database URL cannot be empty"
        );
    }
}
