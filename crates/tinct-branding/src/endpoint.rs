//! Settings-endpoint configuration resolved from the process environment.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};

use crate::error::{BrandingError, BrandingResult};

/// Environment variable naming the settings service base URL.
pub const ENV_SETTINGS_URL: &str = "TINCT_SETTINGS_URL";
/// Environment variable carrying `user:password` Basic-Auth credentials.
pub const ENV_SETTINGS_AUTH: &str = "TINCT_SETTINGS_AUTH";
/// Base URL used when [`ENV_SETTINGS_URL`] is not provided.
pub const DEFAULT_SETTINGS_URL: &str = "http://localhost:3000";
/// Credentials used when [`ENV_SETTINGS_AUTH`] is not provided.
pub const DEFAULT_BASIC_AUTH: &str = "admin:admin";
/// Path of the settings document on the service.
pub const SETTINGS_PATH: &str = "/api/frontend/settings";
/// Upper bound on a settings fetch before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved location and credentials of the settings endpoint.
#[derive(Debug, Clone)]
pub struct SettingsEndpoint {
    base_url: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl SettingsEndpoint {
    /// Build an endpoint from an explicit base URL and `user:password` pair.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::InvalidCredentials`] when the credential
    /// string is not `user:password` shaped or either side is empty.
    pub fn new(base_url: impl Into<String>, credentials: &str) -> BrandingResult<Self> {
        let (username, password) = parse_credentials(credentials)?;
        Ok(Self {
            base_url: base_url.into(),
            username,
            password,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Resolve the endpoint from the environment, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::InvalidCredentials`] when
    /// [`ENV_SETTINGS_AUTH`] is present but malformed.
    pub fn from_env() -> BrandingResult<Self> {
        let base_url =
            std::env::var(ENV_SETTINGS_URL).unwrap_or_else(|_| DEFAULT_SETTINGS_URL.to_string());
        let credentials =
            std::env::var(ENV_SETTINGS_AUTH).unwrap_or_else(|_| DEFAULT_BASIC_AUTH.to_string());
        Self::new(base_url, &credentials)
    }

    /// Replace the fetch timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the settings document.
    #[must_use]
    pub fn settings_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}{SETTINGS_PATH}")
    }

    /// `Authorization` header value for the configured credentials.
    #[must_use]
    pub fn authorization(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        let encoded = general_purpose::STANDARD.encode(pair);
        format!("Basic {encoded}")
    }

    /// Upper bound applied to each settings fetch.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Split a `user:password` pair, rejecting empty components.
fn parse_credentials(credentials: &str) -> BrandingResult<(String, String)> {
    let trimmed = credentials.trim();
    let (username, password) =
        trimmed
            .split_once(':')
            .ok_or(BrandingError::InvalidCredentials {
                reason: "credentials must be provided as user:password",
            })?;
    if username.is_empty() || password.is_empty() {
        return Err(BrandingError::InvalidCredentials {
            reason: "credential components cannot be empty",
        });
    }
    Ok((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_url_joins_path() -> anyhow::Result<()> {
        let endpoint = SettingsEndpoint::new("http://localhost:3000/", "admin:admin")?;
        assert_eq!(
            endpoint.settings_url(),
            "http://localhost:3000/api/frontend/settings"
        );
        Ok(())
    }

    #[test]
    fn authorization_encodes_default_credentials() -> anyhow::Result<()> {
        let endpoint = SettingsEndpoint::new(DEFAULT_SETTINGS_URL, DEFAULT_BASIC_AUTH)?;
        assert_eq!(endpoint.authorization(), "Basic YWRtaW46YWRtaW4=");
        Ok(())
    }

    #[test]
    fn rejects_credentials_without_separator() {
        let result = SettingsEndpoint::new(DEFAULT_SETTINGS_URL, "admin");
        assert!(matches!(
            result,
            Err(BrandingError::InvalidCredentials { .. })
        ));
    }

    #[test]
    fn rejects_empty_credential_components() {
        let result = SettingsEndpoint::new(DEFAULT_SETTINGS_URL, "admin:");
        assert!(matches!(
            result,
            Err(BrandingError::InvalidCredentials { .. })
        ));
    }

    #[test]
    fn timeout_is_adjustable() -> anyhow::Result<()> {
        let endpoint = SettingsEndpoint::new(DEFAULT_SETTINGS_URL, DEFAULT_BASIC_AUTH)?
            .with_timeout(Duration::from_secs(2));
        assert_eq!(endpoint.timeout(), Duration::from_secs(2));
        Ok(())
    }
}
