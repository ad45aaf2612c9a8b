//! Single-flight loader for the remote brand override.
//!
//! # Design
//! - One HTTP GET per process lifetime: concurrent first-time callers await
//!   the same in-flight fetch, and the outcome (present or absent) is
//!   memoized with no invalidation.
//! - Fetch failure is absorbed: it is logged, memoized as absence, and only
//!   the caller that initiated the fetch observes the descriptive error.
//!   Token builds must treat a failed or absent load as "no branding".
//! - The cache is owned state, not a module-level static; [`BrandLoader::reset`]
//!   restores the unloaded state for test isolation.

use reqwest::header;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::endpoint::SettingsEndpoint;
use crate::error::{BrandingError, BrandingResult};
use crate::model::BrandOverride;

/// Settings document wrapper; only the branding field is of interest here.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SettingsDocument {
    brand_theme: Option<BrandOverride>,
}

/// Fetches and memoizes the optional brand override.
#[derive(Debug)]
pub struct BrandLoader {
    endpoint: SettingsEndpoint,
    client: reqwest::Client,
    cache: OnceCell<Option<BrandOverride>>,
}

impl BrandLoader {
    /// Build a loader against an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: SettingsEndpoint) -> BrandingResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(endpoint.timeout())
            .build()
            .map_err(|source| {
                BrandingError::http("settings.client", endpoint.settings_url(), source)
            })?;
        Ok(Self {
            endpoint,
            client,
            cache: OnceCell::new(),
        })
    }

    /// Build a loader from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::InvalidCredentials`] for malformed
    /// credentials or [`BrandingError::Http`] when the client cannot be
    /// constructed.
    pub fn from_env() -> BrandingResult<Self> {
        Self::new(SettingsEndpoint::from_env()?)
    }

    /// Load the brand override, fetching at most once per process lifetime.
    ///
    /// Concurrent first-time callers share a single request. The memoized
    /// outcome is returned immediately on subsequent calls.
    ///
    /// # Errors
    ///
    /// The caller that initiated a failing fetch receives the descriptive
    /// [`BrandingError`]; absence is memoized, so later callers observe
    /// `Ok(None)` and token builds degrade to the default theme.
    pub async fn ensure_loaded(&self) -> BrandingResult<Option<&BrandOverride>> {
        let mut failure = None;
        let cached = self
            .cache
            .get_or_init(|| async {
                match self.fetch_with_retry().await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        warn!(error = %err, "brand override fetch failed, continuing unbranded");
                        failure = Some(err);
                        None
                    }
                }
            })
            .await;
        match failure {
            Some(err) => Err(err),
            None => Ok(cached.as_ref()),
        }
    }

    /// Synchronous view of the memoized override, if a load has completed.
    #[must_use]
    pub fn cached(&self) -> Option<&BrandOverride> {
        self.cache.get().and_then(Option::as_ref)
    }

    /// Forget the memoized outcome so the next call fetches again.
    pub fn reset(&mut self) {
        self.cache = OnceCell::new();
    }

    /// Fetch once, retrying a single time on transport or status failures.
    async fn fetch_with_retry(&self) -> BrandingResult<Option<BrandOverride>> {
        match self.fetch().await {
            Err(err @ (BrandingError::Http { .. } | BrandingError::HttpStatus { .. })) => {
                debug!(error = %err, "retrying brand override fetch");
                self.fetch().await
            }
            outcome => outcome,
        }
    }

    async fn fetch(&self) -> BrandingResult<Option<BrandOverride>> {
        let url = self.endpoint.settings_url();
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, self.endpoint.authorization())
            .send()
            .await
            .map_err(|source| BrandingError::http("settings.fetch", url.clone(), source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrandingError::http_status(
                "settings.fetch",
                url,
                status.as_u16(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|source| BrandingError::http("settings.read", url, source))?;
        let document: SettingsDocument =
            serde_json::from_str(&body).map_err(|source| BrandingError::Decode {
                operation: "settings.decode",
                source,
            })?;

        match document.brand_theme {
            Some(brand) => {
                info!(name = ?brand.name, "brand override loaded");
                Ok(Some(brand))
            }
            None => {
                info!("brand override not present in settings response");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use tinct_test_support::fixtures;

    fn loader_for(server: &MockServer) -> anyhow::Result<BrandLoader> {
        let endpoint = SettingsEndpoint::new(server.base_url(), "admin:admin")?;
        Ok(BrandLoader::new(endpoint)?)
    }

    #[tokio::test]
    async fn loads_and_memoizes_brand_override() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/frontend/settings")
                .header("authorization", "Basic YWRtaW46YWRtaW4=");
            then.status(200).body(fixtures::settings_with_brand());
        });

        let loader = loader_for(&server)?;
        let first = loader.ensure_loaded().await?;
        assert_eq!(
            first.and_then(|brand| brand.name.as_deref()),
            Some("Acme Observability")
        );

        let second = loader.ensure_loaded().await?;
        assert!(second.is_some());
        mock.assert_calls(1);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_first_calls_share_one_request() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/frontend/settings");
            then.status(200).body(fixtures::settings_with_brand());
        });

        let loader = loader_for(&server)?;
        let (first, second) = tokio::join!(loader.ensure_loaded(), loader.ensure_loaded());
        assert!(first?.is_some());
        assert!(second?.is_some());
        mock.assert_calls(1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_branding_field_memoizes_absence() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/frontend/settings");
            then.status(200).body(fixtures::settings_without_brand());
        });

        let loader = loader_for(&server)?;
        assert!(loader.ensure_loaded().await?.is_none());
        assert!(loader.cached().is_none());
        assert!(loader.ensure_loaded().await?.is_none());
        mock.assert_calls(1);
        Ok(())
    }

    #[tokio::test]
    async fn server_error_retries_once_then_degrades() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/frontend/settings");
            then.status(500);
        });

        let loader = loader_for(&server)?;
        let first = loader.ensure_loaded().await;
        assert!(matches!(
            first,
            Err(BrandingError::HttpStatus { status: 500, .. })
        ));
        mock.assert_calls(2);

        // Failure is memoized as absence: no further requests are issued.
        assert!(loader.ensure_loaded().await?.is_none());
        assert!(loader.cached().is_none());
        mock.assert_calls(2);
        Ok(())
    }

    #[tokio::test]
    async fn reset_allows_a_fresh_fetch() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/frontend/settings");
            then.status(200).body(fixtures::settings_with_brand());
        });

        let mut loader = loader_for(&server)?;
        assert!(loader.ensure_loaded().await?.is_some());
        loader.reset();
        assert!(loader.cached().is_none());
        assert!(loader.ensure_loaded().await?.is_some());
        mock.assert_calls(2);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_body_is_a_decode_error() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/frontend/settings");
            then.status(200).body("not json");
        });

        let loader = loader_for(&server)?;
        let outcome = loader.ensure_loaded().await;
        assert!(matches!(outcome, Err(BrandingError::Decode { .. })));
        Ok(())
    }
}
