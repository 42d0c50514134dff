//! The HTTP client for the citation-resolution service.

use crate::error::{MetadataError, Result};
use crate::location::{Doi, Location, DEFAULT_RESOLVER};
use crate::status::interpret;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for DOI content negotiation.
///
/// Holds no mutable state: nothing is cached and nothing is retried, so every
/// call issues fresh requests and can safely be repeated.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> doi_metadata::error::Result<()> {
/// let client = doi_metadata::DoiClient::new()?;
/// let doi = client.locate("10.18637/jss.v048.i02")?;
/// let record = client.resolve(&doi).await?;
/// println!("{:?} ({:?})", record.author(), record.year());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DoiClient {
    pub(crate) http: Client,
    pub(crate) resolver: String,
    timeout: Duration,
    mailto: Option<String>,
}

impl DoiClient {
    /// Create a client with the default resolver and timeout.
    pub fn new() -> Result<Self> {
        Self::build(DEFAULT_RESOLVER.to_string(), DEFAULT_TIMEOUT, None)
    }

    /// Create a client configured from the environment.
    ///
    /// Reads `DOI_RESOLVER_URL`, `DOI_TIMEOUT_SECS` and `DOI_MAILTO`; unset
    /// or empty variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::config_from(
            std::env::var("DOI_RESOLVER_URL").ok(),
            std::env::var("DOI_TIMEOUT_SECS").ok(),
            std::env::var("DOI_MAILTO").ok(),
        )
    }

    /// Build a client from raw configuration values as found in the
    /// environment.
    fn config_from(
        resolver: Option<String>,
        timeout: Option<String>,
        mailto: Option<String>,
    ) -> Result<Self> {
        let resolver = match resolver.filter(|r| !r.is_empty()) {
            Some(r) => {
                url::Url::parse(&r)
                    .map_err(|e| MetadataError::Config(format!("DOI_RESOLVER_URL: {}", e)))?;
                r
            }
            None => DEFAULT_RESOLVER.to_string(),
        };

        let timeout = match timeout.filter(|t| !t.is_empty()) {
            Some(t) => t
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| MetadataError::Config(format!("DOI_TIMEOUT_SECS: {}", e)))?,
            None => DEFAULT_TIMEOUT,
        };

        let mailto = mailto.filter(|m| !m.is_empty());

        Self::build(resolver, timeout, mailto)
    }

    fn build(resolver: String, timeout: Duration, mailto: Option<String>) -> Result<Self> {
        let user_agent = match &mailto {
            Some(m) => format!("doi-metadata/{} (mailto:{})", env!("CARGO_PKG_VERSION"), m),
            None => format!("doi-metadata/{}", env!("CARGO_PKG_VERSION")),
        };

        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| MetadataError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            resolver,
            timeout,
            mailto,
        })
    }

    /// Override the resolver base URL used by [`DoiClient::locate`].
    pub fn with_resolver(mut self, resolver: impl Into<String>) -> Self {
        self.resolver = resolver.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        Self::build(self.resolver, timeout, self.mailto)
    }

    /// Identify requests with a contact address (polite-pool convention).
    pub fn with_mailto(self, mailto: impl Into<String>) -> Result<Self> {
        Self::build(self.resolver, self.timeout, Some(mailto.into()))
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Parse a DOI and bind it to this client's resolver.
    pub fn locate(&self, input: &str) -> Result<Doi> {
        Ok(Doi::parse(input)?.with_resolver(self.resolver.clone()))
    }

    /// GET a location with a single `Accept` header and gate the response
    /// through [`interpret`]; the body is left untouched for the caller.
    pub(crate) async fn negotiate<L: Location + ?Sized>(
        &self,
        location: &L,
        accept: &str,
    ) -> Result<reqwest::Response> {
        let url = location.url();
        debug!(url = %url, accept, "requesting");

        let response = self.http.get(&url).header(ACCEPT, accept).send().await?;

        let status = response.status().as_u16();
        debug!(url = %url, status, "response received");
        interpret(status)?;
        Ok(response)
    }
}
