//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

use crate::core::PtaxError;
use crate::core::dates::IntoQuotationDate;
use crate::quotation::{DailyQuotationBuilder, PeriodQuotationBuilder};
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub(crate) use constants::{DAILY_FUNCTION, PERIOD_FUNCTION, SELECT_FIELDS};

/// A configured HTTP client bound to a PTAX service base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PtaxClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl Default for PtaxClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl PtaxClient {
    /// Create a new builder.
    pub fn builder() -> PtaxClientBuilder {
        PtaxClientBuilder::default()
    }

    /// Starts a single-date quotation request.
    pub fn daily<D: IntoQuotationDate>(&self, date: D) -> DailyQuotationBuilder {
        DailyQuotationBuilder::new(self, date)
    }

    /// Starts an inclusive date-range quotation request.
    pub fn period<S, E>(&self, start: S, end: E) -> PeriodQuotationBuilder
    where
        S: IntoQuotationDate,
        E: IntoQuotationDate,
    {
        PeriodQuotationBuilder::new(self, start, end)
    }

    /// The base URL every OData function segment is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The overall timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, function: &str) -> Result<Url, PtaxError> {
        Ok(self.base_url.join(function)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PtaxClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PtaxClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the OData base (e.g., `https://olinda.bcb.gov.br/olinda/servico/PTAX/versao/v1/odata/`).
    ///
    /// Function segments are joined relative to this URL, so it should end with `/`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 15 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the
    /// underlying HTTP client fails to initialize.
    pub fn build(self) -> Result<PtaxClient, PtaxError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PtaxClient {
            http,
            base_url,
            timeout,
        })
    }
}
