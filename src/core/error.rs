use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PtaxError {
    /// An error occurred during an HTTP request (connection failure, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON for the expected envelope.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record received from the API was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A date input could not be interpreted as a calendar date.
    #[error("invalid date format: {input:?} (expected {expected})")]
    InvalidDate {
        /// The rejected input, as given by the caller.
        input: String,
        /// A human-readable description of the accepted format.
        expected: &'static str,
    },

    /// A date range whose end falls before its start.
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDates {
        /// The requested first day of the range.
        start: chrono::NaiveDate,
        /// The requested last day of the range.
        end: chrono::NaiveDate,
    },
}

impl PtaxError {
    /// Whether this error describes caller input that made the request impossible
    /// to build, as opposed to a failure talking to the service.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::InvalidDates { .. })
    }

    /// Whether this error was caused by the HTTP client giving up on a slow response.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
