mod api;
mod model;
mod wire;

pub use model::{Quotation, QuotationOutcome, QuotationTable};

use chrono::NaiveDate;

use crate::core::{
    PtaxClient, PtaxError,
    dates::{INPUT_DATE_FORMAT, IntoQuotationDate},
};

/// A builder for fetching the PTAX dollar quotation of one calendar day.
///
/// The service may publish several quotations for a day (opening, intermediate
/// and closing bulletins); only the most recent one is kept.
///
/// # Example
///
/// ```no_run
/// # use ptax_rs::{DailyQuotationBuilder, PtaxClient, QuotationOutcome};
/// # #[tokio::main]
/// # async fn main() {
/// let client = PtaxClient::default();
/// match DailyQuotationBuilder::new(&client, "2025-01-02").fetch().await {
///     QuotationOutcome::Found(table) => println!("{:?}", table.first()),
///     QuotationOutcome::NoData => println!("nothing published"),
///     other => eprintln!("failed: {:?}", other.error()),
/// }
/// # }
/// ```
pub struct DailyQuotationBuilder {
    client: PtaxClient,
    date: Result<NaiveDate, PtaxError>,
}

impl DailyQuotationBuilder {
    /// Creates a new `DailyQuotationBuilder` for a given date.
    pub fn new<D: IntoQuotationDate>(client: &PtaxClient, date: D) -> Self {
        Self {
            client: client.clone(),
            date: date.into_quotation_date(),
        }
    }

    /// Executes the request, returning the error instead of folding it into an outcome.
    ///
    /// An empty table means the service had no quotation for the date.
    ///
    /// # Errors
    ///
    /// Returns a `PtaxError` if the date is malformed, the request fails or
    /// times out, the service answers with a non-2xx status, or the body
    /// cannot be decoded.
    #[tracing::instrument(name = "ptax.daily", skip(self))]
    pub async fn try_fetch(self) -> Result<QuotationTable, PtaxError> {
        let date = self.date?;
        api::fetch_daily(&self.client, date).await
    }

    /// Executes the request. Never fails; see [`QuotationOutcome`].
    ///
    /// A malformed date is reported as [`QuotationOutcome::Failed`], so a
    /// single-date fetch always collapses into a table.
    pub async fn fetch(self) -> QuotationOutcome {
        let requested = match &self.date {
            Ok(d) => d.to_string(),
            Err(_) => String::from("<invalid>"),
        };
        let outcome = match self.try_fetch().await {
            Err(e) if e.is_invalid_input() => QuotationOutcome::Failed(e),
            result => QuotationOutcome::from_result(result),
        };
        match &outcome {
            QuotationOutcome::Failed(e) if e.is_invalid_input() => {
                tracing::error!(error = %e, expected = INPUT_DATE_FORMAT, "invalid date format");
            }
            QuotationOutcome::Failed(e) => {
                tracing::error!(date = %requested, error = %e, "failed to fetch PTAX quotation");
            }
            _ => {}
        }
        outcome
    }
}

/// A builder for fetching every PTAX dollar quotation between two dates, inclusive.
///
/// Rows come back in the order the service returns them, one per published
/// quotation. Unlike [`DailyQuotationBuilder`] nothing is sorted or dropped.
pub struct PeriodQuotationBuilder {
    client: PtaxClient,
    start: Result<NaiveDate, PtaxError>,
    end: Result<NaiveDate, PtaxError>,
}

impl PeriodQuotationBuilder {
    /// Creates a new `PeriodQuotationBuilder` covering `start..=end`.
    pub fn new<S, E>(client: &PtaxClient, start: S, end: E) -> Self
    where
        S: IntoQuotationDate,
        E: IntoQuotationDate,
    {
        Self {
            client: client.clone(),
            start: start.into_quotation_date(),
            end: end.into_quotation_date(),
        }
    }

    /// Executes the request, returning the error instead of folding it into an outcome.
    ///
    /// # Errors
    ///
    /// Returns a `PtaxError` if either date is malformed, `end` is before
    /// `start`, the request fails or times out, the service answers with a
    /// non-2xx status, or the body cannot be decoded.
    #[tracing::instrument(name = "ptax.period", skip(self))]
    pub async fn try_fetch(self) -> Result<QuotationTable, PtaxError> {
        let start = self.start?;
        let end = self.end?;
        api::fetch_period(&self.client, start, end).await
    }

    /// Executes the request. Never fails; see [`QuotationOutcome`].
    pub async fn fetch(self) -> QuotationOutcome {
        let requested = match (&self.start, &self.end) {
            (Ok(s), Ok(e)) => format!("{s}..={e}"),
            _ => String::from("<invalid>"),
        };
        let outcome = QuotationOutcome::from_result(self.try_fetch().await);
        match &outcome {
            QuotationOutcome::Failed(e) => {
                tracing::error!(period = %requested, error = %e, "failed to fetch PTAX quotations");
            }
            QuotationOutcome::InvalidInput(e) => {
                tracing::error!(error = %e, expected = INPUT_DATE_FORMAT, "invalid date range input");
            }
            QuotationOutcome::Found(_) | QuotationOutcome::NoData => {}
        }
        outcome
    }
}
