use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::PtaxError;

/// One published USD quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quotation {
    /// Buy rate (`cotacaoCompra`), in BRL per USD.
    pub buy_rate: Decimal,
    /// Sell rate (`cotacaoVenda`), in BRL per USD.
    pub sell_rate: Decimal,
    /// When the quotation was published, if the service sent a parseable timestamp.
    pub quoted_at: Option<NaiveDateTime>,
    /// The `dataHoraCotacao` value exactly as received.
    pub quoted_at_raw: Option<String>,
    /// The calendar day that was requested. Only single-date fetches set this.
    pub quotation_date: Option<NaiveDate>,
}

/// An ordered set of [`Quotation`] rows sharing one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuotationTable {
    rows: Vec<Quotation>,
}

impl QuotationTable {
    /// A table with zero rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in table order.
    #[must_use]
    pub fn rows(&self) -> &[Quotation] {
        &self.rows
    }

    /// The first row, if any. For a single-date fetch this is the day's quotation.
    #[must_use]
    pub fn first(&self) -> Option<&Quotation> {
        self.rows.first()
    }

    /// Iterates over the rows in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Quotation> {
        self.rows.iter()
    }

    /// Consumes the table, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Quotation> {
        self.rows
    }
}

impl From<Vec<Quotation>> for QuotationTable {
    fn from(rows: Vec<Quotation>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for QuotationTable {
    type Item = Quotation;
    type IntoIter = std::vec::IntoIter<Quotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuotationTable {
    type Item = &'a Quotation;
    type IntoIter = std::slice::Iter<'a, Quotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// The result of a quotation fetch.
///
/// Fetches never return `Err`; instead the outcome says whether rows were
/// found, the service had nothing for the requested dates, the request
/// failed, or the request could not be built from the given input.
#[derive(Debug)]
pub enum QuotationOutcome {
    /// The service returned at least one quotation.
    Found(QuotationTable),
    /// The request succeeded but no quotation was published (weekends, holidays).
    NoData,
    /// Transport, status, or decoding failure. A malformed single-date
    /// input also lands here, so that fetch always yields a table.
    Failed(PtaxError),
    /// The date range given could not be turned into a request.
    InvalidInput(PtaxError),
}

impl QuotationOutcome {
    /// Whether at least one quotation was returned.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the service answered but had nothing published.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// True for both [`Failed`](Self::Failed) and [`InvalidInput`](Self::InvalidInput).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::InvalidInput(_))
    }

    /// The error behind a failed outcome, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&PtaxError> {
        match self {
            Self::Failed(e) | Self::InvalidInput(e) => Some(e),
            Self::Found(_) | Self::NoData => None,
        }
    }

    /// Collapses the outcome into a table.
    ///
    /// No data and failed requests both yield an empty table. An invalid date
    /// range yields `None`, since no request was ever attempted.
    #[must_use]
    pub fn into_table(self) -> Option<QuotationTable> {
        match self {
            Self::Found(table) => Some(table),
            Self::NoData | Self::Failed(_) => Some(QuotationTable::empty()),
            Self::InvalidInput(_) => None,
        }
    }

    pub(crate) fn from_result(result: Result<QuotationTable, PtaxError>) -> Self {
        match result {
            Ok(table) if table.is_empty() => Self::NoData,
            Ok(table) => Self::Found(table),
            Err(e) if e.is_invalid_input() => Self::InvalidInput(e),
            Err(e) => Self::Failed(e),
        }
    }
}
