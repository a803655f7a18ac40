//! Date handling shared by both quotation endpoints.
//!
//! The Olinda OData service expects dates as `MM-DD-YYYY` literals wrapped in
//! single quotes. Everything that ends up in a request URL goes through
//! [`format_api_date`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::core::PtaxError;

/// The textual date format accepted by [`IntoQuotationDate`] for strings.
pub const INPUT_DATE_FORMAT: &str = "YYYY-MM-DD";

const INPUT_DATE_PATTERN: &str = "%Y-%m-%d";
const API_DATE_PATTERN: &str = "%m-%d-%Y";

const QUOTED_AT_PATTERNS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Formats a calendar date the way the PTAX service expects it: `MM-DD-YYYY`.
///
/// ```
/// # use chrono::NaiveDate;
/// let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(ptax_rs::format_api_date(d), "01-05-2025");
/// ```
#[must_use]
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_PATTERN).to_string()
}

/// Wraps [`format_api_date`] in single quotes, as an OData string literal.
#[must_use]
pub fn odata_literal(date: NaiveDate) -> String {
    format!("'{}'", format_api_date(date))
}

/// Anything that can name the calendar day of a quotation request.
///
/// Typed chrono values always succeed. Strings must follow `YYYY-MM-DD`;
/// anything else is reported as [`PtaxError::InvalidDate`].
pub trait IntoQuotationDate {
    /// Resolves `self` into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`PtaxError::InvalidDate`] when a textual input does not parse.
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError>;
}

impl IntoQuotationDate for NaiveDate {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        Ok(self)
    }
}

impl IntoQuotationDate for NaiveDateTime {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> IntoQuotationDate for DateTime<Tz> {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        Ok(self.date_naive())
    }
}

impl IntoQuotationDate for &str {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        NaiveDate::parse_from_str(self.trim(), INPUT_DATE_PATTERN).map_err(|_| {
            PtaxError::InvalidDate {
                input: self.to_string(),
                expected: INPUT_DATE_FORMAT,
            }
        })
    }
}

impl IntoQuotationDate for &String {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        self.as_str().into_quotation_date()
    }
}

impl IntoQuotationDate for String {
    fn into_quotation_date(self) -> Result<NaiveDate, PtaxError> {
        self.as_str().into_quotation_date()
    }
}

/// Parses a `dataHoraCotacao` value without failing the surrounding record.
///
/// The service normally sends `2025-01-02 13:05:27.123`, but ISO `T`-separated,
/// RFC 3339 and bare dates are accepted too. Anything else yields `None`.
pub(crate) fn parse_quoted_at(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for pattern in QUOTED_AT_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(s, INPUT_DATE_PATTERN)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
