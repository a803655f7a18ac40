//! ptax-rs: client for the Banco Central do Brasil PTAX dollar quotations.
//!
//! Two operations are offered: the latest quotation of a single day
//! ([`DailyQuotationBuilder`]) and every quotation in an inclusive date range
//! ([`PeriodQuotationBuilder`]). Both return a [`QuotationOutcome`] instead of
//! an error, so callers can tell "nothing published" from "request failed"
//! without inspecting logs.
//!
//! ```no_run
//! # use ptax_rs::PtaxClient;
//! # #[tokio::main]
//! # async fn main() {
//! let client = PtaxClient::default();
//! let table = client
//!     .period("2025-01-01", "2025-01-05")
//!     .fetch()
//!     .await
//!     .into_table()
//!     .unwrap_or_default();
//! for q in &table {
//!     println!("{:?} buy={} sell={}", q.quoted_at, q.buy_rate, q.sell_rate);
//! }
//! # }
//! ```

pub mod core;
pub mod quotation;

pub use crate::core::{IntoQuotationDate, PtaxClient, PtaxClientBuilder, PtaxError, format_api_date};
pub use quotation::{
    DailyQuotationBuilder, PeriodQuotationBuilder, Quotation, QuotationOutcome, QuotationTable,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
