//! Core components of the `ptax-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`PtaxClient`] and its builder.
//! - The primary [`PtaxError`] type.
//! - Date formatting for the OData query parameters.
//! - Internal networking and wire decoding.

/// The main client (`PtaxClient`), builder, and configuration.
pub mod client;
/// Calendar date handling and the `MM-DD-YYYY` API format.
pub mod dates;
/// The primary error type (`PtaxError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "dataframe")]
/// Polars `DataFrame` export.
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::PtaxClient`
pub use client::{PtaxClient, PtaxClientBuilder};
pub use dates::{IntoQuotationDate, format_api_date};
pub use error::PtaxError;
