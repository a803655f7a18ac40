use chrono::NaiveDate;
use polars::prelude::*;
use rust_decimal::prelude::ToPrimitive;

use crate::quotation::{Quotation, QuotationTable};

/// Trait for converting quotation structures into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Returns a `PolarsError` if a column cannot be built or cast.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    ///
    /// # Errors
    ///
    /// Returns a `PolarsError` if a column cannot be built or cast.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized;

    /// Returns the column names and types produced by [`to_dataframe`](Self::to_dataframe).
    fn schema() -> Vec<(&'static str, DataType)>
    where
        Self: Sized;
}

impl ToDataFrame for QuotationTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        quotations_frame(self.rows())
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        quotations_frame(&[])
    }

    fn schema() -> Vec<(&'static str, DataType)> {
        vec![
            ("buy_rate", DataType::Float64),
            ("sell_rate", DataType::Float64),
            (
                "quoted_at",
                DataType::Datetime(TimeUnit::Milliseconds, None),
            ),
            ("quotation_date", DataType::Date),
        ]
    }
}

fn quotations_frame(rows: &[Quotation]) -> PolarsResult<DataFrame> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();

    let buy: Vec<Option<f64>> = rows.iter().map(|q| q.buy_rate.to_f64()).collect();
    let sell: Vec<Option<f64>> = rows.iter().map(|q| q.sell_rate.to_f64()).collect();
    let quoted_at: Vec<Option<i64>> = rows
        .iter()
        .map(|q| q.quoted_at.map(|dt| dt.and_utc().timestamp_millis()))
        .collect();
    #[allow(clippy::cast_possible_truncation)]
    let quotation_date: Vec<Option<i32>> = rows
        .iter()
        .map(|q| q.quotation_date.map(|d| (d - epoch).num_days() as i32))
        .collect();

    let schema = QuotationTable::schema();
    let columns = vec![
        Series::new(schema[0].0.into(), buy).into_column(),
        Series::new(schema[1].0.into(), sell).into_column(),
        Series::new(schema[2].0.into(), quoted_at)
            .cast(&schema[2].1)?
            .into_column(),
        Series::new(schema[3].0.into(), quotation_date)
            .cast(&schema[3].1)?
            .into_column(),
    ];

    DataFrame::new(columns)
}
