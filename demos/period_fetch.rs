//! Fetches PTAX quotations for the first days of January 2025 and the latest
//! quotation of a single day.
//!
//! Run with: cargo run --example period_fetch --features tracing-subscriber
//! (set `RUST_LOG=ptax_rs=debug` for request-level detail)

use chrono::NaiveDate;
use ptax_rs::{PtaxClient, QuotationOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ptax_rs=info")),
        )
        .init();

    let client = PtaxClient::default();

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad start date")?;
    let end = NaiveDate::from_ymd_opt(2025, 1, 5).ok_or("bad end date")?;

    println!("=== PTAX {start} ..= {end} ===");
    match client.period(start, end).fetch().await {
        QuotationOutcome::Found(table) => {
            for q in &table {
                println!(
                    "{:<26} buy={:<8} sell={:<8}",
                    q.quoted_at_raw.as_deref().unwrap_or("-"),
                    q.buy_rate,
                    q.sell_rate
                );
            }
        }
        QuotationOutcome::NoData => println!("no quotations published"),
        other => eprintln!("request failed: {:?}", other.error()),
    }

    println!("\n=== PTAX latest of 2025-01-02 ===");
    match client.daily("2025-01-02").fetch().await {
        QuotationOutcome::Found(table) => {
            if let Some(q) = table.first() {
                println!("{:?} buy={} sell={}", q.quoted_at, q.buy_rate, q.sell_rate);
            }
        }
        QuotationOutcome::NoData => println!("no quotation published"),
        other => eprintln!("request failed: {:?}", other.error()),
    }

    Ok(())
}
