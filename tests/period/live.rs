#[tokio::test]
#[ignore]
async fn live_period_smoke() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = ptax_rs::PtaxClient::default();
    let table = client
        .period("2025-01-01", "2025-01-05")
        .try_fetch()
        .await
        .unwrap();

    // 2025-01-01 is a holiday and 04/05 a weekend: only the 2nd and 3rd publish.
    assert!(!table.is_empty());
    assert!(table.iter().all(|q| q.buy_rate > rust_decimal::Decimal::ZERO));
}
