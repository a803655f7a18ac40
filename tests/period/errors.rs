use httpmock::Method::GET;
use ptax_rs::{PtaxError, QuotationOutcome};
use std::time::Duration;

use crate::common::{PERIOD_PATH, client_for, client_with_timeout, envelope, setup_server};

#[tokio::test]
async fn period_unparsable_start_is_invalid_input_not_an_empty_table() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PERIOD_PATH);
        then.status(200).body(envelope(""));
    });
    let client = client_for(&server);

    let outcome = client.period("2025-13-01", "2025-01-05").fetch().await;
    mock.assert_hits(0);

    match &outcome {
        QuotationOutcome::InvalidInput(PtaxError::InvalidDate { input, expected }) => {
            assert_eq!(input, "2025-13-01");
            assert_eq!(*expected, "YYYY-MM-DD");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(outcome.into_table().is_none());
}

#[tokio::test]
async fn period_unparsable_end_is_invalid_input() {
    let server = setup_server();
    let client = client_for(&server);

    let outcome = client.period("2025-01-01", "yesterday").fetch().await;

    assert!(matches!(outcome, QuotationOutcome::InvalidInput(_)));
    assert!(outcome.into_table().is_none());
}

#[tokio::test]
async fn period_end_before_start_is_rejected() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PERIOD_PATH);
        then.status(200).body(envelope(""));
    });
    let client = client_for(&server);

    let err = client
        .period("2025-01-05", "2025-01-01")
        .try_fetch()
        .await
        .unwrap_err();
    mock.assert_hits(0);

    assert!(err.is_invalid_input());
    assert!(matches!(err, PtaxError::InvalidDates { .. }));
}

#[tokio::test]
async fn period_non_2xx_yields_empty_table() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PERIOD_PATH);
        then.status(404).body("not found");
    });
    let client = client_for(&server);

    let outcome = client.period("2025-01-01", "2025-01-05").fetch().await;
    mock.assert();

    assert!(matches!(
        outcome,
        QuotationOutcome::Failed(PtaxError::Status { status: 404, .. })
    ));
    assert_eq!(outcome.into_table().map(|t| t.is_empty()), Some(true));
}

#[tokio::test]
async fn period_timeout_yields_empty_table() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(PERIOD_PATH);
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(envelope(""));
    });
    let client = client_with_timeout(&server, Duration::from_millis(50));

    let outcome = client.period("2025-01-01", "2025-01-05").fetch().await;

    assert!(outcome.error().is_some_and(PtaxError::is_timeout));
    assert_eq!(outcome.into_table().map(|t| t.len()), Some(0));
}
