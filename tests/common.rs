#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use ptax_rs::PtaxClient;
use std::{
    fs, io,
    path::Path,
    sync::{Arc, Mutex},
    time::Duration,
};
use url::Url;

pub const ODATA_BASE: &str = "/olinda/servico/PTAX/versao/v1/odata/";
pub const DAILY_PATH: &str =
    "/olinda/servico/PTAX/versao/v1/odata/CotacaoDolarDia(dataCotacao=@dataCotacao)";
pub const PERIOD_PATH: &str = "/olinda/servico/PTAX/versao/v1/odata/CotacaoDolarPeriodo(dataInicial=@dataInicial,dataFinalCotacao=@dataFinalCotacao)";
pub const SELECT: &str = "cotacaoCompra,cotacaoVenda,dataHoraCotacao";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.json", endpoint, key);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> PtaxClient {
    PtaxClient::builder()
        .base_url(Url::parse(&server.url(ODATA_BASE)).unwrap())
        .build()
        .unwrap()
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> PtaxClient {
    PtaxClient::builder()
        .base_url(Url::parse(&server.url(ODATA_BASE)).unwrap())
        .timeout(timeout)
        .build()
        .unwrap()
}

/// Wraps records in the OData `value` envelope.
pub fn envelope(records: &str) -> String {
    format!(r#"{{"@odata.context":"test","value":[{records}]}}"#)
}

pub fn mock_daily<'a>(server: &'a MockServer, api_date: &str, body: String) -> Mock<'a> {
    let literal = format!("'{api_date}'");
    server.mock(|when, then| {
        when.method(GET)
            .path(DAILY_PATH)
            .query_param("@dataCotacao", literal.as_str())
            .query_param("$format", "json")
            .query_param("$select", SELECT);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_period<'a>(
    server: &'a MockServer,
    api_start: &str,
    api_end: &str,
    body: String,
) -> Mock<'a> {
    let start = format!("'{api_start}'");
    let end = format!("'{api_end}'");
    server.mock(|when, then| {
        when.method(GET)
            .path(PERIOD_PATH)
            .query_param("@dataInicial", start.as_str())
            .query_param("@dataFinalCotacao", end.as_str())
            .query_param("$format", "json")
            .query_param("$select", SELECT);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn live_enabled() -> bool {
    std::env::var("PTAX_LIVE").ok().as_deref() == Some("1")
}

/// Log output written by a test-local subscriber.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    pub fn error_lines(&self) -> usize {
        let out = String::from_utf8(self.0.lock().unwrap().clone()).unwrap();
        out.lines().filter(|l| l.contains("ERROR")).count()
    }
}

pub fn capture_logs() -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .finish();
    (captured, tracing::subscriber::set_default(subscriber))
}
