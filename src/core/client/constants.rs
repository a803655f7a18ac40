//! Centralized constants for default endpoints and request settings.

/// Identifies the crate to the BCB service.
pub(crate) const USER_AGENT: &str = concat!("ptax-rs/", env!("CARGO_PKG_VERSION"));

/// Olinda OData base for the PTAX service (function segments are appended).
pub(crate) const DEFAULT_BASE_URL: &str =
    "https://olinda.bcb.gov.br/olinda/servico/PTAX/versao/v1/odata/";

/// Overall request timeout applied when the builder is not given one.
pub(crate) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Single-day dollar quotation function segment.
pub(crate) const DAILY_FUNCTION: &str = "CotacaoDolarDia(dataCotacao=@dataCotacao)";

/// Date-range dollar quotation function segment.
pub(crate) const PERIOD_FUNCTION: &str =
    "CotacaoDolarPeriodo(dataInicial=@dataInicial,dataFinalCotacao=@dataFinalCotacao)";

/// Fields requested through `$select`; everything else the service offers is dropped.
pub(crate) const SELECT_FIELDS: &str = "cotacaoCompra,cotacaoVenda,dataHoraCotacao";
