use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::{
    core::{
        PtaxClient, PtaxError,
        client::{DAILY_FUNCTION, PERIOD_FUNCTION, SELECT_FIELDS},
        dates::{format_api_date, odata_literal, parse_quoted_at},
        net,
        wire::ODataEnvelope,
    },
    quotation::{
        model::{Quotation, QuotationTable},
        wire::QuotationNode,
    },
};

pub(super) async fn fetch_daily(
    client: &PtaxClient,
    date: NaiveDate,
) -> Result<QuotationTable, PtaxError> {
    let mut url = client.endpoint(DAILY_FUNCTION)?;
    url.query_pairs_mut()
        .append_pair("@dataCotacao", &odata_literal(date))
        .append_pair("$format", "json")
        .append_pair("$select", SELECT_FIELDS);

    tracing::info!(date = %format_api_date(date), "fetching daily PTAX quotation");

    let body = net::get_text(client, url).await?;
    let nodes = decode_nodes(&body)?;

    if nodes.is_empty() {
        tracing::info!(date = %format_api_date(date), "no quotation published for this date");
        return Ok(QuotationTable::empty());
    }

    let mut rows: Vec<Quotation> = nodes
        .into_iter()
        .filter_map(|node| match to_quotation(node, Some(date)) {
            Ok(q) => Some(q),
            Err(e) => {
                tracing::warn!(error = %e, "skipping record with unusable rate");
                None
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(PtaxError::Data(format!(
            "no record with usable rates for {}",
            format_api_date(date)
        )));
    }

    latest_first(&mut rows);
    rows.truncate(1);

    if let Some(latest) = rows.first() {
        tracing::debug!(
            buy = %latest.buy_rate,
            sell = %latest.sell_rate,
            quoted_at = ?latest.quoted_at,
            "selected latest quotation of the day"
        );
    }

    Ok(QuotationTable::from(rows))
}

pub(super) async fn fetch_period(
    client: &PtaxClient,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<QuotationTable, PtaxError> {
    if end < start {
        return Err(PtaxError::InvalidDates { start, end });
    }

    let mut url = client.endpoint(PERIOD_FUNCTION)?;
    url.query_pairs_mut()
        .append_pair("@dataInicial", &odata_literal(start))
        .append_pair("@dataFinalCotacao", &odata_literal(end))
        .append_pair("$format", "json")
        .append_pair("$select", SELECT_FIELDS);

    tracing::info!(
        start = %format_api_date(start),
        end = %format_api_date(end),
        "fetching PTAX quotations for period"
    );

    let body = net::get_text(client, url).await?;
    let nodes = decode_nodes(&body)?;

    if nodes.is_empty() {
        tracing::info!(
            start = %format_api_date(start),
            end = %format_api_date(end),
            "no quotations published in this period"
        );
        return Ok(QuotationTable::empty());
    }

    // API order is kept as-is: no sorting, no dedup.
    let rows = nodes
        .into_iter()
        .map(|node| to_quotation(node, None))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), "period quotations decoded");
    Ok(QuotationTable::from(rows))
}

fn decode_nodes(body: &str) -> Result<Vec<QuotationNode>, PtaxError> {
    let envelope: ODataEnvelope<QuotationNode> = serde_json::from_str(body)?;
    Ok(envelope.value)
}

fn to_quotation(
    node: QuotationNode,
    quotation_date: Option<NaiveDate>,
) -> Result<Quotation, PtaxError> {
    let buy_rate = node
        .cotacao_compra
        .as_ref()
        .and_then(|r| r.to_decimal())
        .ok_or_else(|| {
            PtaxError::Data(format!("unusable cotacaoCompra: {:?}", node.cotacao_compra))
        })?;
    let sell_rate = node
        .cotacao_venda
        .as_ref()
        .and_then(|r| r.to_decimal())
        .ok_or_else(|| {
            PtaxError::Data(format!("unusable cotacaoVenda: {:?}", node.cotacao_venda))
        })?;

    let quoted_at = node.data_hora_cotacao.as_deref().and_then(parse_quoted_at);
    if quoted_at.is_none() {
        tracing::warn!(
            raw = ?node.data_hora_cotacao,
            "unparsable dataHoraCotacao, keeping record without timestamp"
        );
    }

    Ok(Quotation {
        buy_rate,
        sell_rate,
        quoted_at,
        quoted_at_raw: node.data_hora_cotacao,
        quotation_date,
    })
}

/// Stable sort, newest `quoted_at` first, missing timestamps last.
fn latest_first(rows: &mut [Quotation]) {
    rows.sort_by(|a, b| match (a.quoted_at, b.quoted_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
