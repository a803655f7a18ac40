use serde::Deserialize;

use crate::core::wire::{RawRate, de_opt_string_lenient};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuotationNode {
    pub(crate) cotacao_compra: Option<RawRate>,
    pub(crate) cotacao_venda: Option<RawRate>,
    #[serde(default, deserialize_with = "de_opt_string_lenient")]
    pub(crate) data_hora_cotacao: Option<String>,
}
