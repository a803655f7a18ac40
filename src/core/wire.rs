use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// The `{"@odata.context": ..., "value": [...]}` wrapper every Olinda function returns.
#[derive(Deserialize)]
pub(crate) struct ODataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub(crate) value: Vec<T>,
}

/// A rate as sent by the service: usually a JSON number, occasionally a string.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub(crate) enum RawRate {
    Num(serde_json::Number),
    Str(String),
}

impl RawRate {
    /// Converts to a decimal using the shortest textual form of the value,
    /// so `5.1234` stays `5.1234` instead of picking up binary noise.
    pub(crate) fn to_decimal(&self) -> Option<Decimal> {
        let text = match self {
            Self::Num(n) => n.to_string(),
            Self::Str(s) => s.trim().replace(',', "."),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

pub(crate) fn de_opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Timestamps should be strings, but a stray number must not sink the whole payload.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyScalar {
        Str(String),
        Num(serde_json::Number),
        Other(serde_json::Value),
    }

    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Str(s)) => Some(s),
        Some(AnyScalar::Num(n)) => Some(n.to_string()),
        Some(AnyScalar::Other(_)) | None => None,
    })
}
