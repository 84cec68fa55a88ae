use crate::consts;
use log::warn;
use reqwest::Url;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Read-only parameters the payment link carries
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SessionContext {
    pub order_id: Option<i64>,
    /// Display only, never sent to the reporting endpoint
    pub amount: Option<Decimal>,
    /// Overrides the configured success destination
    pub return_url: Option<String>,
}

impl SessionContext {
    pub fn new(order_id: Option<i64>, amount: Option<Decimal>, return_url: Option<String>) -> Self {
        Self {
            order_id,
            amount,
            return_url,
        }
    }

    /// Parses a payment link such as `https://pay.example/?orderId=42&amount=5000`
    pub fn parse_link(link: &str) -> anyhow::Result<Self> {
        Ok(Self::from_url(&Url::parse(link)?))
    }

    /// Reads `orderId`, `amount` and `returnUrl` from the url query.
    /// Only the first occurrence of each parameter counts. Empty values are
    /// treated as missing and so are values that do not parse.
    pub fn from_url(url: &Url) -> Self {
        let first_value = |name: &str| -> Option<String> {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let order_id = first_value(consts::ORDER_ID_QUERY_PARAM).and_then(|raw| {
            raw.parse::<i64>()
                .inspect_err(|e| warn!("ignoring non integer orderId {raw:?}: {e}"))
                .ok()
        });

        let amount = first_value(consts::AMOUNT_QUERY_PARAM).and_then(|raw| {
            Decimal::from_str(&raw)
                .inspect_err(|e| warn!("ignoring non numeric amount {raw:?}: {e}"))
                .ok()
        });

        Self {
            order_id,
            amount,
            return_url: first_value(consts::RETURN_URL_QUERY_PARAM),
        }
    }

    pub fn has_order(&self) -> bool {
        self.order_id.is_some()
    }
}
