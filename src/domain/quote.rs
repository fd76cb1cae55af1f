//! Per-exchange market quotations.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Exchange identifier as reported by the comparison API, e.g. `MAX`, `Rybit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exchange(String);

impl From<&str> for Exchange {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Exchange {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One exchange's market snapshot. Prices are exact decimals; binary floating
/// point never enters the comparison path.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationInfo {
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub update_time: DateTime<Utc>,
}

/// Quotations keyed by exchange. Keys are unique; no ordering is guaranteed.
pub type QuotationMap = HashMap<Exchange, QuotationInfo>;
