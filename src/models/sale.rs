use std::fmt;

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// RecordId — Opaque record identifier (numeric or textual in the source)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

// ---------------------------------------------------------------------------
// SaleRecord — One product transaction
// ---------------------------------------------------------------------------

/// A single product sale as delivered by the data source.
///
/// Field names follow the source payload so listings can echo records back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, serialize_with = "serialize_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub date_of_sale: String,
}

impl SaleRecord {
    /// Calendar month of `dateOfSale`, in UTC.
    ///
    /// Accepts RFC 3339 timestamps, naive date-times (`T` or space separated,
    /// with or without seconds), plain `YYYY-MM-DD` dates and bare `YYYY-MM`
    /// months. Returns `None` for anything else.
    pub fn sale_month(&self) -> Option<Month> {
        let month = parse_sale_month(self.date_of_sale.trim())?;
        u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok())
    }

    /// The non-empty category label, if any.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Price rendered the way free-text search sees it (`100`, `329.85`).
    pub fn price_text(&self) -> String {
        // -0.0 renders as "0"
        if self.price == 0.0 {
            return "0".to_string();
        }
        self.price.to_string()
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_sale_month(raw: &str) -> Option<u32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).month());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.month());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.month());
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .ok()
        .map(|d| d.month())
}

/// Whole prices go out as integers (`329`, not `329.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
