use serde::Serialize;
use serde_json::{Number, Value};

/// A numeric upstream value written exactly as received.
///
/// Numbers keep their JSON form (`10`, `10.0`, `-1`); anything else is kept
/// as text so a row is never lost over an unexpected type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    Number(Number),
    Text(String),
}

impl Metric {
    pub fn zero() -> Self {
        Metric::Number(Number::from(0))
    }

    /// Absent and `null` values become zero.
    pub fn from_raw(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Metric::zero(),
            Some(Value::Number(n)) => Metric::Number(n),
            Some(Value::String(text)) => Metric::Text(text),
            Some(other) => Metric::Text(other.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Metric::Number(n) => n.as_f64(),
            Metric::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Metric::Number(n) => n.as_i64(),
            Metric::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Metric::Text(value.to_string()), Metric::Number)
    }
}

impl From<i64> for Metric {
    fn from(value: i64) -> Self {
        Metric::Number(Number::from(value))
    }
}

/// One flattened output row. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub search_query: String,
    pub search_lat: f64,
    pub search_lon: f64,
    pub object_name: String,
    pub object_address: String,
    pub object_lat: Option<f64>,
    pub object_lon: Option<f64>,
    pub object_type: String,
    pub object_category: String,
    pub distance_meters: Metric,
    pub rating: Metric,
    pub reviews_count: Metric,
    pub working_hours: String,
    pub phone: String,
    pub url: String,
    pub scraped_at: String,
}

impl PlaceRecord {
    pub const FIELDS: [&'static str; 16] = [
        "search_query",
        "search_lat",
        "search_lon",
        "object_name",
        "object_address",
        "object_lat",
        "object_lon",
        "object_type",
        "object_category",
        "distance_meters",
        "rating",
        "reviews_count",
        "working_hours",
        "phone",
        "url",
        "scraped_at",
    ];
}
