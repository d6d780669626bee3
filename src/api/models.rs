use serde::Deserialize;
use serde_json::Value;

/// Key of the result list in a search response.
pub const RESULTS_KEY: &str = "results";

/// One place object as returned upstream. Every field is optional;
/// defaults are applied when flattening.
#[derive(Debug, Default, Deserialize)]
pub struct RawPlace {
    pub name: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(rename = "type")]
    pub kinds: Option<Vec<String>>,
    pub category: Option<String>,
    pub distance: Option<Value>,
    pub rating: Option<RawRating>,
    pub working_hours: Option<Value>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRating {
    pub value: Option<Value>,
    pub count: Option<Value>,
}
