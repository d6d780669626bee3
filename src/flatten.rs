use chrono::Local;
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::models::{RawPlace, RESULTS_KEY};
use crate::record::{Metric, PlaceRecord};

pub const UNKNOWN: &str = "Неизвестно";
pub const NO_ADDRESS: &str = "Нет адреса";
pub const NO_PHONE: &str = "Нет телефона";
pub const NO_URL: &str = "Нет ссылки";
pub const COORDINATES_SEARCH: &str = "coordinates_search";

const SCRAPED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flattens one search response into records, stamped with the current local time.
pub fn flatten(response: &Map<String, Value>, lat: f64, lon: f64, query: Option<&str>) -> Vec<PlaceRecord> {
    let scraped_at = Local::now().format(SCRAPED_AT_FORMAT).to_string();
    flatten_at(response, lat, lon, query, &scraped_at)
}

pub fn flatten_at(
    response: &Map<String, Value>,
    lat: f64,
    lon: f64,
    query: Option<&str>,
    scraped_at: &str,
) -> Vec<PlaceRecord> {
    let items = match response.get(RESULTS_KEY).and_then(Value::as_array) {
        Some(items) => items,
        None => {
            warn!("No data in response or malformed response");
            return Vec::new();
        }
    };

    let search_query = query.unwrap_or(COORDINATES_SEARCH);
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        match RawPlace::deserialize(item) {
            Ok(place) => records.push(to_record(place, search_query, lat, lon, scraped_at)),
            Err(e) => {
                warn!("Failed to parse object: {}", e);
                continue;
            }
        }
    }

    info!("Objects found: {}", records.len());
    records
}

fn to_record(place: RawPlace, search_query: &str, lat: f64, lon: f64, scraped_at: &str) -> PlaceRecord {
    let (rating, reviews_count) = match place.rating {
        Some(r) => (Metric::from_raw(r.value), Metric::from_raw(r.count)),
        None => (Metric::zero(), Metric::zero()),
    };

    PlaceRecord {
        search_query: search_query.to_string(),
        search_lat: lat,
        search_lon: lon,
        object_name: place.name.unwrap_or_else(|| UNKNOWN.to_string()),
        object_address: place.address.unwrap_or_else(|| NO_ADDRESS.to_string()),
        object_lat: place.lat,
        object_lon: place.lon,
        object_type: place.kinds.unwrap_or_default().join(", "),
        object_category: place.category.unwrap_or_else(|| UNKNOWN.to_string()),
        distance_meters: Metric::from_raw(place.distance),
        rating,
        reviews_count,
        working_hours: render_hours(place.working_hours),
        phone: place.phone.unwrap_or_else(|| NO_PHONE.to_string()),
        url: place.url.unwrap_or_else(|| NO_URL.to_string()),
        scraped_at: scraped_at.to_string(),
    }
}

// Hours come either as plain text or as a structured object.
fn render_hours(hours: Option<Value>) -> String {
    match hours {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}
