use std::fs;
use std::path::Path;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Wire form of the `ll` parameter: longitude first.
    pub fn to_ll(&self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

/// One configured query to run against the places API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSpec {
    pub name: String,
    pub query: String,
    pub coordinates: Coordinates,
}

impl SearchSpec {
    pub fn new(name: &str, query: &str, coordinates: Coordinates) -> Self {
        Self {
            name: name.to_string(),
            query: query.to_string(),
            coordinates,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestLocation {
    pub name: &'static str,
    pub coordinates: Coordinates,
}

pub static TEST_LOCATIONS: &[TestLocation] = &[
    TestLocation {
        name: "Москва, Красная площадь",
        coordinates: Coordinates::new(55.7539, 37.6208),
    },
    TestLocation {
        name: "Санкт-Петербург, Невский проспект",
        coordinates: Coordinates::new(59.9343, 30.3351),
    },
];

pub static DEFAULT_SEARCHES: Lazy<Vec<SearchSpec>> = Lazy::new(|| {
    let moscow = Coordinates::new(55.7558, 37.6173);
    let spb = Coordinates::new(59.9343, 30.3351);
    let kazan = Coordinates::new(55.7963, 49.1088);
    vec![
        SearchSpec::new("Кафе Москва", "кафе", moscow),
        SearchSpec::new("Рестораны Москва", "ресторан", moscow),
        SearchSpec::new("Аптеки Москва", "аптека", moscow),
        SearchSpec::new("Кафе Санкт-Петербург", "кафе", spb),
        SearchSpec::new("Музеи Санкт-Петербург", "музей", spb),
        SearchSpec::new("Кафе Казань", "кафе", kazan),
        SearchSpec::new("Гостиницы Казань", "гостиница", kazan),
    ]
});

/// Reads a JSON array of searches, replacing the built-in list.
pub fn load_searches(path: &Path) -> Result<Vec<SearchSpec>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(format!("Cannot read searches file {}: {}", path.display(), e))
    })?;
    parse_searches(&raw)
}

pub fn parse_searches(raw: &str) -> Result<Vec<SearchSpec>> {
    let searches: Vec<SearchSpec> = serde_json::from_str(raw)?;
    if searches.is_empty() {
        return Err(AppError::ConfigError("Searches file contains no entries".to_string()));
    }
    Ok(searches)
}
