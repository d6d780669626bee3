use std::time::Duration;
use log::info;

use crate::api::params;
use crate::client::PlacesApi;
use crate::flatten::flatten;
use crate::record::PlaceRecord;
use crate::searches::{Coordinates, SearchSpec};

pub const BATCH_RADIUS_M: u32 = 2000;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Runs searches one after another against a `PlacesApi`, pausing between calls.
pub struct Collector<A> {
    api: A,
    delay: Duration,
}

impl<A: PlacesApi> Collector<A> {
    pub fn new(api: A, delay: Duration) -> Self {
        Self { api, delay }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn find_by_query(&self, query: &str, center: Coordinates, radius_m: u32) -> Vec<PlaceRecord> {
        let params = params::query_search(query, center, radius_m);
        let response = self.api.request(&params).await;
        flatten(&response, center.lat, center.lon, Some(query))
    }

    pub async fn find_by_coordinates(&self, center: Coordinates, radius_m: u32, results: u32) -> Vec<PlaceRecord> {
        let params = params::coordinate_search(center, radius_m, results);
        let response = self.api.request(&params).await;
        flatten(&response, center.lat, center.lon, None)
    }

    pub async fn collect(&self, searches: &[SearchSpec]) -> Vec<PlaceRecord> {
        let mut all_records = Vec::new();
        let total = searches.len();

        info!("Starting collection of {} searches", total);

        for (i, search) in searches.iter().enumerate() {
            info!("[{}/{}] Search: {}", i + 1, total, search.name);
            info!(
                "Query '{}' around {}",
                search.query,
                search.coordinates.to_ll()
            );

            let records = self
                .find_by_query(&search.query, search.coordinates, BATCH_RADIUS_M)
                .await;

            if records.is_empty() {
                info!("No objects for '{}', skipping", search.name);
            } else {
                info!("Found: {} objects", records.len());
                all_records.extend(records);
            }

            if i + 1 < total {
                self.pause().await;
            }
        }

        info!("Total objects collected: {}", all_records.len());
        all_records
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
