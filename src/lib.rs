pub mod api;
pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod flatten;
pub mod output;
pub mod record;
pub mod searches;
pub mod stats;

pub use client::{LocatorClient, PlacesApi};
pub use collector::Collector;
pub use record::PlaceRecord;
pub use searches::{Coordinates, SearchSpec};
