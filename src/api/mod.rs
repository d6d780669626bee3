//! Wire-level view of the places search API.

pub mod models;
pub mod params;
