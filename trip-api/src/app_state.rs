use std::time::Duration;

use moka::future::Cache;
use places::{PlacesClient, WikiClient};

use crate::config::Settings;
use crate::domain::DiningResponse;
use crate::repository::TripRepository;

/// Dining aggregations are cached for an hour per location.
const DINING_CACHE_TTL: Duration = Duration::from_secs(3600);
const DINING_CACHE_CAPACITY: u64 = 1_000;

#[derive(Clone)]
pub struct AppState {
    pub maps_api_key: String,
    pub trips: TripRepository,
    pub places: PlacesClient,
    pub wiki: WikiClient,
    pub dining_cache: Cache<String, DiningResponse>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let dining_cache = Cache::builder()
            .max_capacity(DINING_CACHE_CAPACITY)
            .time_to_live(DINING_CACHE_TTL)
            .build();

        Ok(Self {
            maps_api_key: settings.google.maps_api_key.clone(),
            trips: TripRepository::new(settings.storage.trips_dir.clone()),
            places: PlacesClient::new(settings.google.maps_api_key.clone())?,
            wiki: WikiClient::new()?,
            dining_cache,
        })
    }
}
