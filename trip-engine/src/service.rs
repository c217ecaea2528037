//! Client for the trip service: trip persistence plus the three
//! read-only lookup proxies.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{PlaceRef, TripDocument};

/// How long any one service call may take before it is abandoned and
/// the caller degrades. A slow lookup only ever delays its own
/// suggestions, never other interactions.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(default)]
    pub google_maps_api_key: String,
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ServiceError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ServiceError::Status(resp.status()));
        }
        Ok(resp.json::<T>().await?)
    }

    /// GET /config — the place-search credential for the host widget.
    pub async fn config(&self) -> Result<ServiceConfig, ServiceError> {
        self.get_json("/config", &[]).await
    }

    /// GET /getTrips — identifiers of every saved trip.
    pub async fn trips(&self) -> Result<Vec<String>, ServiceError> {
        self.get_json("/getTrips", &[]).await
    }

    /// GET /getTrip — one full trip document (suggestions come back
    /// absent; they are never persisted).
    pub async fn trip(&self, trip_name: &str) -> Result<TripDocument, ServiceError> {
        self.get_json("/getTrip", &[("tripName", trip_name)]).await
    }

    /// POST /saveTrip — the whole document. Serialization already strips
    /// per-day suggestions, so the body matches the persisted form.
    pub async fn save_trip(&self, doc: &TripDocument) -> Result<(), ServiceError> {
        let resp = self
            .http
            .post(self.url("/saveTrip"))
            .json(doc)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ServiceError::Status(resp.status()));
        }
        Ok(())
    }

    pub async fn dining_suggestions(&self, location: &str) -> Result<Vec<PlaceRef>, ServiceError> {
        #[derive(Deserialize)]
        struct DiningResponse {
            #[serde(default)]
            data: Vec<PlaceRef>,
        }
        let resp: DiningResponse = self
            .get_json("/getDiningSuggestions", &[("location", location)])
            .await?;
        Ok(resp.data)
    }

    pub async fn site_suggestions(&self, location: &str) -> Result<Vec<PlaceRef>, ServiceError> {
        #[derive(Deserialize)]
        struct SitesResponse {
            #[serde(default)]
            results: Vec<PlaceRef>,
        }
        let resp: SitesResponse = self
            .get_json("/getSiteSuggestions", &[("location", location)])
            .await?;
        Ok(resp.results)
    }

    pub async fn location_history(&self, location: &str) -> Result<String, ServiceError> {
        #[derive(Deserialize)]
        struct HistoryResponse {
            #[serde(default)]
            extract: String,
        }
        let resp: HistoryResponse = self
            .get_json("/getLocationHistory", &[("location", location)])
            .await?;
        Ok(resp.extract)
    }
}
