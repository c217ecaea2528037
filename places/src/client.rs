use serde::Deserialize;
use thiserror::Error;

use crate::domain::{GooglePlace, PlaceResult, RestaurantSource};

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// How many results a curated restaurant search contributes.
const RESULTS_PER_SOURCE: usize = 5;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("places api returned status {0}")]
    ApiStatus(String),
}

/// Text search responses carry their own status next to the HTTP one;
/// `ZERO_RESULTS` is a successful empty answer, anything else non-OK is
/// an error.
#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<GooglePlace>,
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: TEXT_SEARCH_URL.to_string(),
        })
    }

    /// Point the client at a different text search endpoint. Test-only
    /// escape hatch for a local stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Raw text search; the caller decides how to filter or label.
    pub async fn text_search(&self, query: &str) -> Result<Vec<GooglePlace>, PlacesError> {
        tracing::debug!(query, "places text search");
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("query", query), ("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?;

        let body: TextSearchResponse = resp.json().await?;
        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(body.results),
            other => Err(PlacesError::ApiStatus(other.to_string())),
        }
    }

    /// Top results for one curated restaurant list near a location,
    /// labeled with the list that produced them.
    pub async fn restaurants(
        &self,
        source: RestaurantSource,
        location: &str,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        let source_label = source.to_string();
        let results = self.text_search(&source.query(location)).await?;
        Ok(results
            .into_iter()
            .take(RESULTS_PER_SOURCE)
            .map(|place| place.into_result(&source_label))
            .collect())
    }

    /// Tourist attractions near a location.
    pub async fn points_of_interest(&self, location: &str) -> Result<Vec<GooglePlace>, PlacesError> {
        self.text_search(&format!("points of interest near {location}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_results_is_a_successful_empty_answer() {
        let body: TextSearchResponse =
            serde_json::from_str(r#"{"status":"ZERO_RESULTS","results":[]}"#).unwrap();
        assert_eq!(body.status, "ZERO_RESULTS");
        assert!(body.results.is_empty());
    }

    #[test]
    fn results_parse_with_missing_optional_fields() {
        let body: TextSearchResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [
                    {"name": "Le Test", "formatted_address": "1 Rue Test, Lyon"},
                    {"name": "Musee", "formatted_address": "Lyon", "place_id": "abc",
                     "types": ["museum", "point_of_interest"], "rating": 4.5}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(body.results.len(), 2);
        assert_eq!(body.results[0].place_id, None);
        assert_eq!(body.results[1].types, ["museum", "point_of_interest"]);

        let labeled = body.results[1].clone().into_result("GooglePlaces");
        assert_eq!(labeled.name, "Musee");
        assert_eq!(labeled.address, "Lyon");
        assert_eq!(labeled.source, "GooglePlaces");
    }
}
