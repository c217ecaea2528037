use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use places::{is_sight, sanitize_for_wikipedia, PageSummary, PlaceResult};

use crate::app_state::AppState;
use crate::domain::{fetch_restaurants, DiningResponse};
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getDiningSuggestions", get(dining_suggestions))
        .route("/getSiteSuggestions", get(site_suggestions))
        .route("/getLocationHistory", get(location_history))
}

#[derive(Debug, Deserialize)]
struct LocationQuery {
    #[serde(default)]
    location: String,
}

impl LocationQuery {
    fn required(&self) -> Result<&str, ApiError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ApiError::bad_request("Location is required."));
        }
        Ok(location)
    }
}

#[instrument(name = "dining_suggestions", skip(state))]
async fn dining_suggestions(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<DiningResponse>, ApiError> {
    let location = query.required()?.to_string();

    // One aggregation per location per hour; concurrent requests for
    // the same key share a single in-flight fetch.
    let cache_key = location.to_lowercase();
    let places = state.places.clone();
    let response = state
        .dining_cache
        .get_with(cache_key, async move {
            fetch_restaurants(&places, &location).await
        })
        .await;

    Ok(Json(response))
}

#[derive(Serialize)]
struct SitesResponse {
    results: Vec<PlaceResult>,
}

#[instrument(name = "site_suggestions", skip(state))]
async fn site_suggestions(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<SitesResponse>, ApiError> {
    let location = query.required()?;

    let results = state
        .places
        .points_of_interest(location)
        .await?
        .into_iter()
        .filter(is_sight)
        .map(|place| place.into_result("GooglePlaces"))
        .collect();

    Ok(Json(SitesResponse { results }))
}

#[instrument(name = "location_history", skip(state))]
async fn location_history(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<PageSummary>, ApiError> {
    let location = query.required()?;

    let term = sanitize_for_wikipedia(location);
    let Some(title) = state.wiki.search_title(&term).await? else {
        return Err(ApiError::not_found(format!(
            "No article found for {location}"
        )));
    };

    Ok(Json(state.wiki.page_summary(&title).await?))
}
