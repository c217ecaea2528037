use axum::{
    debug_handler,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use trip_engine::TripDocument;

use crate::app_state::AppState;
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getTrips", get(list_trips))
        .route("/getTrip", get(get_trip))
        .route("/saveTrip", post(save_trip))
}

#[instrument(name = "list_trips", skip(state))]
async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.trips.list().await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripQuery {
    trip_name: String,
}

#[instrument(name = "get_trip", skip(state))]
async fn get_trip(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripDocument>, ApiError> {
    Ok(Json(state.trips.load(&query.trip_name).await?))
}

#[derive(Serialize)]
struct SaveResponse {
    message: String,
}

#[instrument(name = "save_trip", skip(state, body))]
#[debug_handler]
async fn save_trip(
    State(state): State<AppState>,
    Json(body): Json<TripDocument>,
) -> Result<Json<SaveResponse>, ApiError> {
    if body.trip_name.trim().is_empty() || body.start_date.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Missing required fields or invalid trip data",
        ));
    }

    // Serialization drops per-day suggestions, so the stored form is
    // clean even when a raw client sends them along.
    state.trips.save(&body).await?;
    Ok(Json(SaveResponse {
        message: "Trip saved successfully".to_string(),
    }))
}
