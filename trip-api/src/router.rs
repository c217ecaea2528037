use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/config", get(client_config))
        .merge(routes::trips::router())
        .merge(routes::suggestions::router())
        .fallback_service(ServeDir::new("public"))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig {
    google_maps_api_key: String,
}

/// The place-search credential the browser client boots with.
async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        google_maps_api_key: state.maps_api_key.clone(),
    })
}
