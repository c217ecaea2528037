mod app_state;
mod config;
mod domain;
mod repository;
mod router;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./trip-api/.env.local").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let settings = config::read_config()?;
    tokio::fs::create_dir_all(&settings.storage.trips_dir).await?;

    let app_state = app_state::AppState::new(&settings)?;
    let app = router::create(app_state);

    let address = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        "trip planner service listening on {address}, trips stored in {}",
        settings.storage.trips_dir.display()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
