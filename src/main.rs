use std::net::SocketAddr;
use tracing::info;

use solar_system_api::{
    database, init_tracing, lookup::LookupService, routes, settings::Settings, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting solar system API server");

    let settings = Settings::load()?;
    info!("Environment: {}", settings.app_env);

    // Lazily connected; store outages surface as 500s on /planet
    let store = database::connect(&settings)?;
    let state = AppState::new(LookupService::new(store), &settings.app_env);

    let app = routes::router(state, &settings.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
