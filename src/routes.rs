use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{health, host, planets},
    middleware, models, AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        planets::get_planet,
        host::os_info,
        health::live,
        health::ready,
    ),
    components(
        schemas(
            models::PlanetRecord,
            models::PlanetRequest,
            models::HostInfo,
            models::StatusResponse,
            models::ErrorResponse,
        )
    ),
    tags(
        (name = "planets", description = "Planet fact lookup"),
        (name = "host", description = "Serving host information"),
        (name = "health", description = "Liveness and readiness probes")
    ),
    info(
        title = "Solar System API",
        version = "0.1.0",
        description = "Looks up reference facts about the bodies of the solar system."
    )
)]
pub struct ApiDoc;

/// Build the full application: API routes, OpenAPI docs, and the static
/// homepage served from `static_dir`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let mut app = Router::new()
        .route("/planet", post(planets::get_planet))
        .route("/os", get(host::os_info))
        .route("/live", get(health::live))
        .route("/ready", get(health::ready))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    for header_layer in middleware::security::security_headers() {
        app = app.layer(header_layer);
    }

    app.layer(
        ServiceBuilder::new()
            .layer(axum_middleware::from_fn(middleware::request_id::request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::security::cors_layer())
            .layer(middleware::security::timeout_layer()),
    )
}
