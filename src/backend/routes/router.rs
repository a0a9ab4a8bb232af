/**
 * Router Configuration
 *
 * Combines every route group into a single Axum router:
 * 1. REST routes, nested under `/api`
 * 2. Relay routes (`/app/...`, `/topic/...`)
 * 3. JSON 404 fallback
 *
 * The router carries a CORS layer and a `TraceLayer` that logs each
 * request through `tracing`.
 */

use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::realtime_routes::configure_realtime_routes;
use crate::backend::server::config::ConfigError;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - services and relay hub
/// * `cors_origins` - allowed origins; empty allows any origin
///
/// # Errors
///
/// `ConfigError` when an origin is not a valid header value
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> BackendResult<Router<()>> {
    let router = Router::new().nest("/api", configure_api_routes());
    let router = configure_realtime_routes(router);

    let router = router
        .fallback(route_not_found)
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(router.with_state(app_state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS",
                    value: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn route_not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
