/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (auth, to-dos)
 * 2. Page routes (login, registration, to-do pages)
 * 3. Company routes (internal token)
 * 4. Static files under `/static`
 * 5. Fallback handler (404)
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_api_routes, configure_company_routes};
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the services and config
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Static Files
///
/// Static files are served from `AppConfig::static_dir`.
///
/// ## Fallback
///
/// Unknown routes answer 404 with the JSON error body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);
    let router = configure_page_routes(router, &app_state);
    let router = configure_company_routes(router, &app_state);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new(&app_state.config.static_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Not Found") });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
