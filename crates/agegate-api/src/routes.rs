//! API Routes
//!
//! Route definitions for all API endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create API v1 routes
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Age-gate routes
        .route("/age-gate", post(handlers::gate::submit_age_gate))
        .route("/age-gate/status", get(handlers::gate::gate_status))
        .route(
            "/age-gate/attestation",
            post(handlers::consent::submit_attestation),
        )
        // Content catalog (public)
        .route("/content-types", get(handlers::content::get_content_types))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}
