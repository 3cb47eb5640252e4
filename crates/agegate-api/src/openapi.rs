//! OpenAPI Documentation
//!
//! Auto-generated OpenAPI 3.0 specification for the AgeGate API.

use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// AgeGate API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AgeGate API",
        description = "Age verification and parental consent authorization service.",
        version = "1.0.0",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    paths(
        // Health
        handlers::health::health_check,
        handlers::health::readiness_check,
        // Age gate
        handlers::gate::submit_age_gate,
        handlers::gate::gate_status,
        // Parental consent
        handlers::consent::submit_attestation,
        // Content
        handlers::content::get_content_types,
    ),
    components(
        schemas(
            dto::AgeGateRequest,
            dto::AgeGateResponse,
            dto::GateStatusParams,
            dto::GateStatusResponse,
            dto::AttestationRequest,
            dto::AttestationResponse,
            dto::ContentTypeResponse,
            handlers::health::HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Age Gate", description = "Birthdate evaluation and derived gate state"),
        (name = "Parental Consent", description = "Parental attestation submission"),
        (name = "Content", description = "Content-type catalog"),
        (name = "Health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
