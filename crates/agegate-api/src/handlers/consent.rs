//! Parental attestation handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use agegate_types::{ParentalAttestationSubmission, SubjectId};

use crate::dto::{AttestationRequest, AttestationResponse};
use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// Submit a parental attestation
#[utoipa::path(
    post,
    path = "/api/v1/age-gate/attestation",
    tag = "Parental Consent",
    request_body = AttestationRequest,
    responses(
        (status = 200, description = "Attestation recorded", body = AttestationResponse),
        (status = 400, description = "Malformed body or a required field failed validation", body = crate::error::ErrorResponse),
        (status = 403, description = "Attestation terms were not accepted", body = crate::error::ErrorResponse),
        (status = 503, description = "Storage unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_attestation(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<AttestationRequest>,
) -> ApiResult<Json<AttestationResponse>> {
    let submission = ParentalAttestationSubmission {
        subject_id: SubjectId::from_uuid(request.subject_id),
        parent_email: request.parent_email,
        parent_full_name: request.parent_full_name,
        relationship_to_child: request.relationship_to_child,
        attestation_accepted: request.attestation_accepted,
    };

    let record = state.gate.submit_attestation(&submission).await?;

    Ok(Json(AttestationResponse {
        policy_version: record.policy_version.to_string(),
        expires_at: record.expires_at,
    }))
}
