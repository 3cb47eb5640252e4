//! Age-gate handlers
//!
//! The submission entry point and the derived-state query.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use agegate_types::SubjectId;

use crate::dto::{AgeGateRequest, AgeGateResponse, GateStatusParams, GateStatusResponse};
use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// Submit an age-gate evaluation
#[utoipa::path(
    post,
    path = "/api/v1/age-gate",
    tag = "Age Gate",
    request_body = AgeGateRequest,
    responses(
        (status = 200, description = "Evaluation complete", body = AgeGateResponse),
        (status = 400, description = "Malformed body, invalid birthdate, or invalid country code", body = crate::error::ErrorResponse),
        (status = 503, description = "Storage unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_age_gate(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<AgeGateRequest>,
) -> ApiResult<Json<AgeGateResponse>> {
    let subject_id = SubjectId::from_uuid(request.subject_id);

    let result = state
        .gate
        .submit_age_gate(subject_id, request.birthdate, &request.country_code)
        .await?;

    Ok(Json(AgeGateResponse {
        calculated_age: result.calculated_age,
        next_step: result.next_step,
    }))
}

/// Query the derived gate state for a subject
#[utoipa::path(
    get,
    path = "/api/v1/age-gate/status",
    tag = "Age Gate",
    params(
        ("subjectId" = uuid::Uuid, Query, description = "Subject identifier")
    ),
    responses(
        (status = 200, description = "Derived gate state", body = GateStatusResponse),
        (status = 503, description = "Storage unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn gate_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GateStatusParams>,
) -> ApiResult<Json<GateStatusResponse>> {
    let subject_id = SubjectId::from_uuid(params.subject_id);
    let gate_state = state.gate.gate_state(subject_id, Utc::now()).await?;

    Ok(Json(GateStatusResponse {
        subject_id: subject_id.to_string(),
        state: gate_state,
    }))
}
