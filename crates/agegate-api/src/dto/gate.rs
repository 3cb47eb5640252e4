//! Age-gate DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use agegate_types::{GateState, NextStep};

// =============================================================================
// Age-Gate Submission
// =============================================================================

/// Age-gate submission request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgeGateRequest {
    /// Subject identifier
    pub subject_id: Uuid,
    /// Birthdate (ISO-8601 calendar date)
    pub birthdate: NaiveDate,
    /// ISO 3166-1 alpha-2 country code, case-insensitive
    pub country_code: String,
}

/// Age-gate submission response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgeGateResponse {
    /// Whole years as of the evaluation date
    pub calculated_age: u32,
    /// Routing outcome
    #[schema(value_type = String, example = "parent_consent_required")]
    pub next_step: NextStep,
}

// =============================================================================
// Gate Status
// =============================================================================

/// Gate status query parameters
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GateStatusParams {
    /// Subject identifier
    pub subject_id: Uuid,
}

/// Derived gate state response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GateStatusResponse {
    /// Subject identifier
    pub subject_id: String,
    /// Derived per-subject state
    #[schema(value_type = String, example = "pending_parent_consent")]
    pub state: GateState,
}
