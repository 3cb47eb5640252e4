//! Parental attestation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// =============================================================================
// Attestation Submission
// =============================================================================

/// Parental attestation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRequest {
    /// Subject the attestation covers
    pub subject_id: Uuid,
    /// Parent/guardian email address
    pub parent_email: String,
    /// Parent/guardian full legal name
    pub parent_full_name: String,
    /// Relationship-to-child label
    pub relationship_to_child: String,
    /// Whether the terms were affirmatively accepted
    #[serde(default)]
    pub attestation_accepted: bool,
}

/// Parental attestation response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResponse {
    /// Consent terms version the record was issued under
    pub policy_version: String,
    /// When the record stops being valid (ISO-8601 timestamp)
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_defaults_to_false() {
        let json = r#"{
            "subjectId": "9f3c1a02-9a27-4f5e-bb14-1f1f4a3f9a10",
            "parentEmail": "parent@example.com",
            "parentFullName": "Alex Example",
            "relationshipToChild": "mother"
        }"#;

        let request: AttestationRequest = serde_json::from_str(json).unwrap();
        assert!(!request.attestation_accepted);
    }

    #[test]
    fn test_response_wire_format() {
        let response = AttestationResponse {
            policy_version: "v1".to_string(),
            expires_at: "2026-08-25T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["policyVersion"], "v1");
        assert!(json["expiresAt"].as_str().unwrap().starts_with("2026-08-25"));
    }
}
