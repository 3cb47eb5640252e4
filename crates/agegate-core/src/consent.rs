//! Consent Record Manager
//!
//! Validates submitted attestation fields and issues immutable records bound
//! to the configured policy version and validity window. Persistence is the
//! orchestrator's concern; this service only constructs and validates.

use chrono::{DateTime, Duration, Utc};
use validator::ValidateEmail;

use agegate_types::{ParentalAttestationRecord, ParentalAttestationSubmission, PolicyVersion};

use crate::config::AttestationConfig;
use crate::error::{GateError, GateResult};

/// Consent record manager
#[derive(Debug, Clone)]
pub struct ConsentService {
    config: AttestationConfig,
}

impl ConsentService {
    /// Create a new consent service
    pub fn new(config: AttestationConfig) -> Self {
        Self { config }
    }

    /// Validate a submission and issue a record.
    ///
    /// Checks run in order and short-circuit on the first failure:
    /// acceptance flag, email shape, name length, relationship length.
    /// String fields are trimmed before length checks.
    pub fn submit_attestation(
        &self,
        submission: &ParentalAttestationSubmission,
        now: DateTime<Utc>,
    ) -> GateResult<ParentalAttestationRecord> {
        if !submission.attestation_accepted {
            return Err(GateError::AttestationNotAccepted);
        }

        let email = submission.parent_email.trim();
        if !email.validate_email() {
            return Err(GateError::ValidationError {
                field: "parentEmail",
                reason: "must be a valid email address".to_string(),
            });
        }

        let name_len = submission.parent_full_name.trim().chars().count();
        if name_len < self.config.name_min_length || name_len > self.config.name_max_length {
            return Err(GateError::ValidationError {
                field: "parentFullName",
                reason: format!(
                    "must be {}-{} characters",
                    self.config.name_min_length, self.config.name_max_length
                ),
            });
        }

        let relationship_len = submission.relationship_to_child.trim().chars().count();
        if relationship_len < self.config.relationship_min_length
            || relationship_len > self.config.relationship_max_length
        {
            return Err(GateError::ValidationError {
                field: "relationshipToChild",
                reason: format!(
                    "must be {}-{} characters",
                    self.config.relationship_min_length, self.config.relationship_max_length
                ),
            });
        }

        // GateConfig::validate catches this at startup; a hand-built config
        // can still carry a window chrono cannot represent.
        let validity = Duration::from_std(self.config.validity_window).map_err(|_| {
            GateError::Configuration("attestation validity window is out of range".to_string())
        })?;

        Ok(ParentalAttestationRecord {
            subject_id: submission.subject_id,
            policy_version: PolicyVersion::new(self.config.policy_version.clone()),
            issued_at: now,
            expires_at: now + validity,
        })
    }

    /// Whether a record is still valid at `now`
    pub fn is_attestation_valid(&self, record: &ParentalAttestationRecord, now: DateTime<Utc>) -> bool {
        record.is_valid_at(now)
    }
}
