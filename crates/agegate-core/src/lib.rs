//! AgeGate Decision Core
//!
//! Age verification and parental consent authorization for a learner-facing
//! platform:
//!
//! - **Age Decision Evaluator**: pure birthdate + jurisdiction → outcome
//! - **Consent Record Manager**: attestation validation and record issuance
//! - **Age-Gate Orchestrator**: single submission/query entry point
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Age-Gate Flow                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  submit_age_gate ──► Evaluator ──► direct_access            │
//! │        │                             │                      │
//! │        │                     parent_consent_required        │
//! │        │                             │                      │
//! │  submit_attestation ──► ConsentService ──► issued record    │
//! │        │                             │                      │
//! │        └────────► GateStore ◄────────┘                      │
//! │                      │                                      │
//! │           gate_state (derived projection)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-subject state is never a long-lived object: `gate_state` recomputes
//! it from the latest gate result plus the latest non-expired attestation on
//! every query.

pub mod config;
pub mod consent;
pub mod error;
pub mod evaluator;

pub use config::{AttestationConfig, GateConfig, PolicyConfig};
pub use consent::ConsentService;
pub use error::{GateError, GateResult};
pub use evaluator::{age_in_whole_years, evaluate};

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

use agegate_store::GateStore;
use agegate_types::{
    AgeGateResult, GateState, NextStep, ParentalAttestationRecord, ParentalAttestationSubmission,
    SubjectId,
};

/// Age-gate orchestrator sequencing the evaluator and the consent manager
/// behind one entry point
pub struct AgeGateService {
    consent: ConsentService,
    store: Arc<dyn GateStore>,
    config: GateConfig,
}

impl AgeGateService {
    /// Create a new age-gate service
    pub fn new(store: Arc<dyn GateStore>, config: GateConfig) -> Self {
        let consent = ConsentService::new(config.attestation.clone());
        Self {
            consent,
            store,
            config,
        }
    }

    /// Get the config reference
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Evaluate an age-gate submission and persist the outcome.
    ///
    /// A later call for the same subject always recomputes and overwrites
    /// the prior decision; a wrong birthdate is never locked in.
    pub async fn submit_age_gate(
        &self,
        subject_id: SubjectId,
        birthdate: NaiveDate,
        country_code: &str,
    ) -> GateResult<AgeGateResult> {
        self.submit_age_gate_at(subject_id, birthdate, country_code, Utc::now())
            .await
    }

    /// [`Self::submit_age_gate`] with an explicit reference time
    pub async fn submit_age_gate_at(
        &self,
        subject_id: SubjectId,
        birthdate: NaiveDate,
        country_code: &str,
        now: DateTime<Utc>,
    ) -> GateResult<AgeGateResult> {
        let result = evaluator::evaluate(subject_id, birthdate, country_code, now, &self.config.policy)?;
        self.store.put_gate_result(result.clone()).await?;

        tracing::info!(
            subject_id = %subject_id,
            calculated_age = result.calculated_age,
            next_step = ?result.next_step,
            "Age gate evaluated"
        );

        Ok(result)
    }

    /// Validate an attestation, issue a record, and append it to the
    /// subject's log.
    ///
    /// Only meaningful after a prior `parent_consent_required` outcome for
    /// the subject; the orchestrator trusts the caller context and does not
    /// re-derive age.
    pub async fn submit_attestation(
        &self,
        submission: &ParentalAttestationSubmission,
    ) -> GateResult<ParentalAttestationRecord> {
        self.submit_attestation_at(submission, Utc::now()).await
    }

    /// [`Self::submit_attestation`] with an explicit reference time
    pub async fn submit_attestation_at(
        &self,
        submission: &ParentalAttestationSubmission,
        now: DateTime<Utc>,
    ) -> GateResult<ParentalAttestationRecord> {
        let record = self.consent.submit_attestation(submission, now)?;
        self.store.append_attestation(record.clone()).await?;

        tracing::info!(
            subject_id = %record.subject_id,
            policy_version = %record.policy_version,
            expires_at = %record.expires_at,
            "Parental attestation recorded"
        );

        Ok(record)
    }

    /// Derive the subject's gate state at `now`.
    ///
    /// Pure recomputation from storage; a `Consented` subject whose newest
    /// record has expired lapses back to `PendingParentConsent` and must
    /// re-attest.
    pub async fn gate_state(&self, subject_id: SubjectId, now: DateTime<Utc>) -> GateResult<GateState> {
        let result = self.store.get_gate_result(subject_id).await?;

        let state = match result {
            None => GateState::Unverified,
            Some(r) if r.next_step == NextStep::DirectAccess => GateState::DirectAccessGranted,
            Some(_) => {
                if self
                    .store
                    .current_valid_attestation(subject_id, now)
                    .await?
                    .is_some()
                {
                    GateState::Consented
                } else {
                    GateState::PendingParentConsent
                }
            }
        };

        Ok(state)
    }
}
