//! Age-gate submission, result, and derived state types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::identity::SubjectId;

/// The routing outcome of an age-gate evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    /// Subject meets the jurisdiction threshold and may proceed
    DirectAccess,
    /// Subject is under the threshold; a parental attestation is required
    ParentConsentRequired,
}

/// Ephemeral age-gate input; not retained beyond evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGateSubmission {
    /// Subject being evaluated
    pub subject_id: SubjectId,
    /// Birthdate as a calendar date
    pub birthdate: NaiveDate,
    /// Normalized two-letter jurisdiction code
    pub country_code: CountryCode,
}

/// Outcome of one age-gate evaluation.
///
/// Superseded by any later submission for the same subject; the core keeps
/// no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGateResult {
    /// Subject the decision applies to
    pub subject_id: SubjectId,
    /// Whole years as of the evaluation date
    pub calculated_age: u32,
    /// Routing outcome
    pub next_step: NextStep,
    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
}

/// Derived per-subject gate state.
///
/// Recomputed fresh from the latest [`AgeGateResult`] plus the latest
/// attestation record on each query; never held as a long-lived state
/// machine object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// No age-gate submission recorded for this subject
    Unverified,
    /// Age met the threshold; no consent needed
    DirectAccessGranted,
    /// Under the threshold and no currently-valid attestation
    PendingParentConsent,
    /// Under the threshold with a currently-valid attestation
    Consented,
}
