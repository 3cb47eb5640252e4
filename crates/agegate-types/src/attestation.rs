//! Parental attestation types
//!
//! An attestation is a parent/guardian's recorded, timestamped assertion of
//! legal authority and consent, bound to a policy version and an expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::SubjectId;

/// Opaque token identifying which consent terms an attestation was made
/// under, for auditability across terms changes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyVersion(pub String);

impl PolicyVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ephemeral attestation input; not retained beyond validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentalAttestationSubmission {
    /// Subject the attestation covers
    pub subject_id: SubjectId,
    /// Parent/guardian email address
    pub parent_email: String,
    /// Parent/guardian full legal name
    pub parent_full_name: String,
    /// Relationship-to-child label (e.g. "mother", "legal guardian")
    pub relationship_to_child: String,
    /// Whether the parent affirmatively accepted the attestation terms
    pub attestation_accepted: bool,
}

/// An issued parental attestation record.
///
/// Exists only if the acceptance flag was true and all required fields
/// passed validation at submission time. Immutable once issued; a new
/// submission creates a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentalAttestationRecord {
    /// Subject the record covers
    pub subject_id: SubjectId,
    /// Consent terms version the attestation was made under
    pub policy_version: PolicyVersion,
    /// When the record was issued
    pub issued_at: DateTime<Utc>,
    /// When the record stops being valid
    pub expires_at: DateTime<Utc>,
}

impl ParentalAttestationRecord {
    /// Whether the record is valid at time `now`.
    ///
    /// Valid iff `now` is strictly before the expiry timestamp.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(expires_at: DateTime<Utc>) -> ParentalAttestationRecord {
        ParentalAttestationRecord {
            subject_id: SubjectId::new(),
            policy_version: PolicyVersion::new("v1"),
            issued_at: expires_at - Duration::days(365),
            expires_at,
        }
    }

    #[test]
    fn test_valid_strictly_before_expiry() {
        let expires = Utc::now();
        let r = record(expires);

        assert!(r.is_valid_at(expires - Duration::seconds(1)));
    }

    #[test]
    fn test_invalid_at_and_after_expiry() {
        let expires = Utc::now();
        let r = record(expires);

        assert!(!r.is_valid_at(expires));
        assert!(!r.is_valid_at(expires + Duration::seconds(1)));
    }
}
