//! AgeGate Storage Layer
//!
//! Persistence *contract* for the age-gate subsystem. The real store (users,
//! sessions, attestation archives) is an external collaborator reached over
//! the network; this crate defines only the request/response shape the core
//! depends on, plus an in-memory implementation for tests and development.
//!
//! # Persisted layout
//!
//! - One current [`AgeGateResult`] per subject, overwritten on resubmission
//!   (last write wins; no history kept here)
//! - An append-only collection of [`ParentalAttestationRecord`] entries per
//!   subject, from which "current valid record" is derived by selecting the
//!   most recent non-expired entry

pub mod error;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use agegate_types::{AgeGateResult, ParentalAttestationRecord, SubjectId};

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Storage contract the orchestrator persists through
#[async_trait]
pub trait GateStore: Send + Sync {
    /// Overwrite the subject's current age-gate result
    async fn put_gate_result(&self, result: AgeGateResult) -> StoreResult<()>;

    /// Fetch the subject's current age-gate result, if any
    async fn get_gate_result(&self, subject_id: SubjectId) -> StoreResult<Option<AgeGateResult>>;

    /// Append an attestation record to the subject's log
    async fn append_attestation(&self, record: ParentalAttestationRecord) -> StoreResult<()>;

    /// The most recently issued attestation for the subject, expired or not
    async fn latest_attestation(
        &self,
        subject_id: SubjectId,
    ) -> StoreResult<Option<ParentalAttestationRecord>>;

    /// The most recently issued attestation that is still valid at `now`
    async fn current_valid_attestation(
        &self,
        subject_id: SubjectId,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<ParentalAttestationRecord>>;
}
