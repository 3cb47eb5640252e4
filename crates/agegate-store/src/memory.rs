//! In-memory store
//!
//! Backs tests and local development. Mirrors the external collaborator's
//! semantics: results overwrite, attestations append.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use agegate_types::{AgeGateResult, ParentalAttestationRecord, SubjectId};

use crate::error::StoreResult;
use crate::GateStore;

/// DashMap-backed implementation of [`GateStore`]
#[derive(Default)]
pub struct MemoryStore {
    results: DashMap<SubjectId, AgeGateResult>,
    attestations: DashMap<SubjectId, Vec<ParentalAttestationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GateStore for MemoryStore {
    async fn put_gate_result(&self, result: AgeGateResult) -> StoreResult<()> {
        tracing::debug!(subject_id = %result.subject_id, "Storing gate result");
        self.results.insert(result.subject_id, result);
        Ok(())
    }

    async fn get_gate_result(&self, subject_id: SubjectId) -> StoreResult<Option<AgeGateResult>> {
        Ok(self.results.get(&subject_id).map(|r| r.clone()))
    }

    async fn append_attestation(&self, record: ParentalAttestationRecord) -> StoreResult<()> {
        tracing::debug!(subject_id = %record.subject_id, "Appending attestation record");
        self.attestations
            .entry(record.subject_id)
            .or_default()
            .push(record);
        Ok(())
    }

    async fn latest_attestation(
        &self,
        subject_id: SubjectId,
    ) -> StoreResult<Option<ParentalAttestationRecord>> {
        Ok(self
            .attestations
            .get(&subject_id)
            .and_then(|log| log.iter().max_by_key(|r| r.issued_at).cloned()))
    }

    async fn current_valid_attestation(
        &self,
        subject_id: SubjectId,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<ParentalAttestationRecord>> {
        Ok(self.attestations.get(&subject_id).and_then(|log| {
            log.iter()
                .filter(|r| r.is_valid_at(now))
                .max_by_key(|r| r.issued_at)
                .cloned()
        }))
    }
}
