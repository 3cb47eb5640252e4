//! AgeGate Types - Canonical domain types for age verification & parental consent
//!
//! This crate contains all foundational types for the age-gate subsystem with
//! zero dependencies on other agegate crates. It defines the type system for:
//!
//! - Identity types (SubjectId)
//! - Jurisdiction types (CountryCode, ISO 3166-1 alpha-2)
//! - Age-gate submissions, results, and the derived per-subject gate state
//! - Parental attestation submissions and issued records
//! - Content catalog entries consumed by the downstream UI
//!
//! # Architectural Invariants
//!
//! These types support the core age-gate invariants:
//!
//! 1. An attestation record exists only if the acceptance flag was true and
//!    every required field passed validation at submission time
//! 2. Issued records are immutable — re-attestation creates a new record
//! 3. A record is valid at time T iff T is strictly before its expiry
//! 4. Per-subject gate state is a derived projection, never a stored object

pub mod attestation;
pub mod content;
pub mod country;
pub mod gate;
pub mod identity;

pub use attestation::*;
pub use content::*;
pub use country::*;
pub use gate::*;
pub use identity::*;

/// Version of the agegate types schema
pub const TYPES_VERSION: &str = "0.1.0";
