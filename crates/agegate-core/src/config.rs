//! Age-gate policy configuration
//!
//! Centralized configuration for the decision core. Thresholds and the
//! attestation validity window are configuration values, never hard-coded
//! into the decision logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use agegate_types::CountryCode;

/// Main age-gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Age threshold policy
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Attestation issuance configuration
    #[serde(default)]
    pub attestation: AttestationConfig,
}

/// Age threshold policy
///
/// Regulatory thresholds legitimately vary by jurisdiction; the per-country
/// table is the seam for that. Every jurisdiction currently resolves to the
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Threshold applied when a country has no override
    pub default_threshold: u32,
    /// Per-country threshold overrides, keyed by alpha-2 code
    #[serde(default)]
    pub country_thresholds: HashMap<String, u32>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_threshold: 13,
            country_thresholds: HashMap::new(),
        }
    }
}

impl PolicyConfig {
    /// Resolve the age threshold for a jurisdiction
    pub fn threshold_for(&self, country: CountryCode) -> u32 {
        self.country_thresholds
            .get(country.as_str())
            .copied()
            .unwrap_or(self.default_threshold)
    }
}

/// Attestation issuance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttestationConfig {
    /// Opaque token naming the consent terms in force
    pub policy_version: String,
    /// How long an issued record stays valid
    #[serde(with = "humantime_serde")]
    pub validity_window: Duration,
    /// Minimum trimmed length of the parent's full legal name
    pub name_min_length: usize,
    /// Maximum trimmed length of the parent's full legal name
    pub name_max_length: usize,
    /// Minimum trimmed length of the relationship label
    pub relationship_min_length: usize,
    /// Maximum trimmed length of the relationship label
    pub relationship_max_length: usize,
}

impl Default for AttestationConfig {
    fn default() -> Self {
        Self {
            policy_version: "v1".to_string(),
            validity_window: Duration::from_secs(365 * 24 * 60 * 60), // 1 year
            name_min_length: 3,
            name_max_length: 120,
            relationship_min_length: 2,
            relationship_max_length: 60,
        }
    }
}

impl GateConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(version) = std::env::var("AGEGATE_POLICY_VERSION") {
            config.attestation.policy_version = version;
        }
        if let Ok(threshold) = std::env::var("AGEGATE_DEFAULT_THRESHOLD") {
            if let Ok(threshold) = threshold.parse() {
                config.policy.default_threshold = threshold;
            }
        }
        if let Ok(window) = std::env::var("AGEGATE_VALIDITY_WINDOW_SECS") {
            if let Ok(secs) = window.parse::<u64>() {
                config.attestation.validity_window = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.attestation.policy_version.trim().is_empty() {
            errors.push("Attestation policy version must be set".to_string());
        }
        if self.attestation.validity_window.as_secs() == 0 {
            errors.push("Attestation validity window must be non-zero".to_string());
        }
        if chrono::Duration::from_std(self.attestation.validity_window).is_err() {
            errors.push("Attestation validity window is out of range".to_string());
        }
        if self.policy.default_threshold == 0 {
            errors.push("Default age threshold must be non-zero".to_string());
        }
        if self.attestation.name_min_length > self.attestation.name_max_length {
            errors.push("Name length bounds are inverted".to_string());
        }
        if self.attestation.relationship_min_length > self.attestation.relationship_max_length {
            errors.push("Relationship length bounds are inverted".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
