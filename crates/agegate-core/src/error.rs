//! Age-gate error types
//!
//! Errors are designed to be:
//! - Informative for logging/debugging
//! - Safe for external exposure (no sensitive data leakage)
//! - Convertible to HTTP status codes
//!
//! Nothing here is fatal to the process: every failure is scoped to one
//! submission and reported back to the caller.

use thiserror::Error;

/// Result type alias for age-gate operations
pub type GateResult<T> = Result<T, GateError>;

/// Age-gate error types
#[derive(Debug, Error)]
pub enum GateError {
    // =========================================================================
    // Invalid Input (age-gate submission)
    // =========================================================================
    /// Birthdate is missing or not a valid calendar date
    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(String),

    /// Birthdate is strictly after the evaluation date
    #[error("Birthdate is in the future")]
    BirthdateInFuture,

    /// Country code is not exactly two alphabetic characters
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    // =========================================================================
    // Attestation Errors
    // =========================================================================
    /// A required attestation field failed validation
    #[error("Invalid {field}: {reason}")]
    ValidationError {
        /// The first field that failed, in camelCase wire naming
        field: &'static str,
        /// Why the field was rejected
        reason: String,
    },

    /// The parent declined the attestation terms. Distinct from a
    /// validation failure: this is a blocking requirement, not a typo.
    #[error("Attestation terms were not accepted")]
    AttestationNotAccepted,

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// The external storage collaborator is unreachable or failing.
    /// Retryable; the core never retries on its own.
    #[error("Storage error: {0}")]
    Store(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A configured value is unusable at issuance time. Not retryable;
    /// an operator has to fix the deployment.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidBirthdate(_)
            | Self::BirthdateInFuture
            | Self::InvalidCountryCode(_)
            | Self::ValidationError { .. } => 400,

            // 403 Forbidden
            Self::AttestationNotAccepted => 403,

            // 503 Service Unavailable
            Self::Store(_) => 503,

            // 500 Internal Server Error
            Self::Configuration(_) => 500,
        }
    }

    /// Get an error code for the client (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBirthdate(_) => "INVALID_BIRTHDATE",
            Self::BirthdateInFuture => "BIRTHDATE_IN_FUTURE",
            Self::InvalidCountryCode(_) => "INVALID_COUNTRY_CODE",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::AttestationNotAccepted => "ATTESTATION_NOT_ACCEPTED",
            Self::Store(_) => "STORAGE_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Get safe message for client (doesn't leak collaborator details)
    pub fn client_message(&self) -> String {
        match self {
            Self::Store(_) => "Storage is temporarily unavailable, please retry".to_string(),
            Self::Configuration(_) => "The service is misconfigured".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<agegate_store::StoreError> for GateError {
    fn from(err: agegate_store::StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<agegate_types::country::InvalidCountryCode> for GateError {
    fn from(err: agegate_types::country::InvalidCountryCode) -> Self {
        Self::InvalidCountryCode(err.0)
    }
}
