//! Content catalog types
//!
//! The content-type listing is consumed by the downstream UI; the age-gate
//! core never inspects it. Only the contract shape lives here.

use serde::{Deserialize, Serialize};

/// One entry in the ordered content-type catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
}
