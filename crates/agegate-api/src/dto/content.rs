//! Content catalog DTOs

use serde::Serialize;
use utoipa::ToSchema;

use agegate_types::ContentType;

/// Content-type catalog entry
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeResponse {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
}

impl From<&ContentType> for ContentTypeResponse {
    fn from(ct: &ContentType) -> Self {
        Self {
            id: ct.id.clone(),
            name: ct.name.clone(),
            description: ct.description.clone(),
        }
    }
}
