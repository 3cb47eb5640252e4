//! Content catalog handlers
//!
//! Serves the ordered content-type listing consumed by the downstream UI.
//! The age-gate core never inspects this data.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dto::ContentTypeResponse;
use crate::state::AppState;

/// List content types in display order
#[utoipa::path(
    get,
    path = "/api/v1/content-types",
    tag = "Content",
    responses(
        (status = 200, description = "Ordered content-type catalog", body = [ContentTypeResponse])
    )
)]
pub async fn get_content_types(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ContentTypeResponse>> {
    let catalog = state
        .content_types
        .iter()
        .map(ContentTypeResponse::from)
        .collect();
    Json(catalog)
}
