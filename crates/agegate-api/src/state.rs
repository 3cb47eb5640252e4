//! Application state shared across handlers

use std::sync::Arc;

use agegate_core::AgeGateService;
use agegate_types::ContentType;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Age-gate orchestrator
    pub gate: Arc<AgeGateService>,
    /// Ordered content-type catalog served to the downstream UI
    pub content_types: Arc<Vec<ContentType>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(gate: Arc<AgeGateService>, content_types: Vec<ContentType>) -> Self {
        Self {
            gate,
            content_types: Arc::new(content_types),
        }
    }

    /// The default catalog shipped with the service
    pub fn default_content_types() -> Vec<ContentType> {
        vec![
            ContentType {
                id: "video-lessons".to_string(),
                name: "Video Lessons".to_string(),
                description: "Guided video lessons across all subjects".to_string(),
            },
            ContentType {
                id: "practice-sets".to_string(),
                name: "Practice Sets".to_string(),
                description: "Interactive exercises with instant feedback".to_string(),
            },
            ContentType {
                id: "quizzes".to_string(),
                name: "Quizzes".to_string(),
                description: "Short knowledge checks at the end of each unit".to_string(),
            },
        ]
    }
}
