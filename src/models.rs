use serde::{Deserialize, Serialize};

/// Query parameters accepted by the explain endpoint.
#[derive(Debug, Deserialize)]
pub struct TopicQuery {
    pub topic: Option<String>,
}

impl TopicQuery {
    /// The requested topic, or `default` when the caller supplied none.
    ///
    /// An empty string counts as absent; anything else (including
    /// whitespace-only input) is passed through untouched.
    pub fn topic_or(self, default: &str) -> String {
        match self.topic {
            Some(topic) if !topic.is_empty() => topic,
            _ => default.to_string(),
        }
    }
}

/// Response payload for the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}
