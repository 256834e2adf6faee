//! URL layout and request/response bodies of the quest service.

use crate::constants::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};

/// Resolves service routes against a configured origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    /// Build from an origin such as `http://localhost:5000/`. Surrounding
    /// whitespace and trailing slashes are dropped; an empty value falls back
    /// to the default origin.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn user_stats(&self, user_id: &str) -> String {
        format!("{}/user-stats/{user_id}", self.base)
    }

    #[must_use]
    pub fn generate_quest(&self, user_id: &str) -> String {
        format!("{}/generate-quest/{user_id}", self.base)
    }

    #[must_use]
    pub fn complete_quest(&self, user_id: &str, quest_id: &str) -> String {
        format!("{}/complete-quest/{user_id}/{quest_id}", self.base)
    }

    #[must_use]
    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}

/// Body of the completion POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionBody {
    pub success: bool,
}

impl CompletionBody {
    pub const SUCCESS: Self = Self { success: true };
}

/// Error envelope returned by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the `error` text from a response body, if it has one.
    #[must_use]
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.error)
    }
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
