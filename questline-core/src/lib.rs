//! Questline Core
//!
//! Platform-agnostic quest model for the Questline super-app overlay.
//! This crate owns the data shapes served by the quest backend, the
//! per-session progress rules (points, completion set, day streak) and the
//! `QuestSession` state model. Rendering and HTTP transport live in the
//! front-end and tester crates, which plug in through [`QuestBackend`].

pub mod backend;
pub mod constants;
pub mod context;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod platform;
pub mod progress;
pub mod quest;
pub mod scripted;
pub mod session;
pub mod streak;

// Re-export commonly used types
pub use backend::QuestBackend;
pub use constants::{DEFAULT_API_BASE, DEMO_USER_ID};
pub use context::{ContextSlot, UserContext};
pub use controller::QuestController;
pub use endpoints::{CompletionBody, Endpoints, ErrorBody, HealthStatus};
pub use error::{Operation, QuestError};
pub use platform::{IconKind, Platform, ServiceLine};
pub use progress::{SessionProgress, progress_percent};
pub use quest::{Objective, Quest, QuestRewards};
pub use scripted::ScriptedBackend;
pub use session::{CompletionRequest, QuestPhase, QuestSession, Tab};
pub use streak::{next_streak, whole_days_between};
