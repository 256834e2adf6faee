use crate::context::UserContext;
use crate::error::QuestError;
use crate::quest::Quest;
use async_trait::async_trait;

/// Trait for abstracting the quest service.
///
/// Front-ends provide the transport: the browser build talks to the service
/// through `fetch`, the tester through a native HTTP client or a scripted
/// fixture. Futures are not required to be `Send` so that browser
/// implementations qualify.
#[async_trait(?Send)]
pub trait QuestBackend {
    /// Fetch promotion and destination context for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body.
    async fn fetch_user_context(&self, user_id: &str) -> Result<UserContext, QuestError>;

    /// Ask the service to generate a fresh quest for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`QuestError::Status`] carrying the server's `error` text when
    /// the service answers with a non-2xx status.
    async fn generate_quest(&self, user_id: &str) -> Result<Quest, QuestError>;

    /// Report that `user_id` completed a task of `quest_id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-2xx status.
    async fn complete_quest(&self, user_id: &str, quest_id: &str) -> Result<(), QuestError>;
}
