use crate::backend::QuestBackend;
use crate::constants::DEMO_USER_ID;
use crate::session::QuestSession;
use chrono::{DateTime, Utc};

/// Drives a [`QuestSession`] against a [`QuestBackend`] for one user.
///
/// Each handler performs at most one backend call and never retries; a
/// failure is left in `session.error` for the user to act on.
pub struct QuestController<B>
where
    B: QuestBackend,
{
    backend: B,
    user_id: String,
    session: QuestSession,
}

impl<B> QuestController<B>
where
    B: QuestBackend,
{
    /// Controller for the demo customer.
    pub fn new(backend: B) -> Self {
        Self::for_user(backend, DEMO_USER_ID)
    }

    pub fn for_user(backend: B, user_id: impl Into<String>) -> Self {
        Self {
            backend,
            user_id: user_id.into(),
            session: QuestSession::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &QuestSession {
        &self.session
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_session(self) -> QuestSession {
        self.session
    }

    pub async fn load_user_context(&mut self) {
        let result = self.backend.fetch_user_context(&self.user_id).await;
        self.session.apply_user_context(result);
    }

    /// Request a new quest. Ignored while a generation is already running.
    pub async fn generate_quest(&mut self) {
        if !self.session.begin_generation() {
            return;
        }
        let result = self.backend.generate_quest(&self.user_id).await;
        self.session.finish_generation(result);
    }

    /// Complete `objective_id` at `now`.
    ///
    /// Returns the platform URL the caller should open, or `None` when the
    /// click was ignored or the backend rejected it.
    pub async fn handle_task_click(
        &mut self,
        objective_id: &str,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let request = self.session.completion_request(objective_id)?;
        let result = self
            .backend
            .complete_quest(&self.user_id, &request.quest_id)
            .await;
        self.session.finish_completion(&request, result, now)
    }
}
