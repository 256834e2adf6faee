//! Replayable in-memory [`QuestBackend`] for scripted sessions and tests.

use crate::backend::QuestBackend;
use crate::context::UserContext;
use crate::error::QuestError;
use crate::quest::Quest;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// In-memory backend that replays queued responses in order.
///
/// Completions succeed unless a failure was queued; contexts and quests fail
/// with a network error once their queues run dry.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    contexts: RefCell<VecDeque<Result<UserContext, QuestError>>>,
    quests: RefCell<VecDeque<Result<Quest, QuestError>>>,
    completions: RefCell<VecDeque<Result<(), QuestError>>>,
    completion_calls: RefCell<Vec<(String, String)>>,
}

impl ScriptedBackend {
    #[must_use]
    pub fn with_context(self, response: Result<UserContext, QuestError>) -> Self {
        self.contexts.borrow_mut().push_back(response);
        self
    }

    #[must_use]
    pub fn with_quest(self, response: Result<Quest, QuestError>) -> Self {
        self.quests.borrow_mut().push_back(response);
        self
    }

    #[must_use]
    pub fn with_completion(self, response: Result<(), QuestError>) -> Self {
        self.completions.borrow_mut().push_back(response);
        self
    }

    /// `(user_id, quest_id)` of every completion POST, in call order.
    #[must_use]
    pub fn completion_calls(&self) -> Vec<(String, String)> {
        self.completion_calls.borrow().clone()
    }
}

fn exhausted(what: &str) -> QuestError {
    QuestError::Network(format!("no scripted {what} response"))
}

#[async_trait(?Send)]
impl QuestBackend for ScriptedBackend {
    async fn fetch_user_context(&self, _user_id: &str) -> Result<UserContext, QuestError> {
        self.contexts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("user-stats")))
    }

    async fn generate_quest(&self, _user_id: &str) -> Result<Quest, QuestError> {
        self.quests
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("generate-quest")))
    }

    async fn complete_quest(&self, user_id: &str, quest_id: &str) -> Result<(), QuestError> {
        self.completion_calls
            .borrow_mut()
            .push((user_id.to_string(), quest_id.to_string()));
        self.completions.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn replays_in_order_then_runs_dry() {
        let backend = ScriptedBackend::default()
            .with_context(Ok(UserContext::default()))
            .with_completion(Err(QuestError::status(500, None)));
        assert!(block_on(backend.fetch_user_context("u")).is_ok());
        assert!(block_on(backend.fetch_user_context("u")).is_err());
        assert!(block_on(backend.generate_quest("u")).is_err());
        assert!(block_on(backend.complete_quest("u", "q")).is_err());
        assert!(block_on(backend.complete_quest("u", "q")).is_ok());
        assert_eq!(
            backend.completion_calls(),
            [
                ("u".to_string(), "q".to_string()),
                ("u".to_string(), "q".to_string()),
            ]
        );
    }
}
