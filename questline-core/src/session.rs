//! In-memory quest session.
//!
//! A `QuestSession` is created when the quest screen mounts, mutated only by
//! the generation and completion handlers, and dropped on reload. Network
//! calls are split into a `begin`/`finish` pair so that the browser front-end
//! can apply each half through its reducer while the request is in flight.

use crate::context::{ContextSlot, UserContext};
use crate::error::{Operation, QuestError};
use crate::progress::{SessionProgress, progress_percent};
use crate::quest::{Objective, Quest};
use chrono::{DateTime, Utc};

/// Coarse lifecycle of the quest screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestPhase {
    NoQuest,
    Loading,
    QuestActive,
}

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Journey,
    History,
    Rewards,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Journey, Self::History, Self::Rewards];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Journey => "Journey",
            Self::History => "History",
            Self::Rewards => "Rewards",
        }
    }
}

/// A completion the session has agreed to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub quest_id: String,
    pub objective: Objective,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestSession {
    pub user_context: ContextSlot,
    pub quest: Option<Quest>,
    pub loading: bool,
    pub error: Option<String>,
    pub progress: SessionProgress,
    pub active_tab: Tab,
}

impl QuestSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> QuestPhase {
        if self.loading {
            QuestPhase::Loading
        } else if self.quest.is_some() {
            QuestPhase::QuestActive
        } else {
            QuestPhase::NoQuest
        }
    }

    pub fn apply_user_context(&mut self, result: Result<UserContext, QuestError>) {
        match result {
            Ok(ctx) => {
                log::debug!("user context loaded");
                self.user_context = ContextSlot::Loaded(ctx);
            }
            Err(err) => {
                log::warn!("user context fetch failed: {err}");
                self.error = Some(err.user_message(Operation::LoadContext));
            }
        }
    }

    /// Start a quest generation. Returns `false` if one is already running.
    pub fn begin_generation(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.progress.reset_for_new_quest();
        true
    }

    pub fn finish_generation(&mut self, result: Result<Quest, QuestError>) {
        self.loading = false;
        match result {
            Ok(quest) => {
                log::debug!(
                    "quest {} generated with {} objectives",
                    quest.quest_id,
                    quest.objectives.len()
                );
                self.progress.reset_for_new_quest();
                self.quest = Some(quest);
            }
            Err(err) => {
                log::warn!("quest generation failed: {err}");
                self.error = Some(err.user_message(Operation::GenerateQuest));
            }
        }
    }

    /// Decide whether clicking `objective_id` should hit the backend.
    ///
    /// `None` when there is no quest, the id is not part of it, or it has
    /// already been completed.
    #[must_use]
    pub fn completion_request(&self, objective_id: &str) -> Option<CompletionRequest> {
        let quest = self.quest.as_ref()?;
        if self.progress.is_completed(objective_id) {
            return None;
        }
        let objective = quest.objective(objective_id)?;
        Some(CompletionRequest {
            quest_id: quest.quest_id.clone(),
            objective: objective.clone(),
        })
    }

    /// Apply the backend's answer to a completion request.
    ///
    /// Returns the platform URL to open when the completion was recorded. A
    /// failed request only sets the error; points, streak and the completion
    /// set stay as they were.
    pub fn finish_completion(
        &mut self,
        request: &CompletionRequest,
        result: Result<(), QuestError>,
        now: DateTime<Utc>,
    ) -> Option<String> {
        if let Err(err) = result {
            log::warn!(
                "completion of {} failed: {err}",
                request.objective.id
            );
            self.error = Some(err.user_message(Operation::CompleteTask));
            return None;
        }
        let current = self.quest.as_ref()?;
        if current.quest_id != request.quest_id || !current.contains(&request.objective.id) {
            log::debug!(
                "ignoring completion for stale quest {}",
                request.quest_id
            );
            return None;
        }
        if !self.progress.record(&request.objective, now) {
            return None;
        }
        log::debug!(
            "objective {} completed (+{} points, streak {})",
            request.objective.id,
            request.objective.points,
            self.progress.streak
        );
        Some(request.objective.platform.url().to_string())
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.quest.as_ref().map_or(0, |quest| {
            let done = quest
                .objectives
                .iter()
                .filter(|objective| self.progress.is_completed(&objective.id))
                .count();
            progress_percent(done, quest.objectives.len())
        })
    }

    #[must_use]
    pub fn is_completed(&self, objective_id: &str) -> bool {
        self.progress.is_completed(objective_id)
    }

    /// Objectives of the current quest already completed, in quest order.
    #[must_use]
    pub fn completed_objectives(&self) -> Vec<&Objective> {
        self.quest
            .as_ref()
            .map(|quest| {
                quest
                    .objectives
                    .iter()
                    .filter(|objective| self.progress.is_completed(&objective.id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True once every objective of a non-empty quest is done.
    #[must_use]
    pub fn quest_finished(&self) -> bool {
        self.quest.as_ref().is_some_and(|quest| {
            !quest.objectives.is_empty()
                && quest
                    .objectives
                    .iter()
                    .all(|objective| self.progress.is_completed(&objective.id))
        })
    }

    pub const fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
