use chrono::{DateTime, Utc};
use questline_core::{CompletionRequest, Quest, QuestError, QuestSession, Tab, UserContext};
use std::rc::Rc;
use yew::prelude::*;

/// A platform page the screen should open after a recorded completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Bumped on every launch so the same URL opens again.
    pub seq: u64,
    pub url: String,
}

#[derive(Debug)]
pub enum SessionAction {
    ContextLoaded(Result<UserContext, QuestError>),
    GenerationStarted,
    GenerationFinished(Result<Quest, QuestError>),
    CompletionFinished {
        request: CompletionRequest,
        result: Result<(), QuestError>,
        now: DateTime<Utc>,
    },
    SelectTab(Tab),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    pub session: QuestSession,
    pub launch: Option<Launch>,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::ContextLoaded(result) => next.session.apply_user_context(result),
            SessionAction::GenerationStarted => {
                if !next.session.begin_generation() {
                    return self;
                }
            }
            SessionAction::GenerationFinished(result) => next.session.finish_generation(result),
            SessionAction::CompletionFinished {
                request,
                result,
                now,
            } => {
                if let Some(url) = next.session.finish_completion(&request, result, now) {
                    let seq = next.launch.as_ref().map_or(1, |launch| launch.seq + 1);
                    next.launch = Some(Launch { seq, url });
                }
            }
            SessionAction::SelectTab(tab) => next.session.select_tab(tab),
        }
        Rc::new(next)
    }
}

pub type SessionHandle = UseReducerHandle<SessionStore>;

#[hook]
pub fn use_session_store() -> SessionHandle {
    use_reducer(SessionStore::default)
}
