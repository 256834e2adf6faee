use crate::api::WebBackend;
use crate::app::state::{SessionAction, SessionHandle};
use chrono::Utc;
use questline_core::{QuestBackend, Tab};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Shared transport and identity for every handler on the screen.
#[derive(Clone)]
pub struct Backend {
    pub api: Rc<WebBackend>,
    pub user_id: Rc<str>,
}

impl Backend {
    #[must_use]
    pub fn from_config() -> Self {
        Self {
            api: Rc::new(WebBackend::default()),
            user_id: Rc::from(crate::config::user_id()),
        }
    }
}

#[derive(Clone)]
pub struct AppHandlers {
    pub generate: Callback<()>,
    pub task_click: Callback<String>,
    pub select_tab: Callback<Tab>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(store: &SessionHandle, backend: &Backend) -> Self {
        Self {
            generate: build_generate(store, backend),
            task_click: build_task_click(store, backend),
            select_tab: build_select_tab(store),
        }
    }
}

/// Fetch the customer context once, on mount.
pub fn load_user_context(store: &SessionHandle, backend: &Backend) {
    let store = store.clone();
    let backend = backend.clone();
    spawn_local(async move {
        let result = backend.api.fetch_user_context(&backend.user_id).await;
        store.dispatch(SessionAction::ContextLoaded(result));
    });
}

fn build_generate(store: &SessionHandle, backend: &Backend) -> Callback<()> {
    let store = store.clone();
    let backend = backend.clone();
    Callback::from(move |()| {
        if store.session.loading {
            return;
        }
        store.dispatch(SessionAction::GenerationStarted);
        let store = store.clone();
        let backend = backend.clone();
        spawn_local(async move {
            let result = backend.api.generate_quest(&backend.user_id).await;
            store.dispatch(SessionAction::GenerationFinished(result));
        });
    })
}

fn build_task_click(store: &SessionHandle, backend: &Backend) -> Callback<String> {
    let store = store.clone();
    let backend = backend.clone();
    Callback::from(move |objective_id: String| {
        let Some(request) = store.session.completion_request(&objective_id) else {
            log::debug!("ignoring click on {objective_id}");
            return;
        };
        let store = store.clone();
        let backend = backend.clone();
        spawn_local(async move {
            let result = backend
                .api
                .complete_quest(&backend.user_id, &request.quest_id)
                .await;
            store.dispatch(SessionAction::CompletionFinished {
                request,
                result,
                now: Utc::now(),
            });
        });
    })
}

fn build_select_tab(store: &SessionHandle) -> Callback<Tab> {
    let store = store.clone();
    Callback::from(move |tab: Tab| store.dispatch(SessionAction::SelectTab(tab)))
}
