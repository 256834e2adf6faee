use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use state::{Launch, SessionAction, SessionStore};
pub use view::QuestJourneyView;

#[function_component(App)]
pub fn app() -> Html {
    let store = state::use_session_store();
    let backend = use_memo((), |()| handlers::Backend::from_config());

    {
        let store = store.clone();
        let backend = (*backend).clone();
        use_effect_with((), move |()| handlers::load_user_context(&store, &backend));
    }

    // Open the platform page after each recorded completion.
    use_effect_with(store.launch.clone(), |launch| {
        if let Some(launch) = launch
            && let Err(err) = crate::dom::open_in_new_tab(&launch.url)
        {
            log::warn!(
                "could not open {}: {}",
                launch.url,
                crate::dom::js_error_message(&err)
            );
        }
    });

    let handlers = handlers::AppHandlers::new(&store, &backend);
    html! {
        <QuestJourneyView
            session={store.session.clone()}
            on_generate={handlers.generate}
            on_task={handlers.task_click}
            on_tab={handlers.select_tab}
        />
    }
}
