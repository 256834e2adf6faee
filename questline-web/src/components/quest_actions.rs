use crate::components::icon::{Glyph, Icon};
use yew::prelude::*;

pub const START_LABEL: &str = "Start New Quest";
pub const LOADING_LABEL: &str = "Creating Journey...";
pub const AGAIN_LABEL: &str = "Start Another Quest";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub loading: bool,
    pub on_start: Callback<()>,
}

/// Shown while no quest exists. Disabled for the duration of a generation.
#[function_component(StartQuestButton)]
pub fn start_quest_button(p: &Props) -> Html {
    let onclick = {
        let on_start = p.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };
    html! {
        <button
            type="button"
            {onclick}
            disabled={p.loading}
            class="w-full bg-green-500 hover:bg-green-600 text-white py-3 rounded-xl disabled:opacity-50"
        >
            if p.loading {
                <div class="flex items-center justify-center">
                    <Icon glyph={Glyph::Loader} class={classes!("mr-2", "h-4", "w-4", "animate-spin")} />
                    { LOADING_LABEL }
                </div>
            } else {
                { START_LABEL }
            }
        </button>
    }
}

/// Offered under the task cards once every objective is done.
#[function_component(AnotherQuestButton)]
pub fn another_quest_button(p: &Props) -> Html {
    let onclick = {
        let on_start = p.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };
    html! {
        <button
            type="button"
            {onclick}
            disabled={p.loading}
            class="w-full border border-green-500 text-green-600 py-3 rounded-xl disabled:opacity-50"
        >
            { if p.loading { LOADING_LABEL } else { AGAIN_LABEL } }
        </button>
    }
}
