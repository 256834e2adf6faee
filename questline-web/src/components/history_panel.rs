use crate::components::icon::{Glyph, Icon};
use questline_core::Objective;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Completed objectives of the current quest, in quest order.
    pub completed: Vec<Objective>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(p: &Props) -> Html {
    if p.completed.is_empty() {
        return html! {
            <div class="p-4">
                <p class="text-sm text-gray-500 text-center">{ "No completed tasks yet." }</p>
            </div>
        };
    }
    html! {
        <div class="p-4">
            <ul class="flex flex-col gap-3">
                { for p.completed.iter().map(|objective| html! {
                    <li class="bg-white rounded-xl p-4 shadow-sm flex items-center gap-3">
                        <Icon glyph={Glyph::CheckCircle} class={classes!("w-5", "h-5", "text-green-500")} />
                        <div class="flex-1">
                            <div class="font-medium text-gray-900">{ objective.description.clone() }</div>
                            <div class="text-xs text-gray-500">{ objective.platform.to_string() }</div>
                        </div>
                        <span class="text-sm text-yellow-500">{ format!("+{}", objective.points) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
