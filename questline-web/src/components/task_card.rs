use crate::components::icon::{Glyph, Icon};
use questline_core::Objective;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub objective: Objective,
    pub completed: bool,
    /// Platform voucher from the customer context.
    #[prop_or_default]
    pub voucher: Option<AttrValue>,
    pub on_start: Callback<String>,
}

#[function_component(TaskCard)]
pub fn task_card(p: &Props) -> Html {
    let objective = &p.objective;
    let colors = objective.platform.color_classes();

    // The objective's own promotion wins over the context voucher.
    let reward = objective
        .promotion
        .clone()
        .map(AttrValue::from)
        .or_else(|| p.voucher.clone());

    let on_click = {
        let on_start = p.on_start.clone();
        let id = objective.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_start.emit(id.clone());
        })
    };

    let status = if p.completed {
        html! { <Icon glyph={Glyph::CheckCircle} class={classes!("w-5", "h-5", "text-green-500")} /> }
    } else {
        html! { <Icon glyph={Glyph::Circle} class={classes!("w-5", "h-5", "text-gray-300")} /> }
    };

    html! {
        <div
            class="bg-white rounded-xl p-4 shadow-sm mb-4 hover:shadow-md transition-all"
            data-objective={objective.id.clone()}
        >
            <div class="flex items-start gap-4">
                <div class={classes!("p-3", "rounded-full", colors)}>
                    <Icon glyph={Glyph::from(objective.platform.icon())} class={classes!("w-6", "h-6")} />
                </div>
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        { status }
                        <span class={classes!("px-2", "py-1", "rounded-full", "text-sm", colors)}>
                            { objective.platform.to_string() }
                        </span>
                    </div>
                    <h3 class="font-medium text-gray-900 mb-2">{ objective.description.clone() }</h3>
                    <div class="flex items-center gap-4 mt-2">
                        <div class="flex items-center text-yellow-500">
                            <Icon glyph={Glyph::Star} class={classes!("w-4", "h-4", "mr-1")} />
                            { format!("{} points", objective.points) }
                        </div>
                        if let Some(reward) = reward {
                            <div class="flex items-center text-green-500">
                                <Icon glyph={Glyph::Gift} class={classes!("w-4", "h-4", "mr-1")} />
                                { reward }
                            </div>
                        }
                    </div>
                    if let Some(location) = objective.location.clone() {
                        <div class="flex items-center gap-1 mt-2 text-sm text-gray-600">
                            <Icon glyph={Glyph::MapPin} class={classes!("w-4", "h-4")} />
                            { location }
                        </div>
                    }
                    if !p.completed {
                        <button
                            type="button"
                            onclick={on_click}
                            class="mt-3 w-full bg-green-500 hover:bg-green-600 text-white py-2 rounded-lg flex items-center justify-center gap-2"
                        >
                            { "Start Task" }
                            <Icon glyph={Glyph::ExternalLink} class={classes!("w-4", "h-4")} />
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
