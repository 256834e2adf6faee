use crate::components::icon::{Glyph, Icon};
use questline_core::Tab;
use yew::prelude::*;

const fn tab_glyph(tab: Tab) -> Glyph {
    match tab {
        Tab::Journey => Glyph::Home,
        Tab::History => Glyph::Clock,
        Tab::Rewards => Glyph::Trophy,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(p: &Props) -> Html {
    html! {
        <nav class="fixed bottom-0 left-0 right-0 bg-white border-t" aria-label="Quest navigation">
            <div class="flex justify-between max-w-md mx-auto" role="tablist">
                { for Tab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let selected = tab == p.active;
                    let tone = if selected { "text-green-500" } else { "text-gray-500" };
                    let onclick = {
                        let on_select = p.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected={selected.to_string()}
                            {onclick}
                            class={classes!("flex-1", "p-3", "text-center", tone)}
                        >
                            <Icon glyph={tab_glyph(tab)} class={classes!("h-5", "w-5", "mx-auto")} />
                            <span class="text-xs mt-1 block">{ tab.label() }</span>
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}
