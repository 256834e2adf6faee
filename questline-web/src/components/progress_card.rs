use crate::components::icon::{Glyph, Icon};
use yew::prelude::*;

/// Quest details the card shows once a quest exists.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActiveQuest {
    pub percent: u8,
    pub narrative: AttrValue,
    pub title: Option<AttrValue>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub points: i64,
    pub streak: u32,
    #[prop_or_default]
    pub quest: Option<ActiveQuest>,
}

#[function_component(ProgressCard)]
pub fn progress_card(p: &Props) -> Html {
    let percent_block = p.quest.as_ref().map(|quest| {
        html! {
            <div class="text-right">
                <div class="text-sm text-gray-500">{ "Progress" }</div>
                <div class="text-lg font-bold text-green-500">{ format!("{}%", quest.percent) }</div>
            </div>
        }
    });

    let quest_block = p.quest.as_ref().map(|quest| {
        let bar_style = format!("width: {}%", quest.percent.min(100));
        html! {
            <>
                if let Some(title) = quest.title.clone() {
                    <h3 class="font-semibold text-gray-900">{ title }</h3>
                }
                <div
                    class="h-2 bg-gray-200 rounded-full"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={quest.percent.to_string()}
                >
                    <div class="h-full bg-green-500 rounded-full transition-all" style={bar_style}></div>
                </div>
                <p class="text-sm text-gray-600">{ quest.narrative.clone() }</p>
            </>
        }
    });

    html! {
        <div class="bg-white p-4 rounded-xl mb-6 shadow-sm">
            <div class="flex flex-col gap-4">
                <div class="flex justify-between items-start">
                    <div>
                        <div class="flex items-center gap-2">
                            <Icon glyph={Glyph::Trophy} class={classes!("w-6", "h-6", "text-yellow-500")} />
                            <h2 class="text-xl font-bold">{ format!("{} Points", p.points) }</h2>
                        </div>
                        <div class="text-sm text-gray-500 mt-1">
                            { format!("{} day streak 🔥", p.streak) }
                        </div>
                    </div>
                    { percent_block.unwrap_or_default() }
                </div>
                { quest_block.unwrap_or_default() }
            </div>
        </div>
    }
}
