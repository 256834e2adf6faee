use crate::components::icon::{Glyph, Icon};
use questline_core::QuestRewards;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub points: i64,
    pub streak: u32,
    #[prop_or_default]
    pub rewards: Option<QuestRewards>,
    #[prop_or_default]
    pub completed_quests: Option<u32>,
    /// Percentage in `0.0..=100.0` as reported by the backend.
    #[prop_or_default]
    pub completion_rate: Option<f64>,
}

fn stat(label: &'static str, value: String) -> Html {
    html! {
        <div class="bg-white rounded-xl p-4 shadow-sm">
            <div class="text-xs text-gray-500">{ label }</div>
            <div class="text-lg font-bold">{ value }</div>
        </div>
    }
}

fn rate_label(rate: f64) -> String {
    format!("{:.0}%", rate.clamp(0.0, 100.0))
}

#[function_component(RewardsPanel)]
pub fn rewards_panel(p: &Props) -> Html {
    let rewards = p.rewards.as_ref().filter(|r| !r.is_empty());
    html! {
        <div class="p-4 flex flex-col gap-4">
            <div class="grid grid-cols-2 gap-3">
                { stat("Points", p.points.to_string()) }
                { stat("Streak", format!("{} days", p.streak)) }
                if let Some(count) = p.completed_quests {
                    { stat("Quests completed", count.to_string()) }
                }
                if let Some(rate) = p.completion_rate {
                    { stat("Completion rate", rate_label(rate)) }
                }
            </div>
            if let Some(rewards) = rewards {
                <div class="bg-white rounded-xl p-4 shadow-sm">
                    <div class="flex items-center gap-2 mb-2">
                        <Icon glyph={Glyph::Gift} class={classes!("w-5", "h-5", "text-green-500")} />
                        <h3 class="font-semibold">{ "Quest rewards" }</h3>
                    </div>
                    if rewards.xp != 0 {
                        <p class="text-sm">{ format!("{} XP", rewards.xp) }</p>
                    }
                    <ul class="text-sm text-gray-700">
                        { for rewards.vouchers.iter().map(|v| html! { <li>{ format!("Voucher: {v}") }</li> }) }
                        { for rewards.achievements.iter().map(|a| html! { <li>{ format!("Achievement: {a}") }</li> }) }
                    </ul>
                </div>
            } else {
                <p class="text-sm text-gray-500">{ "Complete a quest to unlock rewards." }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::rate_label;
    use questline_core::UserContext;

    #[test]
    fn rate_is_rendered_as_whole_percent() {
        assert_eq!(rate_label(75.6), "76%");
        assert_eq!(rate_label(140.0), "100%");
        assert_eq!(rate_label(-3.0), "0%");
    }

    #[test]
    fn backend_rate_is_already_a_percentage() {
        let context = UserContext::from_json(r#"{"quest_completion_rate": 80.0}"#)
            .expect("context");
        let rate = context.quest_completion_rate.expect("rate");
        assert_eq!(rate_label(rate), "80%");
    }
}
