use crate::components::progress_card::ActiveQuest;
use crate::components::{
    AnotherQuestButton, ErrorBanner, GoPayOfferAlert, HistoryPanel, HomeInterface, PerksSection,
    ProgressCard, RewardsPanel, StartQuestButton, TabBar, TaskCard,
};
use questline_core::{QuestSession, Tab};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: QuestSession,
    #[prop_or_default]
    pub on_generate: Callback<()>,
    #[prop_or_default]
    pub on_task: Callback<String>,
    #[prop_or_default]
    pub on_tab: Callback<Tab>,
}

fn active_quest(session: &QuestSession) -> Option<ActiveQuest> {
    session.quest.as_ref().map(|quest| ActiveQuest {
        percent: session.progress_percent(),
        narrative: quest.narrative.clone().into(),
        title: quest.title.clone().map(AttrValue::from),
    })
}

fn journey_tab(p: &Props) -> Html {
    let session = &p.session;
    let quest_area = session.quest.as_ref().map_or_else(
        || {
            html! { <StartQuestButton loading={session.loading} on_start={p.on_generate.clone()} /> }
        },
        |quest| {
            html! {
                <>
                    { for quest.objectives.iter().map(|objective| {
                        let voucher = session
                            .user_context
                            .voucher_for(&objective.platform)
                            .map(|v| AttrValue::from(v.to_string()));
                        html! {
                            <TaskCard
                                key={objective.id.clone()}
                                objective={objective.clone()}
                                completed={session.is_completed(&objective.id)}
                                {voucher}
                                on_start={p.on_task.clone()}
                            />
                        }
                    }) }
                    if session.quest_finished() {
                        <AnotherQuestButton loading={session.loading} on_start={p.on_generate.clone()} />
                    }
                </>
            }
        },
    );

    html! {
        <div class="p-4">
            <HomeInterface />
            <GoPayOfferAlert />
            <ProgressCard
                points={session.progress.points}
                streak={session.progress.streak}
                quest={active_quest(session)}
            />
            <PerksSection context={session.user_context.clone()} />
            { quest_area }
        </div>
    }
}

/// The whole quest screen as a pure function of the session.
#[function_component(QuestJourneyView)]
pub fn quest_journey_view(p: &Props) -> Html {
    let session = &p.session;
    let body = match session.active_tab {
        Tab::Journey => journey_tab(p),
        Tab::History => html! {
            <HistoryPanel completed={session.completed_objectives().into_iter().cloned().collect::<Vec<_>>()} />
        },
        Tab::Rewards => {
            let ctx = session.user_context.get();
            html! {
                <RewardsPanel
                    points={session.progress.points}
                    streak={session.progress.streak}
                    rewards={session.quest.as_ref().and_then(|q| q.rewards.clone())}
                    completed_quests={ctx.and_then(|c| c.completed_quests)}
                    completion_rate={ctx.and_then(|c| c.quest_completion_rate)}
                />
            }
        }
    };

    html! {
        <div class="max-w-md mx-auto bg-gray-100 min-h-screen pb-16">
            <ErrorBanner message={session.error.clone().map(AttrValue::from)} />
            { body }
            <TabBar active={session.active_tab} on_select={p.on_tab.clone()} />
        </div>
    }
}
