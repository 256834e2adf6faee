use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Most recent failure, shown above the journey. Renders nothing when clear.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    let Some(message) = p.message.clone() else {
        return Html::default();
    };
    html! {
        <div
            role="alert"
            class="mx-4 mt-4 p-4 bg-red-100 border border-red-400 text-red-700 rounded-xl"
        >
            { message }
        </div>
    }
}
