use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone, Default)]
pub struct AlertProps {
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let class = f::class_list(
        &["relative", "w-full", "rounded-lg", "border", "p-4"],
        &props.class,
    );
    f::html! {
        <div role="alert" class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[f::function_component(AlertTitle)]
pub fn alert_title(props: &AlertProps) -> f::Html {
    let class = f::class_list(
        &["mb-1", "font-medium", "leading-none", "tracking-tight"],
        &props.class,
    );
    f::html! {
        <h5 class={class}>
            { for props.children.iter() }
        </h5>
    }
}

#[f::function_component(AlertDescription)]
pub fn alert_description(props: &AlertProps) -> f::Html {
    let class = f::class_list(&["text-sm", "[&_p]:leading-relaxed"], &props.class);
    f::html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}
