use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipTriggerProps {
    /// Tooltip text; an empty string renders the trigger without a payload.
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in the default trigger markup
/// (`class="tooltip-trigger"` plus `data-tooltip`).
#[function_component(TooltipTrigger)]
pub fn tooltip_trigger(props: &TooltipTriggerProps) -> Html {
    let class = classes!("tooltip-trigger", props.class.clone());
    let tip = (!props.text.is_empty()).then(|| props.text.clone());
    html! {
        <span class={class} data-tooltip={tip}>
            { for props.children.iter() }
        </span>
    }
}
