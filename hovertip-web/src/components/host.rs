use hovertip_core::TooltipConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipHostProps {
    #[prop_or_default]
    pub config: TooltipConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Binds a tooltip controller to the triggers present once its children have
/// mounted, and releases it on unmount.
///
/// Triggers are collected when the host mounts or its config changes; triggers
/// added by later re-renders are not picked up.
#[function_component(TooltipHost)]
pub fn tooltip_host(props: &TooltipHostProps) -> Html {
    use_effect_with(props.config.clone(), |config| {
        let installation = crate::dom::document().and_then(|doc| {
            crate::binding::install(&doc, config.clone())
                .map_err(|err| log::warn!("tooltip host disabled: {err}"))
                .ok()
        });
        move || drop(installation)
    });

    html! { <>{ for props.children.iter() }</> }
}
