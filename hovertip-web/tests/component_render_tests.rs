use futures::executor::block_on;
use hovertip_core::TooltipConfig;
use hovertip_web::components::{TooltipHost, TooltipHostProps, TooltipTrigger, TooltipTriggerProps};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Classes, LocalServerRenderer, html};

fn trigger_props(text: &'static str) -> TooltipTriggerProps {
    TooltipTriggerProps {
        text: AttrValue::from(text),
        class: Classes::from("metric"),
        children: ChildrenRenderer::new(vec![html! { "Revenue" }]),
    }
}

#[test]
fn trigger_renders_marker_class_and_payload() {
    let html = block_on(
        LocalServerRenderer::<TooltipTrigger>::with_props(trigger_props("Net margin")).render(),
    );
    assert!(html.contains("tooltip-trigger"));
    assert!(html.contains("metric"));
    assert!(html.contains(r#"data-tooltip="Net margin""#));
    assert!(html.contains("Revenue"));
}

#[test]
fn trigger_without_text_omits_payload_attribute() {
    let html = block_on(LocalServerRenderer::<TooltipTrigger>::with_props(trigger_props("")).render());
    assert!(html.contains("tooltip-trigger"));
    assert!(!html.contains("data-tooltip"));
}

#[test]
fn host_renders_children_untouched() {
    let props = TooltipHostProps {
        config: TooltipConfig::default(),
        children: ChildrenRenderer::new(vec![html! {
            <TooltipTrigger text={AttrValue::from("Units shipped")}>{ "Units" }</TooltipTrigger>
        }]),
    };
    let html = block_on(LocalServerRenderer::<TooltipHost>::with_props(props).render());
    assert!(html.contains(r#"data-tooltip="Units shipped""#));
    assert!(html.contains("Units"));
    assert!(!html.contains(r#"class="tooltip show""#));
}
