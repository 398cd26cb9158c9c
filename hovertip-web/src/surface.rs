//! `TooltipSurface` backed by the live DOM.
use hovertip_core::{PositionResult, Rect, ScrollOffset, Size, TooltipConfig, TooltipSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("document has no body")]
    MissingBody,
    #[error("created node is not an HTML element")]
    NotHtml,
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Dom(dom::js_error_message(&value))
    }
}

/// Triggers are plain elements; tooltips are `div`s appended to `<body>`.
pub struct DomSurface {
    window: Window,
    document: Document,
    config: TooltipConfig,
}

impl DomSurface {
    #[must_use]
    pub const fn new(window: Window, document: Document, config: TooltipConfig) -> Self {
        Self {
            window,
            document,
            config,
        }
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

impl TooltipSurface for DomSurface {
    type Trigger = Element;
    type Tooltip = HtmlElement;
    type Error = SurfaceError;

    fn payload(&self, trigger: &Element) -> Result<Option<String>, SurfaceError> {
        Ok(trigger.get_attribute(&self.config.text_attribute))
    }

    fn create_tooltip(&mut self, text: &str) -> Result<HtmlElement, SurfaceError> {
        let tooltip = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::NotHtml)?;
        tooltip.set_class_name(&self.config.shown_class_name());
        tooltip.set_text_content(Some(text));
        self.document
            .body()
            .ok_or(SurfaceError::MissingBody)?
            .append_child(&tooltip)?;
        Ok(tooltip)
    }

    fn measure(&self, tooltip: &HtmlElement) -> Result<Size, SurfaceError> {
        Ok(Size::new(
            f64::from(tooltip.offset_width()),
            f64::from(tooltip.offset_height()),
        ))
    }

    fn trigger_rect(&self, trigger: &Element) -> Result<Rect, SurfaceError> {
        let rect = trigger.get_bounding_client_rect();
        Ok(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn scroll_offset(&self) -> Result<ScrollOffset, SurfaceError> {
        let root = self.document.document_element();
        let x = self
            .window
            .page_x_offset()
            .ok()
            .filter(|v| *v != 0.0)
            .or_else(|| root.as_ref().map(|el| f64::from(el.scroll_left())))
            .unwrap_or_default();
        let y = self
            .window
            .page_y_offset()
            .ok()
            .filter(|v| *v != 0.0)
            .or_else(|| root.as_ref().map(|el| f64::from(el.scroll_top())))
            .unwrap_or_default();
        Ok(ScrollOffset::new(x, y))
    }

    fn viewport_width(&self) -> Result<f64, SurfaceError> {
        self.window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| SurfaceError::Dom("innerWidth is not a number".to_string()))
    }

    fn apply_position(
        &mut self,
        tooltip: &HtmlElement,
        position: &PositionResult,
    ) -> Result<(), SurfaceError> {
        let style = tooltip.style();
        if position.arrow.is_flipped() {
            style.set_property(&self.config.arrow_property, position.arrow.css_value())?;
        } else {
            // Unset falls back to the stylesheet's downward arrow.
            style.remove_property(&self.config.arrow_property)?;
        }
        style.set_property("left", &position.left_px())?;
        style.set_property("top", &position.top_px())?;
        Ok(())
    }

    fn hide(&mut self, tooltip: &HtmlElement) -> Result<(), SurfaceError> {
        tooltip.class_list().remove_1(&self.config.visible_class)?;
        Ok(())
    }

    fn remove(&mut self, tooltip: HtmlElement) {
        tooltip.remove();
    }
}
