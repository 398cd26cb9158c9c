//! Event wiring between the DOM and the tooltip controller.
//!
//! One [`Installation`] owns every listener it attached. Dropping it detaches
//! them and removes any tooltip still on the page. The page-wide installation
//! used by the wasm entry points lives in a thread-local slot, so installing
//! again replaces the previous controller instead of stacking a second one.
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use hovertip_core::{ConfigError, FadeTimer, TooltipConfig, TooltipController, TooltipPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;
use crate::surface::{DomSurface, SurfaceError};

/// Id of the optional inline JSON config element.
pub const INLINE_CONFIG_ID: &str = "hovertip-config";

pub type SharedController = Rc<RefCell<TooltipController<DomSurface>>>;

#[derive(Debug, thiserror::Error)]
pub enum HovertipError {
    #[error("invalid tooltip config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("no browser window available")]
    NoWindow,
}

impl From<HovertipError> for JsValue {
    fn from(err: HovertipError) -> Self {
        Self::from_str(&err.to_string())
    }
}

pub struct Installation {
    controller: SharedController,
    trigger_count: u32,
    _listeners: Vec<EventListener>,
}

impl Installation {
    #[must_use]
    pub const fn trigger_count(&self) -> u32 {
        self.trigger_count
    }

    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        self.controller.borrow().phase()
    }

    #[must_use]
    pub const fn controller(&self) -> &SharedController {
        &self.controller
    }
}

impl Drop for Installation {
    fn drop(&mut self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.dismiss();
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

/// Bind a tooltip controller to every trigger currently in `document`.
///
/// # Errors
/// Returns an error if the config is invalid, no window is available, or the
/// trigger selector cannot be evaluated.
pub fn install(document: &Document, config: TooltipConfig) -> Result<Installation, HovertipError> {
    config.validate()?;
    let window = dom::window().ok_or(HovertipError::NoWindow)?;
    let triggers = collect_triggers(document, &config.trigger_selector)?;

    let surface = DomSurface::new(window.clone(), document.clone(), config.clone());
    let controller: SharedController =
        Rc::new(RefCell::new(TooltipController::new(surface, config)));

    let mut listeners = Vec::with_capacity(triggers.len() * 2 + 2);
    for trigger in &triggers {
        listeners.push(enter_listener(&controller, trigger));
        listeners.push(leave_listener(&controller, trigger));
    }

    let on_scroll = Rc::clone(&controller);
    listeners.push(EventListener::new(&window, "scroll", move |_| {
        on_scroll.borrow_mut().on_scroll();
    }));
    let on_click = Rc::clone(&controller);
    listeners.push(EventListener::new(document, "click", move |_| {
        on_click.borrow_mut().on_document_click();
    }));

    let trigger_count = u32::try_from(triggers.len()).unwrap_or(u32::MAX);
    gloo::console::log!("Tooltip script loaded. Found triggers:", trigger_count);
    log::debug!("attached {} listeners", listeners.len());

    Ok(Installation {
        controller,
        trigger_count,
        _listeners: listeners,
    })
}

/// Install as the page-wide controller, replacing any previous one.
///
/// Returns the number of triggers found.
///
/// # Errors
/// Returns an error if [`install`] fails; the previous installation is kept.
pub fn activate(document: &Document, config: TooltipConfig) -> Result<u32, HovertipError> {
    let installation = install(document, config)?;
    let count = installation.trigger_count();
    let previous = ACTIVE.with(|slot| slot.replace(Some(installation)));
    drop(previous);
    Ok(count)
}

/// Tear down the page-wide controller. Returns whether one was active.
pub fn deactivate() -> bool {
    ACTIVE.with(|slot| slot.take()).is_some()
}

/// Phase of the page-wide controller, if installed.
#[must_use]
pub fn active_phase() -> Option<TooltipPhase> {
    ACTIVE.with(|slot| slot.borrow().as_ref().map(Installation::phase))
}

/// Run [`activate`] once the document has been parsed.
///
/// `make_config` is evaluated at that point, so it can read markup that
/// appears after the script tag.
pub fn install_when_ready<F>(make_config: F)
where
    F: FnOnce(&Document) -> TooltipConfig + 'static,
{
    let Some(document) = dom::document() else {
        log::warn!("no document available; tooltips disabled");
        return;
    };

    if dom::document_parsed(&document) {
        let config = make_config(&document);
        report(activate(&document, config));
        return;
    }

    install_on_content_loaded(&document, make_config);
}

/// Defer [`activate`] until `document` fires `DOMContentLoaded`.
pub fn install_on_content_loaded<F>(document: &Document, make_config: F)
where
    F: FnOnce(&Document) -> TooltipConfig + 'static,
{
    let target = document.clone();
    EventListener::once(document, "DOMContentLoaded", move |_| {
        let config = make_config(&target);
        report(activate(&target, config));
    })
    .forget();
}

/// Read the inline JSON config, falling back to defaults when it is absent
/// or invalid.
#[must_use]
pub fn inline_config(document: &Document) -> TooltipConfig {
    let Some(json) = document
        .get_element_by_id(INLINE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return TooltipConfig::default();
    };

    TooltipConfig::from_json(&json).unwrap_or_else(|err| {
        log::warn!("ignoring #{INLINE_CONFIG_ID}: {err}");
        TooltipConfig::default()
    })
}

fn report(result: Result<u32, HovertipError>) {
    if let Err(err) = result {
        dom::console_error(&format!("hovertip: {err}"));
    }
}

fn collect_triggers(document: &Document, selector: &str) -> Result<Vec<Element>, SurfaceError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn enter_listener(controller: &SharedController, trigger: &Element) -> EventListener {
    let controller = Rc::clone(controller);
    let target = trigger.clone();
    EventListener::new(trigger, "mouseenter", move |_| {
        controller.borrow_mut().on_trigger_enter(&target);
    })
}

fn leave_listener(controller: &SharedController, trigger: &Element) -> EventListener {
    let controller = Rc::clone(controller);
    EventListener::new(trigger, "mouseleave", move |_| {
        let timer = controller.borrow_mut().on_trigger_leave();
        if let Some(timer) = timer {
            schedule_fade(&controller, timer);
        }
    })
}

fn schedule_fade(controller: &SharedController, timer: FadeTimer) {
    let controller = Rc::downgrade(controller);
    Timeout::new(timer.delay_ms, move || {
        if let Some(controller) = controller.upgrade() {
            controller.borrow_mut().on_fade_elapsed(timer.id);
        }
    })
    .forget();
}
