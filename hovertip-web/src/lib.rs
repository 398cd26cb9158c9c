#![forbid(unsafe_code)]
use hovertip_core::TooltipConfig;
use wasm_bindgen::prelude::*;

pub mod binding;
pub mod components;
pub mod dom;
pub mod logging;
pub mod surface;

pub use binding::{HovertipError, Installation, install};
pub use surface::{DomSurface, SurfaceError};

/// Page-script bootstrap: panic hook, console logging, then install with the
/// inline config once the document is parsed.
///
/// Apps embedding `TooltipHost` skip this and call [`logging::init`] themselves
/// if they want console logging.
pub fn bootstrap_page() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    binding::install_when_ready(binding::inline_config);
}

#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
#[wasm_bindgen(start)]
pub fn start() {
    bootstrap_page();
}

/// Install tooltips for the current page with a config object from JavaScript.
/// `undefined` or `null` selects the defaults. Returns the trigger count.
///
/// # Errors
/// Returns an error string if the config cannot be deserialized or is invalid.
#[wasm_bindgen(js_name = installTooltips)]
pub fn install_tooltips(config: JsValue) -> Result<u32, JsValue> {
    let config: TooltipConfig = if config.is_undefined() || config.is_null() {
        TooltipConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let document = dom::document().ok_or(HovertipError::NoWindow)?;
    Ok(binding::activate(&document, config)?)
}

/// Remove the page-wide tooltip controller and any tooltip it is showing.
#[wasm_bindgen(js_name = uninstallTooltips)]
pub fn uninstall_tooltips() -> bool {
    binding::deactivate()
}
