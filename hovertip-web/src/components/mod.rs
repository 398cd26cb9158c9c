pub mod host;
pub mod trigger;

pub use host::{TooltipHost, TooltipHostProps};
pub use trigger::{TooltipTrigger, TooltipTriggerProps};
