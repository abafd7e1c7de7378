pub mod display_model;
pub mod display_service;

pub use display_model::{LineDisplay, ToggleState};
pub use display_service::line_display;
