//! UI rendering modules for the TUI.
//!
//! Screen renderers, overlays and widgets are kept apart from the app state;
//! each takes the slice of state it draws plus the theme.

pub mod popup;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
