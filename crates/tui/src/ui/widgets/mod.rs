//! Shared UI widgets for common rendering patterns.
//!
//! Loading, empty, and error states, pagination controls, KPI cards, and the
//! chart renderers used across the screens.

pub mod cards;
pub mod charts;
pub mod empty;
pub mod loading;
pub mod pager;

pub use cards::render_stat_card;
pub use empty::{render_empty_state, render_error_state};
pub use loading::render_loading_state;
pub use pager::render_pager;
