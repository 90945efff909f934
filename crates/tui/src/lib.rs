//! LAP TUI Library
//!
//! This library provides the application state, input handling, async side
//! effects, and screen rendering for the LAP procurement terminal dashboard.
//!
//! # Example
//!
//! ```rust
//! use lap_tui::{App, Action, CurrentScreen};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(None, CurrentScreen::Dashboard);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Tab)) {
//!     assert!(matches!(action, Action::NavigateTo(CurrentScreen::Licitacoes)));
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::toast::{Toast, ToastLevel};
