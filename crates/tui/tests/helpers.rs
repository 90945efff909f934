//! Test helpers for TUI testing.
//!
//! Key event builders and fixture-backed pages for driving `App` without a
//! terminal or network.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lap_client::Page;
use lap_client::testing::load_fixture;
use serde::de::DeserializeOwned;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type a string one key at a time, returning the last action produced.
pub fn type_text(app: &mut lap_tui::App, text: &str) -> Option<lap_tui::Action> {
    let mut last = None;
    for c in text.chars() {
        last = app.handle_input(key(c));
    }
    last
}

/// A page decoded from a client fixture.
pub fn fixture_page<T: DeserializeOwned>(fixture_path: &str) -> Page<T> {
    Page::from_value(load_fixture(fixture_path), None).expect("fixture should decode")
}
