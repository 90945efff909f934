//! Configuration types for the LAP workspace.

mod connection;
mod theme;

pub use connection::{Config, ConnectionConfig, ListDefaults};
pub use theme::{ColorTheme, Theme};
