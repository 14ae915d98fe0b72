//! Terminal input mapping.
//!
//! Independent of any UI framework: this module only turns `crossterm`
//! key events into [`crate::types::Command`] values. Session-level keys
//! (quit, restart) are exposed beside the command mapping because they
//! belong to the driver, not to the game core.

pub mod map;

pub use map::{is_restart, map_key_event, should_quit};
