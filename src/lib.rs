//! Terminal falling-block puzzle game.
//!
//! The crate is split into a pure, deterministic game core and thin
//! terminal-facing layers around it:
//!
//! - [`core`]: field, pieces, bag randomizer, and the game state machine.
//!   No I/O, no clocks; drivers feed it commands and timestamps.
//! - [`input`]: crossterm key events mapped onto game commands.
//! - [`term`]: framebuffer-based renderer for raw-mode terminals.
//! - [`types`]: shared kinds, commands, and constants.
//!
//! # Example
//!
//! ```
//! use blockfall::core::GameState;
//! use blockfall::types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.handle_input(Command::MoveLeft, 0);
//! game.handle_input(Command::HardDrop, 0);
//!
//! // Every lock scores at least the flat lock bonus.
//! assert!(game.score() > 0);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
