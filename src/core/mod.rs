//! Core game logic - pure, deterministic, and testable.
//!
//! This module contains every game rule and all state management. It has
//! no dependencies on UI, timers, or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed and the same command/tick sequence
//!   produce identical games
//! - **Testable**: component behavior is unit-tested in place, the state
//!   machine end-to-end in `tests/`
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module structure
//!
//! - [`bag`]: 7-bag random piece generation for fair distribution
//! - [`config`]: validated field dimensions
//! - [`field`]: play-field grid with collision queries and row clearing
//! - [`game`]: the state machine (spawn, fall, lock, clear, hold, score)
//! - [`pieces`]: shape matrices and matrix rotation
//! - [`scoring`]: score and gravity-interval formulas
//!
//! # Game rules
//!
//! - **7-bag randomizer**: pieces are drawn from a shuffled bag of all
//!   seven kinds, so no kind ever drought for more than 12 draws
//! - **Plain rotation**: a rotation is a matrix transform tried in place;
//!   if the result does not fit it is rejected outright (no wall kicks)
//! - **Lock delay**: a piece resting on the stack has a 500ms grace
//!   window, tracked as an absolute deadline
//! - **Hold**: one piece can be set aside per lock
//! - **Scoring**: `100 x rows + 10` per lock, plus 2 points per row of
//!   hard-drop descent
//!
//! Drivers call [`GameState::tick`] on their gravity cadence (see
//! [`GameState::gravity_interval_ms`]) and [`GameState::handle_input`]
//! for player commands; both take the current time in milliseconds.

pub mod bag;
pub mod config;
pub mod field;
pub mod game;
pub mod pieces;
pub mod scoring;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use config::{ConfigError, GameConfig};
pub use field::Field;
pub use game::GameState;
pub use pieces::{base_shape, Piece, Shape};
