//! Terminal rendering.
//!
//! A small game-oriented rendering layer: the game state is painted into
//! a plain framebuffer of styled glyphs, and a terminal backend flushes
//! that buffer with diff-based redraws. Keeping the buffer step pure
//! makes the view testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
