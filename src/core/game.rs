//! The game state machine.
//!
//! Orchestrates the spawn -> fall -> lock -> clear -> spawn cycle plus
//! hold, pause, scoring, and game over. The machine owns the field, the
//! bag, and the single current piece; drivers own the clock and call in
//! with timestamps.
//!
//! Two entry points:
//!
//! - [`GameState::handle_input`] for discrete player commands
//! - [`GameState::tick`] for gravity, on the cadence reported by
//!   [`GameState::gravity_interval_ms`]
//!
//! Both are synchronous and must be serialized by the caller; nothing in
//! here runs on its own.
//!
//! # Lock delay
//!
//! When a piece first fails to move down it is not locked: a deadline is
//! armed at `now + 500ms` and the piece stays live (it can still move,
//! rotate, or be held). Further blocked drops before the deadline do
//! nothing - the deadline is an absolute timestamp and is *not* pushed
//! back by repeated input. Only a successful downward move disarms it.
//! The first blocked drop at or past the deadline locks the piece. The
//! deadline is checked lazily on the next tick or soft drop, so late or
//! irregular ticks cannot lose a lock or lock twice.

use crate::core::bag::Bag;
use crate::core::config::GameConfig;
use crate::core::field::Field;
use crate::core::pieces::Piece;
use crate::core::scoring;
use crate::types::{Command, PieceKind, TimeMs, LOCK_DELAY_MS, LOOKAHEAD};

/// Complete game state. Created by [`GameState::new`], reset wholesale by
/// [`GameState::reset`].
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    field: Field,
    bag: Bag,
    current: Option<Piece>,
    hold: Option<Piece>,
    next_queue: [PieceKind; LOOKAHEAD],
    score: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
    can_hold: bool,
    lock_deadline: Option<TimeMs>,
}

impl GameState {
    /// A fresh game on the default 10x20 field, first piece already
    /// spawned.
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// A fresh game on a custom (already validated) field.
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        let mut bag = Bag::new(seed);
        // The field is empty, so the first spawn cannot collide.
        let current = Piece::spawn(bag.draw(), config.width());
        let next_queue = bag.peek_lookahead();
        Self {
            field: Field::new(&config),
            config,
            bag,
            current: Some(current),
            hold: None,
            next_queue,
            score: 0,
            lines: 0,
            game_over: false,
            paused: false,
            can_hold: true,
            lock_deadline: None,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The falling piece. Absent only after game over.
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn hold_piece(&self) -> Option<Piece> {
        self.hold
    }

    pub fn next_queue(&self) -> &[PieceKind; LOOKAHEAD] {
        &self.next_queue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// The armed lock deadline, if the current piece is resting.
    pub fn lock_deadline(&self) -> Option<TimeMs> {
        self.lock_deadline
    }

    /// Current gravity interval for the driver's cadence. Shrinks as
    /// lines accumulate; drivers should re-read it after every lock.
    pub fn gravity_interval_ms(&self) -> u64 {
        scoring::gravity_interval_ms(self.lines)
    }

    /// Apply one player command at time `now`.
    ///
    /// Everything is ignored after game over. While paused, only
    /// [`Command::TogglePause`] has an effect.
    pub fn handle_input(&mut self, command: Command, now: TimeMs) {
        if self.game_over {
            return;
        }
        if command == Command::TogglePause {
            self.paused = !self.paused;
            return;
        }
        if self.paused || self.current.is_none() {
            return;
        }
        match command {
            Command::MoveLeft => {
                self.try_shift(-1, 0);
            }
            Command::MoveRight => {
                self.try_shift(1, 0);
            }
            Command::SoftDrop => self.step_down(now),
            Command::HardDrop => self.hard_drop(),
            Command::RotateLeft => self.try_rotate(false),
            Command::RotateRight => self.try_rotate(true),
            Command::Hold => self.hold_swap(),
            Command::TogglePause => {}
        }
    }

    /// One gravity step at time `now`. No-op while paused, after game
    /// over, or without a current piece.
    pub fn tick(&mut self, now: TimeMs) {
        if self.game_over || self.paused || self.current.is_none() {
            return;
        }
        self.step_down(now);
    }

    /// Restart from scratch: empty field, fresh bag (forked from the
    /// current RNG stream), zeroed score and flags, first piece spawned.
    pub fn reset(&mut self) {
        let seed = self.bag.fork_seed();
        *self = Self::with_config(self.config, seed);
    }

    /// Shift the current piece if the target position is legal.
    fn try_shift(&mut self, dx: i16, dy: i16) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        let moved = current.shifted(dx, dy);
        if self.field.is_valid(&moved) {
            self.current = Some(moved);
            true
        } else {
            false
        }
    }

    /// Rotate the current piece in place; an ill-fitting rotation is
    /// rejected and the piece stays as it was.
    fn try_rotate(&mut self, clockwise: bool) {
        let Some(current) = self.current else {
            return;
        };
        let rotated = if clockwise {
            current.rotated_cw()
        } else {
            current.rotated_ccw()
        };
        if self.field.is_valid(&rotated) {
            self.current = Some(rotated);
        }
    }

    /// One downward step, shared by gravity and soft drop.
    ///
    /// A successful move disarms any lock deadline. A blocked move arms
    /// the deadline on first contact, waits while `now` is short of it,
    /// and locks once `now` reaches it.
    fn step_down(&mut self, now: TimeMs) {
        if self.try_shift(0, 1) {
            self.lock_deadline = None;
            return;
        }
        match self.lock_deadline {
            None => self.lock_deadline = Some(now + LOCK_DELAY_MS),
            Some(deadline) if now < deadline => {}
            Some(_) => self.lock_current(),
        }
    }

    /// Stash or swap the current piece. Ignored until the next lock once
    /// used.
    fn hold_swap(&mut self) {
        if !self.can_hold {
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        let stashed = Piece {
            x: 0,
            y: 0,
            ..current
        };
        self.current = Some(match self.hold.take() {
            Some(held) => held.respawn_at_top(self.field.width()),
            None => self.next_piece(),
        });
        self.hold = Some(stashed);
        self.can_hold = false;
    }

    /// Drop the current piece as far as it goes, then lock immediately,
    /// paying the per-row descent bonus on top of the lock score.
    fn hard_drop(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        let mut dropped = current;
        let mut distance: u32 = 0;
        loop {
            let below = dropped.shifted(0, 1);
            if self.field.is_valid(&below) {
                dropped = below;
                distance += 1;
            } else {
                break;
            }
        }
        self.current = Some(dropped);
        self.score += scoring::hard_drop_bonus(distance);
        self.lock_current();
    }

    /// Bake the current piece into the field, clear rows, score, and
    /// bring on the next piece. Sets `game_over` when the next piece has
    /// no room at spawn.
    fn lock_current(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        self.field.place(&current);
        let rows = self.field.clear_full_rows();
        self.score += scoring::lock_score(rows);
        self.lines += rows as u32;
        self.lock_deadline = None;
        self.can_hold = true;

        let next = self.next_piece();
        if self.field.is_valid(&next) {
            self.current = Some(next);
        } else {
            self.game_over = true;
        }
    }

    /// Draw from the bag and refresh the lookahead preview.
    fn next_piece(&mut self) -> Piece {
        let piece = Piece::spawn(self.bag.draw(), self.field.width());
        self.next_queue = self.bag.peek_lookahead();
        piece
    }
}
