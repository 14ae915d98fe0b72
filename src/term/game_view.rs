//! GameView: paints a [`GameState`] into a framebuffer.
//!
//! Pure (no I/O), so layout and cell placement can be unit-tested.
//! Locked cells render in a uniform gray - the field does not remember
//! which kind filled a cell - while the falling piece, the hold box, and
//! the lookahead previews use their kind colors.

use crate::core::pieces::Shape;
use crate::core::GameState;
use crate::term::fb::{FrameBuffer, Glyph, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(24, 24, 32);
const LOCKED: Rgb = Rgb::new(190, 190, 200);
const BORDER: Rgb = Rgb::new(150, 150, 160);
const LABEL: Rgb = Rgb::new(220, 220, 220);
const VALUE: Rgb = Rgb::new(180, 180, 190);

pub struct GameView {
    /// Terminal columns per field cell; 2 compensates for glyph aspect.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the game into a fresh framebuffer sized to the viewport.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field = game.field();
        let board_w = field.width() as u16 * self.cell_w;
        let board_h = field.height() as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);

        // Locked stack and empty grid.
        for y in 0..field.height() {
            for x in 0..field.width() {
                let glyph = if field.filled(x, y) {
                    Glyph::new('█', LOCKED, BOARD_BG)
                } else {
                    Glyph::new('·', Rgb::new(60, 60, 72), BOARD_BG)
                };
                self.draw_field_cell(&mut fb, start_x, start_y, x as u16, y as u16, glyph);
            }
        }

        // The falling piece; rows above the field stay invisible.
        if let Some(piece) = game.current() {
            let color = kind_color(piece.kind);
            for (x, y) in piece.cells() {
                if y >= 0 && y < field.height() && x >= 0 && x < field.width() {
                    let glyph = Glyph::new('█', color, BOARD_BG);
                    self.draw_field_cell(&mut fb, start_x, start_y, x as u16, y as u16, glyph);
                }
            }
        }

        self.draw_hold_and_next(&mut fb, game, start_x, start_y);
        self.draw_scores(&mut fb, game, viewport, start_x + frame_w, start_y);

        if game.game_over() {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if game.paused() {
            self.draw_banner(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let edge = |ch| Glyph::new(ch, BORDER, Rgb::new(0, 0, 0));

        fb.set(x, y, edge('┌'));
        fb.set(x + w - 1, y, edge('┐'));
        fb.set(x, y + h - 1, edge('└'));
        fb.set(x + w - 1, y + h - 1, edge('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, edge('─'));
            fb.set(x + dx, y + h - 1, edge('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, edge('│'));
            fb.set(x + w - 1, y + dy, edge('│'));
        }
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        glyph: Glyph,
    ) {
        fb.fill_rect(start_x + 1 + x * self.cell_w, start_y + 1 + y, self.cell_w, 1, glyph);
    }

    /// HOLD box and the two lookahead previews, left of the board.
    fn draw_hold_and_next(&self, fb: &mut FrameBuffer, game: &GameState, start_x: u16, start_y: u16) {
        let panel_w = 4 * self.cell_w + 1;
        let Some(panel_x) = start_x.checked_sub(panel_w + 1) else {
            return;
        };

        fb.put_str(panel_x, start_y, "HOLD", LABEL, true);
        match game.hold_piece() {
            Some(piece) => {
                self.draw_shape_preview(fb, panel_x, start_y + 1, &piece.shape, kind_color(piece.kind))
            }
            None => fb.put_str(panel_x, start_y + 2, "-", VALUE, false),
        }

        fb.put_str(panel_x, start_y + 6, "NEXT", LABEL, true);
        for (i, kind) in game.next_queue().iter().enumerate() {
            let shape = crate::core::base_shape(*kind);
            self.draw_shape_preview(
                fb,
                panel_x,
                start_y + 7 + 3 * i as u16,
                &shape,
                kind_color(*kind),
            );
        }
    }

    /// Draw a shape into a preview slot, one terminal row per shape row.
    fn draw_shape_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, color: Rgb) {
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                if shape.filled(r, c) {
                    fb.fill_rect(
                        x + c as u16 * self.cell_w,
                        y + r as u16,
                        self.cell_w,
                        1,
                        Glyph::new('█', color, Rgb::new(0, 0, 0)),
                    );
                }
            }
        }
    }

    fn draw_scores(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right + 2;
        if panel_x + 8 > viewport.width {
            return;
        }
        fb.put_str(panel_x, start_y, "SCORE", LABEL, true);
        fb.put_str(panel_x, start_y + 1, &game.score().to_string(), VALUE, false);
        fb.put_str(panel_x, start_y + 3, "LINES", LABEL, true);
        fb.put_str(panel_x, start_y + 4, &game.lines().to_string(), VALUE, false);
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let y = start_y + frame_h / 2;
        fb.put_str(x, y, text, Rgb::new(255, 255, 255), true);
    }
}

/// Display colors per kind, matching the original palette.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(6, 182, 212),    // cyan
        PieceKind::O => Rgb::new(234, 179, 8),    // yellow
        PieceKind::T => Rgb::new(168, 85, 247),   // purple
        PieceKind::S => Rgb::new(34, 197, 94),    // green
        PieceKind::Z => Rgb::new(239, 68, 68),    // red
        PieceKind::J => Rgb::new(59, 130, 246),   // blue
        PieceKind::L => Rgb::new(249, 115, 22),   // orange
    }
}
