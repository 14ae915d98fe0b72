//! The play field: a fixed-size grid of filled/empty cells.
//!
//! The field answers collision queries for candidate piece placements and
//! performs row clearing. It stores plain filled flags - a locked cell
//! has no memory of which kind produced it, matching how locked stack is
//! rendered in a uniform color.
//!
//! Coordinates are `(x, y)` with `x` growing rightward and `y` downward.
//! Rows above the field (`y < 0`) are legal piece territory: they are
//! exempt from the occupancy check but still bounded horizontally.

use crate::core::config::GameConfig;
use crate::core::pieces::Piece;

/// Fixed `width x height` grid of filled flags, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: i16,
    height: i16,
    cells: Vec<bool>,
}

impl Field {
    /// An all-empty field with the configured dimensions.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width(),
            height: config.height(),
            cells: vec![false; config.width() as usize * config.height() as usize],
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Whether the in-bounds cell at `(x, y)` is filled. Out-of-bounds
    /// queries are `false`.
    pub fn filled(&self, x: i16, y: i16) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Set a single cell. Out-of-bounds writes are ignored and return
    /// `false`.
    pub fn set(&mut self, x: i16, y: i16, filled: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = filled;
                true
            }
            None => false,
        }
    }

    /// Whether every cell of the piece sits on a legal position.
    ///
    /// A filled piece cell is rejected when its column leaves
    /// `[0, width)`, when its row reaches the floor (`y >= height`), or
    /// when it overlaps a filled field cell. Rows above the field pass
    /// the occupancy check, which lets pieces spawn and rotate while
    /// partially above the visible grid.
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| {
            x >= 0 && x < self.width && y < self.height && (y < 0 || !self.filled(x, y))
        })
    }

    /// Bake the piece into the grid. Cells still above the field
    /// (`y < 0`) are dropped rather than recorded.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, true);
            }
        }
    }

    fn is_row_full(&self, y: i16) -> bool {
        (0..self.width).all(|x| self.filled(x, y))
    }

    /// Remove every full row and slide the rows above it down, restoring
    /// the height with empty rows on top. Returns how many rows went.
    ///
    /// Bottom-up two-pointer compaction: surviving rows keep their
    /// relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height - 1;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                if write_y != read_y {
                    let src = read_y as usize * width;
                    let dst = write_y as usize * width;
                    self.cells.copy_within(src..src + width, dst);
                }
                write_y -= 1;
            }
        }

        // Rows above the last write position become empty.
        for y in 0..=write_y {
            let start = y as usize * width;
            self.cells[start..start + width].fill(false);
        }

        cleared
    }
}
