//! Occupancy grid - one bit per cell, grown a row at a time.
//!
//! Each row starts on a fresh `u64` word, so a horizontal run of cells is a
//! handful of masked word tests (see `runs.rs`). Width is fixed at
//! construction. Reads past the last row see free cells, which is what lets
//! the first-fit search terminate.

mod runs;

pub struct OccupancyGrid {
    cols: u32,
    rows: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl OccupancyGrid {
    pub fn new(cols: u32) -> Self {
        Self {
            cols,
            rows: 0,
            words_per_row: (cols as usize + 63) >> 6,
            bits: Vec::new(),
        }
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Rows touched so far (not the rendered row count)
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Grow to at least `rows` rows
    pub fn ensure_rows(&mut self, rows: u32) {
        if rows <= self.rows {
            return;
        }
        self.rows = rows;
        self.bits.resize(rows as usize * self.words_per_row, 0);
    }

    #[inline]
    pub fn is_occupied(&self, col: u32, row: u32) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        self.first_taken_in_run(row, col, 1).is_some()
    }

    /// Mark one cell. Columns outside the grid are ignored.
    pub fn occupy(&mut self, col: u32, row: u32) {
        self.fill(col, row, 1, 1);
    }

    /// Can a `w x h` rect with top-left `(col, row)` go here without touching
    /// an occupied cell?
    pub fn fits(&self, col: u32, row: u32, w: u32, h: u32) -> bool {
        if u64::from(col) + u64::from(w) > u64::from(self.cols) {
            return false;
        }
        // Nothing below the last touched row is occupied
        let row_end = row.saturating_add(h).min(self.rows);
        (row..row_end).all(|r| self.first_taken_in_run(r, col, w).is_none())
    }

    /// Mark a `w x h` rect. Columns past the right edge are dropped; rows grow.
    pub fn fill(&mut self, col: u32, row: u32, w: u32, h: u32) {
        let w = self.clip_width(col, w);
        if w == 0 || h == 0 {
            return;
        }
        let row_end = row.saturating_add(h);
        self.ensure_rows(row_end);
        for r in row..row_end {
            self.take_run(r, col, w);
        }
    }

    /// First occupied cell inside a rect, in row-major order
    pub fn first_occupied_in(&self, col: u32, row: u32, w: u32, h: u32) -> Option<(u32, u32)> {
        let w = self.clip_width(col, w);
        if w == 0 {
            return None;
        }
        let row_end = row.saturating_add(h).min(self.rows);
        (row..row_end).find_map(|r| self.first_taken_in_run(r, col, w).map(|c| (c, r)))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Part of `w` that lies inside the grid when starting at `col`
    #[inline]
    fn clip_width(&self, col: u32, w: u32) -> u32 {
        if col >= self.cols {
            0
        } else {
            w.min(self.cols - col)
        }
    }
}
