use super::OccupancyGrid;

/// Split the column run `[col, col + w)` into `(word, mask)` pairs relative
/// to the start of a row.
fn run_words(col: u32, w: u32) -> impl Iterator<Item = (usize, u64)> {
    let start = col as usize;
    let end = start + w as usize;
    let first_word = start / 64;
    let past_word = if w == 0 { first_word } else { (end - 1) / 64 + 1 };

    (first_word..past_word).map(move |word| {
        let base = word * 64;
        let lo = start.max(base) - base;
        let len = end.min(base + 64) - base - lo;
        let mask = if len == 64 { u64::MAX } else { ((1u64 << len) - 1) << lo };
        (word, mask)
    })
}

impl OccupancyGrid {
    #[inline]
    fn row_start(&self, row: u32) -> usize {
        row as usize * self.words_per_row
    }

    /// Lowest taken column in `[col, col + w)` of a stored row.
    /// The run must already be clipped to the grid.
    pub(super) fn first_taken_in_run(&self, row: u32, col: u32, w: u32) -> Option<u32> {
        let start = self.row_start(row);
        run_words(col, w).find_map(|(word, mask)| {
            let hits = self.bits[start + word] & mask;
            (hits != 0).then(|| (word * 64) as u32 + hits.trailing_zeros())
        })
    }

    /// Mark `[col, col + w)` of a stored row. The run must already be clipped.
    pub(super) fn take_run(&mut self, row: u32, col: u32, w: u32) {
        let start = self.row_start(row);
        for (word, mask) in run_words(col, w) {
            self.bits[start + word] |= mask;
        }
    }
}
