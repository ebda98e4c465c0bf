use crate::domain::Footprint;
use crate::spatial::OccupancyGrid;

/// First free `w x h` rectangle in row-major scan order.
///
/// Returns `(col, row, candidates)`. Caller guarantees `1 <= w <= cols`.
/// Every row at or past `grid.rows()` is free, so the scan never runs past
/// the first untouched row.
pub(super) fn find_first_fit(grid: &OccupancyGrid, footprint: Footprint) -> (u32, u32, u32) {
    debug_assert!(footprint.w >= 1 && footprint.w <= grid.cols());

    let max_col = grid.cols() - footprint.w;
    let last_row = grid.rows();
    let mut candidates = 0u32;

    for row in 0..last_row {
        for col in 0..=max_col {
            candidates += 1;
            if grid.fits(col, row, footprint.w, footprint.h) {
                return (col, row, candidates);
            }
        }
    }

    // Column 0 of the first untouched row is always free
    (0, last_row, candidates + 1)
}
