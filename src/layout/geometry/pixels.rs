use serde::Serialize;

use crate::domain::GridConfig;

/// Pixel rectangle relative to the grid's top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Pixel rect of a `w x h` cell block anchored at `(col, row)`.
/// Inner gaps are included; the outer gap is not.
#[inline]
pub fn cell_rect(config: &GridConfig, col: u32, row: u32, w: u32, h: u32) -> PixelRect {
    let stride = config.stride();
    PixelRect {
        x: col.saturating_mul(stride),
        y: row.saturating_mul(stride),
        w: config.span_px(w),
        h: config.span_px(h),
    }
}
