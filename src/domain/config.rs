//! Grid configuration.
//!
//! Column count and cell size used to be hardcoded in the UI; they are plain
//! fields here so the packer can run at any width.

use serde::{Deserialize, Serialize};

use super::error::PackError;

pub const DEFAULT_COLUMNS: u32 = 10;
pub const DEFAULT_CELL_SIZE: u32 = 48;
pub const DEFAULT_GAP: u32 = 4;
/// Short inventories still render this many rows
pub const DEFAULT_MIN_ROWS: u32 = 4;

/// Widest grid accepted
pub const MAX_COLUMNS: u32 = 1024;
/// Tallest grid accepted; bounds server-supplied rows and worst-case growth
pub const MAX_ROWS: u32 = 4096;

/// What to do when server-assigned positions collide
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlapPolicy {
    /// Last write wins; conflicts are logged and reported
    #[default]
    Override,
    /// Refuse to lay out the grid
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub cols: u32,
    /// Cell edge in pixels
    pub cell_size: u32,
    /// Spacing between cells in pixels
    pub gap: u32,
    pub min_rows: u32,
    pub overlap_policy: OverlapPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLUMNS,
            cell_size: DEFAULT_CELL_SIZE,
            gap: DEFAULT_GAP,
            min_rows: DEFAULT_MIN_ROWS,
            overlap_policy: OverlapPolicy::Override,
        }
    }
}

impl GridConfig {
    pub fn new(cols: u32, cell_size: u32) -> Self {
        Self { cols, cell_size, ..Self::default() }
    }

    /// Grid of `cols` columns with default pixel metrics
    pub fn with_cols(cols: u32) -> Self {
        Self { cols, ..Self::default() }
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_min_rows(mut self, min_rows: u32) -> Self {
        self.min_rows = min_rows;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PackError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PackError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), PackError> {
        self.validate_grid()?;
        if self.cell_size == 0 {
            return Err(PackError::InvalidCellSize);
        }
        Ok(())
    }

    /// Checks the packer cares about (no pixel metrics)
    pub fn validate_grid(&self) -> Result<(), PackError> {
        if self.cols == 0 {
            return Err(PackError::NoColumns);
        }
        if self.cols > MAX_COLUMNS {
            return Err(PackError::TooManyColumns { cols: self.cols, max: MAX_COLUMNS });
        }
        if self.min_rows > MAX_ROWS {
            return Err(PackError::TooManyRows { rows: self.min_rows as u64, max: MAX_ROWS });
        }
        Ok(())
    }

    /// Distance in pixels from one cell origin to the next
    #[inline]
    pub fn stride(&self) -> u32 {
        self.cell_size.saturating_add(self.gap)
    }

    /// Pixel length of `cells` consecutive cells including inner gaps
    #[inline]
    pub fn span_px(&self, cells: u32) -> u32 {
        if cells == 0 {
            0
        } else {
            cells
                .saturating_mul(self.cell_size)
                .saturating_add((cells - 1).saturating_mul(self.gap))
        }
    }

    pub fn width_px(&self) -> u32 {
        self.span_px(self.cols)
    }

    pub fn height_px(&self, rows: u32) -> u32 {
        self.span_px(rows)
    }
}
