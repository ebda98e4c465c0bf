use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::slot::SlotIndex;

/// Problems found in server-assigned positions while packing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FixedConflict {
    /// `slot` claims a cell an earlier slot (`other`, pinned or searched)
    /// already holds.
    /// `(col, row)` is the first shared cell in scan order.
    Overlap {
        slot: SlotIndex,
        other: SlotIndex,
        col: u32,
        row: u32,
    },
    /// `slot` sticks out past the right edge (`col + w > cols`)
    OutOfBounds {
        slot: SlotIndex,
        col: u32,
        w: u32,
        cols: u32,
    },
}

impl FixedConflict {
    pub fn slot(&self) -> SlotIndex {
        match *self {
            FixedConflict::Overlap { slot, .. } | FixedConflict::OutOfBounds { slot, .. } => slot,
        }
    }
}

impl fmt::Display for FixedConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FixedConflict::Overlap { slot, other, col, row } => {
                write!(f, "slot {slot} overlaps slot {other} at ({col}, {row})")
            }
            FixedConflict::OutOfBounds { slot, col, w, cols } => {
                write!(f, "slot {slot} at column {col} with width {w} exceeds {cols} columns")
            }
        }
    }
}

/// Layout error type.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("grid must have at least one column")]
    NoColumns,

    #[error("cell size must be at least 1px")]
    InvalidCellSize,

    #[error("slot {slot}: footprint must be at least 1x1")]
    EmptyFootprint { slot: SlotIndex },

    #[error("slot {slot}: footprint width {w} exceeds grid width of {cols} columns")]
    FootprintTooWide { slot: SlotIndex, w: u32, cols: u32 },

    #[error("grid width {cols} exceeds the {max} column limit")]
    TooManyColumns { cols: u32, max: u32 },

    #[error("grid could need {rows} rows, over the {max} row limit")]
    TooManyRows { rows: u64, max: u32 },

    #[error("slot {slot}: footprint height {h} exceeds the {max} row limit")]
    FootprintTooTall { slot: SlotIndex, h: u32, max: u32 },

    #[error("slot {slot}: fixed position ({col}, {row}) is outside the grid")]
    PositionOutOfRange { slot: SlotIndex, col: u32, row: u32 },

    #[error("slot {slot} appears more than once")]
    DuplicateSlot { slot: SlotIndex },

    #[error("{} fixed-position conflict(s): {}", .0.len(), ConflictList(.0))]
    FixedConflicts(Vec<FixedConflict>),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

struct ConflictList<'a>(&'a [FixedConflict]);

impl fmt::Display for ConflictList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{conflict}")?;
        }
        Ok(())
    }
}
