//! Grid Packer - assigns every slot a (col, row) in a fixed-width grid.
//!
//! Slots are handled strictly in input order:
//! - Pinned slots (server-assigned `fixed`) are written straight into the
//!   occupancy grid, no search.
//! - Everything else takes the first free rectangle in row-major order.
//!
//! The occupancy grid lives only for the duration of one `pack` call.

use serde::Serialize;

use crate::domain::config::MAX_ROWS;
use crate::domain::{
    FixedConflict, Footprint, GridConfig, OverlapPolicy, PackError, Slot, SlotIndex,
};
use crate::spatial::OccupancyGrid;

#[path = "search/first_fit.rs"]
mod first_fit;
#[path = "validate/fixed.rs"]
mod fixed;
#[path = "perf/pack_stats.rs"]
mod pack_stats;

pub use pack_stats::PackStats;

/// Where a slot ended up, in grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub slot: SlotIndex,
    pub col: u32,
    pub row: u32,
    pub w: u32,
    pub h: u32,
}

impl Placement {
    #[inline]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.w, self.h)
    }

    /// One past the last column covered
    #[inline]
    pub fn right(&self) -> u32 {
        self.col.saturating_add(self.w)
    }

    /// One past the last row covered
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.row.saturating_add(self.h)
    }

    #[inline]
    pub fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.col && col < self.right() && row >= self.row && row < self.bottom()
    }

    pub fn overlaps(&self, other: &Placement) -> bool {
        self.col < other.right()
            && other.col < self.right()
            && self.row < other.bottom()
            && other.row < self.bottom()
    }
}

/// Output of one packing call
#[derive(Clone, Debug)]
pub struct PackResult {
    pub cols: u32,
    /// Rows to render: content height, floored at `min_rows`
    pub rows: u32,
    /// One per input slot, in input order
    pub placements: Vec<Placement>,
    /// Pinned-position problems let through by `OverlapPolicy::Override`
    pub conflicts: Vec<FixedConflict>,
    pub stats: PackStats,
}

impl PackResult {
    pub fn placement(&self, slot: SlotIndex) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot == slot)
    }

    /// Rows actually covered by placements (no floor)
    pub fn content_rows(&self) -> u32 {
        self.placements.iter().map(Placement::bottom).max().unwrap_or(0)
    }
}

/// The packer. Holds configuration only; each call starts from an empty grid.
#[derive(Clone, Debug)]
pub struct GridPacker {
    config: GridConfig,
}

impl GridPacker {
    pub fn new(config: GridConfig) -> Result<Self, PackError> {
        config.validate_grid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cols(&self) -> u32 {
        self.config.cols
    }

    /// Place every slot in `slots`. Deterministic for a given input order.
    pub fn pack(&self, slots: &[Slot]) -> Result<PackResult, PackError> {
        let cols = self.config.cols;
        let pass = place_slots(slots, cols)?;

        if !pass.conflicts.is_empty() {
            match self.config.overlap_policy {
                OverlapPolicy::Reject => {
                    log::error!(
                        "rejecting layout: {} fixed-position conflict(s)",
                        pass.conflicts.len()
                    );
                    return Err(PackError::FixedConflicts(pass.conflicts));
                }
                OverlapPolicy::Override => {
                    for conflict in &pass.conflicts {
                        log::warn!("fixed position conflict, last write wins: {conflict}");
                    }
                }
            }
        }

        let content_rows = pass.placements.iter().map(Placement::bottom).max().unwrap_or(0);
        let rows = content_rows.max(self.config.min_rows);

        let stats = PackStats {
            slots: slots.len() as u32,
            fixed_slots: pass.fixed_slots,
            candidates: pass.candidates,
            conflicts: pass.conflicts.len() as u32,
            rows,
            occupied_cells: pass.grid.occupied_count(),
        };

        log::debug!(
            "packed {} slot(s) ({} fixed) into {}x{}, {} candidate(s)",
            stats.slots,
            stats.fixed_slots,
            cols,
            rows,
            stats.candidates
        );

        Ok(PackResult {
            cols,
            rows,
            placements: pass.placements,
            conflicts: pass.conflicts,
            stats,
        })
    }
}

/// State left after walking the slot list once
struct PlacementPass {
    grid: OccupancyGrid,
    placements: Vec<Placement>,
    conflicts: Vec<FixedConflict>,
    candidates: u32,
    fixed_slots: u32,
}

/// Walk the slots in order: pinned ones are written as-is (after noting what
/// they collide with), the rest go to the first free rectangle.
fn place_slots(slots: &[Slot], cols: u32) -> Result<PlacementPass, PackError> {
    fixed::check_slots(slots, cols)?;

    let mut pass = PlacementPass {
        grid: OccupancyGrid::new(cols),
        placements: Vec::with_capacity(slots.len()),
        conflicts: Vec::new(),
        candidates: 0,
        fixed_slots: 0,
    };

    for slot in slots {
        let fp = slot.footprint();
        let (col, row) = match slot.fixed {
            Some(pos) => {
                pass.fixed_slots += 1;
                fixed::check_fixed(
                    &pass.grid,
                    &pass.placements,
                    slot.slot,
                    pos,
                    fp,
                    &mut pass.conflicts,
                );
                (pos.col, pos.row)
            }
            None => {
                let (col, row, n) = first_fit::find_first_fit(&pass.grid, fp);
                pass.candidates += n;
                (col, row)
            }
        };

        let bottom = u64::from(row) + u64::from(fp.h);
        if bottom > u64::from(MAX_ROWS) {
            return Err(PackError::TooManyRows { rows: bottom, max: MAX_ROWS });
        }

        pass.grid.fill(col, row, fp.w, fp.h);
        pass.placements.push(Placement { slot: slot.slot, col, row, w: fp.w, h: fp.h });
    }

    Ok(pass)
}

/// Every fixed-position conflict `slots` would produce at this width: pinned
/// slots that overlap anything placed before them, or overhang the right edge.
pub fn find_fixed_conflicts(slots: &[Slot], cols: u32) -> Result<Vec<FixedConflict>, PackError> {
    if cols == 0 {
        return Err(PackError::NoColumns);
    }
    Ok(place_slots(slots, cols)?.conflicts)
}

/// Pack with default settings at the given width
pub fn pack(slots: &[Slot], cols: u32) -> Result<PackResult, PackError> {
    GridPacker::new(GridConfig::with_cols(cols))?.pack(slots)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
