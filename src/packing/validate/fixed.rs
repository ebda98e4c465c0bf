use std::collections::HashSet;

use crate::domain::config::MAX_ROWS;
use crate::domain::{FixedConflict, Footprint, GridPos, PackError, Slot, SlotIndex};
use crate::spatial::OccupancyGrid;

use super::Placement;

/// Reject inputs the packer cannot place: zero-sized, over-wide or over-tall
/// footprints, pinned positions off the grid, and repeated slot indices.
pub(super) fn check_slots(slots: &[Slot], cols: u32) -> Result<(), PackError> {
    let mut seen: HashSet<SlotIndex> = HashSet::with_capacity(slots.len());
    for slot in slots {
        if !seen.insert(slot.slot) {
            return Err(PackError::DuplicateSlot { slot: slot.slot });
        }
        let fp = slot.footprint();
        if fp.w == 0 || fp.h == 0 {
            return Err(PackError::EmptyFootprint { slot: slot.slot });
        }
        if fp.w > cols {
            return Err(PackError::FootprintTooWide { slot: slot.slot, w: fp.w, cols });
        }
        if fp.h > MAX_ROWS {
            return Err(PackError::FootprintTooTall { slot: slot.slot, h: fp.h, max: MAX_ROWS });
        }
        if let Some(pos) = slot.fixed {
            // Anchor must sit on the grid; overhang to the right is a conflict, not an error
            let bottom = u64::from(pos.row) + u64::from(fp.h);
            if pos.col >= cols || bottom > u64::from(MAX_ROWS) {
                return Err(PackError::PositionOutOfRange {
                    slot: slot.slot,
                    col: pos.col,
                    row: pos.row,
                });
            }
        }
    }
    Ok(())
}

/// Conflicts a pinned slot causes against everything placed before it,
/// pinned or searched.
pub(super) fn check_fixed(
    grid: &OccupancyGrid,
    placed: &[Placement],
    slot: SlotIndex,
    pos: GridPos,
    fp: Footprint,
    conflicts: &mut Vec<FixedConflict>,
) {
    let cols = grid.cols();
    if u64::from(pos.col) + u64::from(fp.w) > u64::from(cols) {
        conflicts.push(FixedConflict::OutOfBounds { slot, col: pos.col, w: fp.w, cols });
    }

    if let Some((col, row)) = grid.first_occupied_in(pos.col, pos.row, fp.w, fp.h) {
        // Last writer of the cell owns it
        let other = placed
            .iter()
            .rev()
            .find(|p| p.contains(col, row))
            .map(|p| p.slot)
            .unwrap_or(slot);
        conflicts.push(FixedConflict::Overlap { slot, other, col, row });
    }
}
