//! Cell -> slot lookups over a finished packing.
//!
//! Two views, both fixed at build time:
//! - occupied cells resolve to the placement covering them
//! - uncovered cells are handed the empty slots, in row-major order, so a
//!   drop on that cell addresses a real inventory slot
//!
//! Uncovered cells left over once the empty slots run out have no slot and
//! are not drop targets.

use crate::domain::{GridPos, SlotIndex};
use crate::packing::Placement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Covered by `slot`'s item. `anchor` marks its top-left cell.
    Occupied { slot: SlotIndex, anchor: bool },
    /// Free cell bound to an empty slot
    DropTarget { slot: SlotIndex },
    /// Free cell with no slot left to bind
    Uncovered,
    OutOfGrid,
}

#[derive(Clone, Debug)]
pub struct CellIndex {
    cols: u32,
    rows: u32,
    placements: Vec<Placement>,
    // Per cell, row-major
    occupant: Vec<Option<u32>>,
    drop_slot: Vec<Option<SlotIndex>>,
    drop_count: u32,
    unassigned: u32,
}

impl CellIndex {
    /// `rows` must cover every placement's bottom edge (a packing result's
    /// row count always does). Later placements win shared cells.
    pub fn build(cols: u32, rows: u32, placements: &[Placement], empty_slots: &[SlotIndex]) -> Self {
        let size = (cols as usize) * (rows as usize);
        let mut occupant: Vec<Option<u32>> = vec![None; size];

        let width = cols as usize;
        for (i, p) in placements.iter().enumerate() {
            let col_end = p.right().min(cols) as usize;
            let row_end = p.bottom().min(rows) as usize;
            for r in p.row as usize..row_end {
                let start = r * width;
                for c in p.col as usize..col_end {
                    occupant[start + c] = Some(i as u32);
                }
            }
        }

        let mut drop_slot: Vec<Option<SlotIndex>> = vec![None; size];
        let mut empties = empty_slots.iter().copied();
        let mut drop_count = 0u32;
        let mut unassigned = 0u32;
        for idx in 0..size {
            if occupant[idx].is_some() {
                continue;
            }
            match empties.next() {
                Some(slot) => {
                    drop_slot[idx] = Some(slot);
                    drop_count += 1;
                }
                None => unassigned += 1,
            }
        }

        Self {
            cols,
            rows,
            placements: placements.to_vec(),
            occupant,
            drop_slot,
            drop_count,
            unassigned,
        }
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col < self.cols && row < self.rows {
            Some((row as usize) * (self.cols as usize) + (col as usize))
        } else {
            None
        }
    }

    /// Placement covering a cell
    pub fn occupant(&self, col: u32, row: u32) -> Option<&Placement> {
        let idx = self.index(col, row)?;
        let i = self.occupant[idx]?;
        self.placements.get(i as usize)
    }

    /// Empty slot bound to a cell
    pub fn drop_target(&self, col: u32, row: u32) -> Option<SlotIndex> {
        self.drop_slot[self.index(col, row)?]
    }

    pub fn cell(&self, col: u32, row: u32) -> CellKind {
        let Some(idx) = self.index(col, row) else {
            return CellKind::OutOfGrid;
        };
        if let Some(i) = self.occupant[idx] {
            let p = &self.placements[i as usize];
            return CellKind::Occupied { slot: p.slot, anchor: p.col == col && p.row == row };
        }
        match self.drop_slot[idx] {
            Some(slot) => CellKind::DropTarget { slot },
            None => CellKind::Uncovered,
        }
    }

    /// Every cell in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| {
            (0..cols).map(move |col| (GridPos::new(col, row), self.cell(col, row)))
        })
    }

    /// Drop targets in row-major order
    pub fn drop_targets(&self) -> impl Iterator<Item = (GridPos, SlotIndex)> + '_ {
        let cols = self.cols as usize;
        self.drop_slot.iter().enumerate().filter_map(move |(idx, slot)| {
            slot.map(|s| (GridPos::new((idx % cols) as u32, (idx / cols) as u32), s))
        })
    }

    /// Cell a given empty slot was bound to, if any
    pub fn drop_cell_of(&self, slot: SlotIndex) -> Option<GridPos> {
        self.drop_targets().find(|&(_, s)| s == slot).map(|(pos, _)| pos)
    }

    pub fn drop_target_count(&self) -> u32 {
        self.drop_count
    }

    /// Free cells without a slot
    pub fn unassigned_count(&self) -> u32 {
        self.unassigned
    }
}
