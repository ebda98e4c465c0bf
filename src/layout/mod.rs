//! Grid Layout - everything the inventory UI needs to draw one grid.
//!
//! Flow per call:
//! 1. Split slots into item-bearing (packed) and empty (drop targets)
//! 2. Pack the items
//! 3. Build the cell index over the packed grid
//! 4. Flatten into render cells with pixel rects
//!
//! Nothing is cached between calls; a new slot list means a new `GridLayout`.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{FixedConflict, GridConfig, PackError, Slot, SlotIndex};
use crate::packing::{GridPacker, PackResult, PackStats, Placement};

#[path = "cells/cell_index.rs"]
mod cell_index;
#[path = "geometry/pixels.rs"]
mod pixels;
#[path = "render/render_cells.rs"]
mod render_cells;

pub use cell_index::{CellIndex, CellKind};
pub use pixels::{cell_rect, PixelRect};
pub use render_cells::RenderCell;

pub struct GridLayout {
    config: GridConfig,
    packing: PackResult,
    cells: CellIndex,
    render: Vec<RenderCell>,
}

/// Serialized form handed to JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSnapshot<'a> {
    cols: u32,
    rows: u32,
    width_px: u32,
    height_px: u32,
    placements: &'a [Placement],
    conflicts: &'a [FixedConflict],
    cells: &'a [RenderCell],
}

impl GridLayout {
    pub fn compute(config: &GridConfig, slots: &[Slot]) -> Result<Self, PackError> {
        config.validate()?;

        let mut seen: HashSet<SlotIndex> = HashSet::with_capacity(slots.len());
        let mut packed: Vec<Slot> = Vec::with_capacity(slots.len());
        let mut empty_slots: Vec<SlotIndex> = Vec::new();

        for slot in slots {
            if !seen.insert(slot.slot) {
                return Err(PackError::DuplicateSlot { slot: slot.slot });
            }
            if slot.is_empty() {
                if slot.fixed.is_some() {
                    log::debug!("slot {} is empty, ignoring its fixed position", slot.slot);
                }
                empty_slots.push(slot.slot);
            } else {
                packed.push(slot.clone());
            }
        }

        let packing = GridPacker::new(config.clone())?.pack(&packed)?;
        let cells = CellIndex::build(packing.cols, packing.rows, &packing.placements, &empty_slots);
        let render = render_cells::build_render_cells(config, &cells, &packing.placements, &packed);

        if cells.unassigned_count() > 0 {
            log::debug!(
                "{} free cell(s) without an empty slot, {} drop target(s)",
                cells.unassigned_count(),
                cells.drop_target_count()
            );
        }

        Ok(Self { config: config.clone(), packing, cells, render })
    }

    /// Parse a JSON slot list and lay it out
    pub fn from_json(config: &GridConfig, slots_json: &str) -> Result<Self, PackError> {
        let slots = Slot::list_from_json(slots_json)?;
        Self::compute(config, &slots)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cols(&self) -> u32 {
        self.packing.cols
    }

    pub fn rows(&self) -> u32 {
        self.packing.rows
    }

    pub fn placements(&self) -> &[Placement] {
        &self.packing.placements
    }

    pub fn placement(&self, slot: SlotIndex) -> Option<&Placement> {
        self.packing.placement(slot)
    }

    pub fn conflicts(&self) -> &[FixedConflict] {
        &self.packing.conflicts
    }

    pub fn stats(&self) -> PackStats {
        self.packing.stats
    }

    pub fn cells(&self) -> &CellIndex {
        &self.cells
    }

    pub fn render_cells(&self) -> &[RenderCell] {
        &self.render
    }

    pub fn width_px(&self) -> u32 {
        self.config.width_px()
    }

    pub fn height_px(&self) -> u32 {
        self.config.height_px(self.rows())
    }

    /// Pixel rect of a placed slot
    pub fn slot_rect(&self, slot: SlotIndex) -> Option<PixelRect> {
        self.placement(slot)
            .map(|p| cell_rect(&self.config, p.col, p.row, p.w, p.h))
    }

    /// Grid cell under a pixel position, if it lands on a cell (not a gap)
    pub fn cell_at_px(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let stride = self.config.stride();
        let (col, row) = (x / stride, y / stride);
        if x % stride >= self.config.cell_size || y % stride >= self.config.cell_size {
            return None;
        }
        if col >= self.cols() || row >= self.rows() {
            return None;
        }
        Some((col, row))
    }

    pub fn to_json(&self) -> Result<String, PackError> {
        let snapshot = LayoutSnapshot {
            cols: self.cols(),
            rows: self.rows(),
            width_px: self.width_px(),
            height_px: self.height_px(),
            placements: self.placements(),
            conflicts: self.conflicts(),
            cells: self.render_cells(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
