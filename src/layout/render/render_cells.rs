use serde::Serialize;

use crate::domain::{GridConfig, ItemMeta, Slot, SlotIndex};
use crate::packing::Placement;

use super::cell_index::{CellIndex, CellKind};
use super::pixels::{cell_rect, PixelRect};

/// One thing for the front end to draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderCell {
    /// An item, drawn once at its top-left cell spanning its footprint
    Item {
        slot: SlotIndex,
        col: u32,
        row: u32,
        w: u32,
        h: u32,
        rect: PixelRect,
        #[serde(skip_serializing_if = "Option::is_none")]
        item: Option<ItemMeta>,
    },
    /// Free cell that accepts drops into `slot`
    DropTarget {
        slot: SlotIndex,
        col: u32,
        row: u32,
        rect: PixelRect,
    },
    /// Free cell with nothing bound to it
    Blank { col: u32, row: u32, rect: PixelRect },
}

impl RenderCell {
    /// Anchor cell as `(col, row)`
    pub fn anchor(&self) -> (u32, u32) {
        match *self {
            RenderCell::Item { col, row, .. }
            | RenderCell::DropTarget { col, row, .. }
            | RenderCell::Blank { col, row, .. } => (col, row),
        }
    }

    pub fn slot(&self) -> Option<SlotIndex> {
        match *self {
            RenderCell::Item { slot, .. } | RenderCell::DropTarget { slot, .. } => Some(slot),
            RenderCell::Blank { .. } => None,
        }
    }
}

/// Flatten a layout into draw order (row-major by anchor cell).
///
/// `packed` must be the slot list that produced `placements`, same order.
pub(super) fn build_render_cells(
    config: &GridConfig,
    cells: &CellIndex,
    placements: &[Placement],
    packed: &[Slot],
) -> Vec<RenderCell> {
    let free = (cells.drop_target_count() + cells.unassigned_count()) as usize;
    let mut out = Vec::with_capacity(placements.len() + free);

    for (p, slot) in placements.iter().zip(packed) {
        out.push(RenderCell::Item {
            slot: p.slot,
            col: p.col,
            row: p.row,
            w: p.w,
            h: p.h,
            rect: cell_rect(config, p.col, p.row, p.w, p.h),
            item: slot.item.clone(),
        });
    }

    for (pos, kind) in cells.iter_cells() {
        let rect = cell_rect(config, pos.col, pos.row, 1, 1);
        match kind {
            CellKind::DropTarget { slot } => out.push(RenderCell::DropTarget {
                slot,
                col: pos.col,
                row: pos.row,
                rect,
            }),
            CellKind::Uncovered => out.push(RenderCell::Blank { col: pos.col, row: pos.row, rect }),
            CellKind::Occupied { .. } | CellKind::OutOfGrid => {}
        }
    }

    // Stable: items sharing an anchor keep input order
    out.sort_by_key(|cell| {
        let (col, row) = cell.anchor();
        (row, col)
    });
    out
}
