//! Slot records as they arrive from the inventory UI.
//!
//! A slot is one addressable inventory position. It either holds an item with a
//! `w x h` footprint (in grid cells) or is empty. The server may pin an item to a
//! fixed cell; everything else is placed by the packer.

use serde::{Deserialize, Serialize};

/// Index of a slot in the owning inventory
pub type SlotIndex = u32;

fn one() -> u32 {
    1
}

/// Width x height in grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub w: u32,
    pub h: u32,
}

impl Footprint {
    /// Simple items take a single cell
    pub const UNIT: Footprint = Footprint { w: 1, h: 1 };

    #[inline]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    #[inline]
    pub fn area(&self) -> u32 {
        self.w * self.h
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A cell coordinate in grid space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: u32,
    pub row: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Item data carried by a slot.
///
/// Only `w`/`h` matter to layout. The rest is passed through untouched so the
/// front end can draw the item without a second lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default = "one")]
    pub w: u32,
    #[serde(default = "one")]
    pub h: u32,
}

impl ItemMeta {
    pub fn sized(w: u32, h: u32) -> Self {
        Self { id: None, name: None, count: None, w, h }
    }

    pub fn named(name: &str, w: u32, h: u32) -> Self {
        Self { name: Some(name.to_string()), ..Self::sized(w, h) }
    }

    #[inline]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.w, self.h)
    }
}

impl Default for ItemMeta {
    fn default() -> Self {
        Self::sized(1, 1)
    }
}

/// One inventory slot record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub slot: SlotIndex,
    #[serde(default)]
    pub item: Option<ItemMeta>,
    /// Position assigned by the server, honored as-is
    #[serde(default)]
    pub fixed: Option<GridPos>,
}

impl Slot {
    pub fn empty(slot: SlotIndex) -> Self {
        Self { slot, item: None, fixed: None }
    }

    pub fn with_item(slot: SlotIndex, w: u32, h: u32) -> Self {
        Self { slot, item: Some(ItemMeta::sized(w, h)), fixed: None }
    }

    /// Pin this slot to a server-assigned cell
    pub fn at(mut self, col: u32, row: u32) -> Self {
        self.fixed = Some(GridPos::new(col, row));
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Footprint of the held item (1x1 when empty)
    #[inline]
    pub fn footprint(&self) -> Footprint {
        self.item.as_ref().map(ItemMeta::footprint).unwrap_or(Footprint::UNIT)
    }

    /// Parse a JSON array of slot records
    pub fn list_from_json(json: &str) -> Result<Vec<Slot>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
