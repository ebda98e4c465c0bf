//! Domain types shared by the packer, the layout and the JS facade.

pub mod config;
pub mod error;
pub mod slot;

pub use config::{GridConfig, OverlapPolicy};
pub use error::{FixedConflict, PackError};
pub use slot::{Footprint, GridPos, ItemMeta, Slot, SlotIndex};
