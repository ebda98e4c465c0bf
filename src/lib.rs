//! Inventory Grid Engine - slot layout for the inventory UI, in WASM
//!
//! Packs item slots of varying footprint into a fixed-width grid and works
//! out which free cells act as drop targets for which empty slots.
//!
//! Architecture:
//! - domain/    - Slot records, config, errors
//! - spatial/   - Occupancy bitset
//! - packing/   - First-fit packer + fixed-position validation
//! - layout/    - Cell index, render cells, pixel geometry
//! - api/       - JS facade and console logging

pub mod domain;
pub mod spatial;
pub mod packing;
pub mod layout;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    api::console_log::init(log::LevelFilter::Info);
    log::info!("inventory grid engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Change console log verbosity ("error", "warn", "info", "debug", "trace", "off").
/// Unknown names are ignored.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => api::console_log::init(filter),
        Err(_) => log::warn!("unknown log level {:?}", level),
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::InventoryGrid;
pub use domain::{
    FixedConflict, Footprint, GridConfig, GridPos, ItemMeta, OverlapPolicy, PackError, Slot,
    SlotIndex,
};
pub use layout::{CellIndex, CellKind, GridLayout, PixelRect, RenderCell};
pub use packing::{pack, GridPacker, PackResult, PackStats, Placement};

/// Column count the inventory UI uses
#[wasm_bindgen(js_name = defaultColumns)]
pub fn default_columns() -> u32 {
    domain::config::DEFAULT_COLUMNS
}

/// Cell edge in pixels the inventory UI uses
#[wasm_bindgen(js_name = defaultCellSize)]
pub fn default_cell_size() -> u32 {
    domain::config::DEFAULT_CELL_SIZE
}
