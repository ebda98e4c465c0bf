//! JS-facing surface.

pub mod console_log;
pub mod wasm;

pub use wasm::InventoryGrid;
