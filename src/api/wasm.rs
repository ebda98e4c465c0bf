use wasm_bindgen::prelude::*;

use crate::domain::{GridConfig, OverlapPolicy, PackError};
use crate::layout::GridLayout;
use crate::packing::PackStats;

fn to_js_error(err: PackError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// JS handle for one inventory grid.
///
/// Holds only the configuration; every `layoutJson` call packs from scratch.
#[wasm_bindgen]
pub struct InventoryGrid {
    config: GridConfig,
    last_stats: PackStats,
}

#[wasm_bindgen]
impl InventoryGrid {
    /// Create a grid with `cols` columns and `cell_size` px cells
    #[wasm_bindgen(constructor)]
    pub fn new(cols: u32, cell_size: u32) -> Result<InventoryGrid, JsValue> {
        let config = GridConfig::new(cols, cell_size);
        config.validate().map_err(to_js_error)?;
        Ok(Self { config, last_stats: PackStats::default() })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<InventoryGrid, JsValue> {
        let config = GridConfig::from_json(json).map_err(to_js_error)?;
        Ok(Self { config, last_stats: PackStats::default() })
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.config.cols
    }

    #[wasm_bindgen(getter, js_name = cellSize)]
    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    #[wasm_bindgen(getter)]
    pub fn gap(&self) -> u32 {
        self.config.gap
    }

    #[wasm_bindgen(getter, js_name = minRows)]
    pub fn min_rows(&self) -> u32 {
        self.config.min_rows
    }

    #[wasm_bindgen(js_name = setGap)]
    pub fn set_gap(&mut self, gap: u32) {
        self.config.gap = gap;
    }

    #[wasm_bindgen(js_name = setMinRows)]
    pub fn set_min_rows(&mut self, min_rows: u32) {
        self.config.min_rows = min_rows;
    }

    /// Fail layouts with conflicting server positions instead of letting the
    /// last one win
    #[wasm_bindgen(js_name = setRejectConflicts)]
    pub fn set_reject_conflicts(&mut self, reject: bool) {
        self.config.overlap_policy = if reject { OverlapPolicy::Reject } else { OverlapPolicy::Override };
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.config.to_json().map_err(to_js_error)
    }

    /// Lay out a JSON slot list; returns the layout as JSON
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&mut self, slots_json: &str) -> Result<String, JsValue> {
        let layout = GridLayout::from_json(&self.config, slots_json).map_err(to_js_error)?;
        self.last_stats = layout.stats();
        layout.to_json().map_err(to_js_error)
    }

    /// Counters from the last successful `layoutJson`
    #[wasm_bindgen(js_name = lastStats)]
    pub fn last_stats(&self) -> PackStats {
        self.last_stats
    }
}
