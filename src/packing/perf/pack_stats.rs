use wasm_bindgen::prelude::*;

/// Counters from the last packing call
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackStats {
    pub(super) slots: u32,
    pub(super) fixed_slots: u32,
    /// Candidate rectangles tested by the first-fit search
    pub(super) candidates: u32,
    pub(super) conflicts: u32,
    pub(super) rows: u32,
    pub(super) occupied_cells: u32,
}

#[wasm_bindgen]
impl PackStats {
    #[wasm_bindgen(getter)]
    pub fn slots(&self) -> u32 {
        self.slots
    }
    #[wasm_bindgen(getter)]
    pub fn fixed_slots(&self) -> u32 {
        self.fixed_slots
    }
    #[wasm_bindgen(getter)]
    pub fn candidates(&self) -> u32 {
        self.candidates
    }
    #[wasm_bindgen(getter)]
    pub fn conflicts(&self) -> u32 {
        self.conflicts
    }
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.rows
    }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 {
        self.occupied_cells
    }
}
