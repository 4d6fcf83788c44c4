use wasm_bindgen::prelude::*;

/// Snapshot of the last generation update
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) population: u32,
    pub(super) generation: u64,
}

#[wasm_bindgen]
impl StepStats {
    /// Step duration; 0 unless perf metrics are enabled
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
