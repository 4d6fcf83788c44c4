use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::config::AutomatonConfig;
use crate::simulation::{AutomatonGrid, StepStats};
use crate::sonification::Sonifier;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Automaton {
    core: AutomatonGrid,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Automaton {
    /// Uninitialized automaton with the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: AutomatonGrid::default(),
        }
    }

    /// Uninitialized automaton from a JSON config (every field optional)
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: &str) -> Result<Automaton, JsValue> {
        let config = AutomatonConfig::from_json(json).map_err(to_js)?;
        let core = AutomatonGrid::new(config).map_err(to_js)?;
        Ok(Self { core })
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    /// Size to the viewport and seed; call again on every resize
    pub fn initialize(&mut self, viewport_width: f64, viewport_height: f64, cell_pitch: f64) -> Result<(), JsValue> {
        self.core
            .initialize(viewport_width, viewport_height, cell_pitch)
            .map_err(to_js)
    }

    /// Advance one generation (call once per frame, after drawing)
    pub fn step(&mut self) {
        self.core.step();
    }

    #[wasm_bindgen(getter)]
    pub fn row_count(&self) -> u32 { self.core.row_count() }

    #[wasm_bindgen(getter)]
    pub fn column_count(&self) -> u32 { self.core.column_count() }

    #[wasm_bindgen(getter)]
    pub fn interior_rows(&self) -> u32 { self.core.interior_rows() }

    #[wasm_bindgen(getter)]
    pub fn interior_cols(&self) -> u32 { self.core.interior_cols() }

    #[wasm_bindgen(getter)]
    pub fn cell_pitch(&self) -> f64 { self.core.cell_pitch() }

    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> f64 { self.core.canvas_width() }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> f64 { self.core.canvas_height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool, JsValue> {
        self.core.is_alive(row, col).map_err(to_js)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<(), JsValue> {
        self.core.set_cell(row, col, alive).map_err(to_js)
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Get pointer to the cell buffer (for JS rendering)
    ///
    /// Row-major `row_count * column_count` bytes, 1 = alive. The view is
    /// invalidated by the next `step` or `initialize`.
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Enable or disable per-step timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step snapshot (zeros before the first step)
    pub fn get_step_stats(&self) -> StepStats {
        self.core.last_step_stats()
    }
}

impl Automaton {
    pub fn grid(&self) -> &AutomatonGrid {
        &self.core
    }
}

/// Scan-line sonifier bound to an `Automaton`'s dimensions
#[wasm_bindgen(js_name = Sonifier)]
pub struct SonifierHandle {
    inner: Sonifier,
}

#[wasm_bindgen(js_class = Sonifier)]
impl SonifierHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(automaton: &Automaton) -> Self {
        Self {
            inner: Sonifier::new(&automaton.core),
        }
    }

    /// Restart the sweep after the automaton was re-initialized
    pub fn reset(&mut self, automaton: &Automaton) {
        self.inner.reset(&automaton.core);
    }

    /// Advance the scan line one frame; returns how many tones to start.
    /// Read them with the `trigger_*` getters.
    pub fn observe(&mut self, automaton: &Automaton) -> usize {
        self.inner.observe(&automaton.core).len()
    }

    pub fn trigger_count(&self) -> usize {
        self.inner.triggers().len()
    }

    /// Lattice row of trigger `idx`, `undefined` past `trigger_count`
    pub fn trigger_row(&self, idx: usize) -> Option<u32> {
        self.inner.triggers().get(idx).map(|t| t.row)
    }

    pub fn trigger_midi_note(&self, idx: usize) -> Option<u8> {
        self.inner.triggers().get(idx).map(|t| t.midi_note)
    }

    /// Frequency in Hz of trigger `idx`, `undefined` past `trigger_count`
    pub fn trigger_frequency(&self, idx: usize) -> Option<f64> {
        self.inner.triggers().get(idx).map(|t| t.frequency)
    }

    /// Scan line x in pixels, relative to the drawn interior
    #[wasm_bindgen(getter)]
    pub fn scan_x(&self) -> f64 {
        self.inner.scan_line().x()
    }

    /// Lattice column under the scan line, -1 when none
    #[wasm_bindgen(getter)]
    pub fn scan_column(&self) -> i32 {
        self.inner.scan_line().column().map(|c| c as i32).unwrap_or(-1)
    }
}
