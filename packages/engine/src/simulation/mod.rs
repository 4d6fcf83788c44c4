//! AutomatonGrid - Life engine advanced one generation per animation frame
//!
//! The grid owns a bordered `Lattice` and replaces it wholesale:
//! - `initialize` builds and seeds a fresh lattice sized to the viewport
//! - `step` computes the next generation into a new lattice, then swaps it in
//!
//! Nothing is mutated in place while a generation is being computed, so
//! every cell's next state depends only on the previous snapshot.
//!
//! Initialization is in init/, the generation update in step/, renderer
//! queries in render/ and step timing in perf/.

use rand::rngs::SmallRng;

use crate::core::error::{EngineError, EngineResult};
use crate::core::grid::Lattice;
use crate::domain::config::AutomatonConfig;

#[path = "perf/step_timer.rs"]
mod step_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;

pub use step_stats::StepStats;

use step_timer::StepTimer;

/// The automaton: a bordered Life lattice plus its seeding RNG
#[derive(Clone, Debug)]
pub struct AutomatonGrid {
    config: AutomatonConfig,
    lattice: Lattice,
    rng: SmallRng,

    // Set by `initialize`
    cell_pitch: f64,

    // State
    generation: u64,
    last_step: StepStats,

    // Perf metrics
    perf_enabled: bool,
}

impl Default for AutomatonGrid {
    fn default() -> Self {
        init::create_automaton_grid(AutomatonConfig::default())
    }
}

impl AutomatonGrid {
    /// Uninitialized grid (0 rows, 0 columns) with the given configuration
    pub fn new(config: AutomatonConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(init::create_automaton_grid(config))
    }

    pub fn config(&self) -> &AutomatonConfig { &self.config }

    /// Size the lattice to the viewport and randomly seed it.
    ///
    /// `cols = floor(width / pitch)`, `rows = floor(height / pitch)`. On error
    /// the current grid is left exactly as it was.
    pub fn initialize(&mut self, viewport_width: f64, viewport_height: f64, cell_pitch: f64) -> EngineResult<()> {
        init::initialize(self, viewport_width, viewport_height, cell_pitch)
    }

    /// Advance the whole grid by one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Live neighbors of interior cell (y, x)
    pub fn count_alive_neighbors(&self, y: u32, x: u32) -> EngineResult<u8> {
        if !self.lattice.is_interior(y, x) {
            return Err(self.out_of_range(y, x));
        }
        Ok(self.lattice.alive_neighbors(y, x))
    }

    /// Lattice rows including the border, 0 before `initialize`
    pub fn row_count(&self) -> u32 { self.lattice.rows() }

    /// Lattice columns including the border, 0 before `initialize`
    pub fn column_count(&self) -> u32 { self.lattice.cols() }

    pub fn interior_rows(&self) -> u32 { self.lattice.interior_rows() }

    pub fn interior_cols(&self) -> u32 { self.lattice.interior_cols() }

    /// Cell state for `0 <= row < row_count`, `0 <= col < column_count`.
    /// Border cells are readable and always dead.
    pub fn is_alive(&self, row: u32, col: u32) -> EngineResult<bool> {
        if !self.lattice.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.lattice.get(row, col))
    }

    /// Place or remove a cell. Only interior cells are writable.
    pub fn set_cell(&mut self, y: u32, x: u32, alive: bool) -> EngineResult<()> {
        if !self.lattice.is_interior(y, x) {
            return Err(self.out_of_range(y, x));
        }
        self.lattice.set(y, x, alive);
        Ok(())
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.lattice.clear();
    }

    pub fn lattice(&self) -> &Lattice { &self.lattice }

    pub fn cell_pitch(&self) -> f64 { self.cell_pitch }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> u32 { self.lattice.population() }

    /// Width in pixels of the drawn interior (`interior_cols * pitch`)
    pub fn canvas_width(&self) -> f64 {
        f64::from(self.interior_cols()) * self.cell_pitch
    }

    /// Height in pixels of the drawn interior (`interior_rows * pitch`)
    pub fn canvas_height(&self) -> f64 {
        f64::from(self.interior_rows()) * self.cell_pitch
    }

    /// Interior (y, x) coordinates of every live cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        render_extract::live_cells(&self.lattice)
    }

    /// Interior rows alive in lattice column `col`, top to bottom.
    /// Empty when `col` is not an interior column.
    pub fn column_alive_rows(&self, col: u32) -> impl Iterator<Item = u32> + '_ {
        render_extract::column_alive_rows(&self.lattice, col)
    }

    /// Get pointer to the cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 { self.lattice.cells_ptr() }

    /// Cell buffer length in bytes (`row_count * column_count`)
    pub fn cells_len(&self) -> usize { self.lattice.size() }

    /// Enable or disable step timing (adds clock reads when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Stats of the last `step` (zeros before the first one)
    pub fn last_step_stats(&self) -> StepStats { self.last_step }

    fn out_of_range(&self, row: u32, col: u32) -> EngineError {
        EngineError::OutOfRangeAccess {
            row,
            col,
            rows: self.lattice.rows(),
            cols: self.lattice.cols(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
