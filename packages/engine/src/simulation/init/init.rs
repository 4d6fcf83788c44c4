use rand::Rng;

use crate::core::error::{EngineError, EngineResult};
use crate::core::grid::Lattice;
use crate::domain::config::AutomatonConfig;

use super::random;
use super::step_stats::StepStats;
use super::AutomatonGrid;

pub(super) fn create_automaton_grid(config: AutomatonConfig) -> AutomatonGrid {
    let seed = config.seed.unwrap_or_else(random::clock_seed);
    AutomatonGrid {
        rng: random::seeded(seed),
        config,
        lattice: Lattice::empty(),
        cell_pitch: 0.0,
        generation: 0,
        last_step: StepStats::default(),
        perf_enabled: false,
    }
}

pub(super) fn initialize(
    grid: &mut AutomatonGrid,
    viewport_width: f64,
    viewport_height: f64,
    cell_pitch: f64,
) -> EngineResult<()> {
    let (rows, cols) = match interior_extent(viewport_width, viewport_height, cell_pitch) {
        Ok(extent) => extent,
        Err(e) => {
            log::warn!("initialize rejected: {e}");
            return Err(e);
        }
    };

    // Build completely before touching the grid
    let mut lattice = Lattice::with_interior(rows, cols)?;
    let drawn = seed_cells(&mut lattice, &mut grid.rng, grid.config.density);

    log::info!(
        "initialized {}x{} cells at {}px pitch: {} seeds drawn, {} alive",
        cols,
        rows,
        cell_pitch,
        drawn,
        lattice.population()
    );

    grid.lattice = lattice;
    grid.cell_pitch = cell_pitch;
    grid.generation = 0;
    grid.last_step = StepStats::default();
    Ok(())
}

/// Interior (rows, cols) for a viewport, validating every argument
pub(super) fn interior_extent(viewport_width: f64, viewport_height: f64, cell_pitch: f64) -> EngineResult<(u32, u32)> {
    require_positive("viewport width", viewport_width)?;
    require_positive("viewport height", viewport_height)?;
    require_positive("cell pitch", cell_pitch)?;

    let cols = (viewport_width / cell_pitch).floor();
    let rows = (viewport_height / cell_pitch).floor();
    // Checked in f64 first so huge viewports never reach the u32 cast
    if (rows + 2.0) * (cols + 2.0) > Lattice::MAX_CELLS as f64 {
        return Err(EngineError::InvalidConfiguration(format!(
            "{cols}x{rows} cells exceeds the lattice limit of {} cells",
            Lattice::MAX_CELLS
        )));
    }
    Ok((rows as u32, cols as u32))
}

fn require_positive(name: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidConfiguration(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Draw `floor(rows * cols * density)` uniform interior coordinates and set
/// each alive. Duplicates are not filtered, so fewer cells may end up alive.
/// Returns the number of draws.
pub(super) fn seed_cells<R: Rng>(lattice: &mut Lattice, rng: &mut R, density: f64) -> u32 {
    let rows = lattice.interior_rows();
    let cols = lattice.interior_cols();
    if rows == 0 || cols == 0 {
        return 0;
    }

    let draws = (f64::from(rows) * f64::from(cols) * density).floor() as u32;
    for _ in 0..draws {
        let y = rng.gen_range(1..=rows);
        let x = rng.gen_range(1..=cols);
        lattice.set(y, x, true);
    }
    draws
}
