use crate::core::grid::Lattice;
use crate::domain::rules;

use super::step_stats::StepStats;
use super::{AutomatonGrid, StepTimer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Births, deaths and survivors produced while computing one or more rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GenerationDelta {
    pub(crate) births: u32,
    pub(crate) deaths: u32,
    pub(crate) alive: u32,
}

impl GenerationDelta {
    fn merge(self, other: Self) -> Self {
        Self {
            births: self.births + other.births,
            deaths: self.deaths + other.deaths,
            alive: self.alive + other.alive,
        }
    }
}

pub(super) fn step(grid: &mut AutomatonGrid) {
    let timer = StepTimer::start(grid.perf_enabled);

    let (next, delta) = next_generation(&grid.lattice);
    grid.lattice = next;
    grid.generation += 1;

    grid.last_step = StepStats {
        step_ms: timer.finish(),
        births: delta.births,
        deaths: delta.deaths,
        population: delta.alive,
        generation: grid.generation,
    };

    log::trace!(
        "generation {}: +{} -{} = {} alive",
        grid.generation,
        delta.births,
        delta.deaths,
        delta.alive
    );
}

/// Compute the next generation of `current` into a fresh lattice.
///
/// `current` is only read; the result has identical dimensions and a dead
/// border because only interior cells of the new buffer are ever written.
/// Interior rows are computed in parallel with Rayon when the `parallel`
/// feature is enabled.
pub(crate) fn next_generation(current: &Lattice) -> (Lattice, GenerationDelta) {
    #[cfg(feature = "parallel")]
    let result = next_generation_parallel(current);

    #[cfg(not(feature = "parallel"))]
    let result = next_generation_sequential(current);

    result
}

/// Row width and interior row count, `None` when there is no interior
fn interior_span(current: &Lattice) -> Option<(usize, usize)> {
    let interior_rows = current.interior_rows() as usize;
    if interior_rows == 0 || current.interior_cols() == 0 {
        return None;
    }
    Some((current.cols() as usize, interior_rows))
}

#[cfg(feature = "parallel")]
fn next_generation_parallel(current: &Lattice) -> (Lattice, GenerationDelta) {
    let mut next = Lattice::new(current.rows(), current.cols());
    let Some((width, interior_rows)) = interior_span(current) else {
        return (next, GenerationDelta::default());
    };

    let delta = next
        .cells
        .par_chunks_mut(width)
        .enumerate()
        .skip(1)
        .take(interior_rows)
        .map(|(y, row)| step_row(current, y as u32, row))
        .reduce(GenerationDelta::default, GenerationDelta::merge);

    (next, delta)
}

#[cfg(any(test, not(feature = "parallel")))]
fn next_generation_sequential(current: &Lattice) -> (Lattice, GenerationDelta) {
    let mut next = Lattice::new(current.rows(), current.cols());
    let Some((width, interior_rows)) = interior_span(current) else {
        return (next, GenerationDelta::default());
    };

    let delta = next
        .cells
        .chunks_mut(width)
        .enumerate()
        .skip(1)
        .take(interior_rows)
        .map(|(y, row)| step_row(current, y as u32, row))
        .fold(GenerationDelta::default(), GenerationDelta::merge);

    (next, delta)
}

/// Fill interior columns of lattice row `y` of the next generation
fn step_row(current: &Lattice, y: u32, row: &mut [bool]) -> GenerationDelta {
    let mut delta = GenerationDelta::default();
    for x in 1..=current.interior_cols() {
        let alive = current.get(y, x);
        let next = rules::next_state(alive, current.alive_neighbors(y, x));
        row[x as usize] = next;

        match (alive, next) {
            (false, true) => delta.births += 1,
            (true, false) => delta.deaths += 1,
            _ => {}
        }
        if next {
            delta.alive += 1;
        }
    }
    delta
}
