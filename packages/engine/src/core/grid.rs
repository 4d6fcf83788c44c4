//! Lattice - flat row-major storage of cell states
//!
//! The lattice always carries a one-cell dead border around the interior:
//!
//! ```text
//!   row 0          border (always dead)
//!   rows 1..=R     interior, columns 1..=C are real cells
//!   row R+1        border (always dead)
//! ```
//!
//! Every interior cell therefore has a full 8-neighborhood inside the
//! buffer and the neighbor sum needs no bounds checks.
//!
//! Instead of: Vec<Vec<bool>>  // one allocation per row
//! We have:    cells[]         // one contiguous buffer JS can view as Uint8Array

use super::error::{EngineError, EngineResult};

mod indexing;
mod accessors;
mod neighbors;

pub use neighbors::NEIGHBOR_OFFSETS;

/// Bordered cell lattice; `rows`/`cols` include the border ring.
///
/// The neighbor sum reads without bounds checks and is not part of the
/// public surface:
///
/// ```compile_fail
/// let lattice = cellsound_engine::Lattice::with_interior(3, 3).unwrap();
/// lattice.alive_neighbors(0, 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lattice {
    rows: u32,
    cols: u32,
    size: usize,
    pub(crate) cells: Vec<bool>,
}

impl Lattice {
    /// Upper bound on cells, border included (~64 MiB of `bool`)
    pub const MAX_CELLS: usize = 1 << 26;

    /// All-dead lattice around `interior_rows x interior_cols` real cells.
    ///
    /// Fails when the bordered extent does not fit in `u32` or exceeds
    /// [`Lattice::MAX_CELLS`].
    pub fn with_interior(interior_rows: u32, interior_cols: u32) -> EngineResult<Self> {
        let too_large = || {
            EngineError::InvalidConfiguration(format!(
                "{interior_cols}x{interior_rows} cells exceeds the lattice limit of {} cells",
                Self::MAX_CELLS
            ))
        };
        let rows = interior_rows.checked_add(2).ok_or_else(too_large)?;
        let cols = interior_cols.checked_add(2).ok_or_else(too_large)?;
        match (rows as usize).checked_mul(cols as usize) {
            Some(size) if size <= Self::MAX_CELLS => Ok(Self::new(rows, cols)),
            _ => Err(too_large()),
        }
    }

    /// All-dead lattice with the given total extents (border included)
    pub(crate) fn new(rows: u32, cols: u32) -> Self {
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            size,
            cells: vec![false; size],
        }
    }

    /// Lattice before the first `initialize`: no rows, no columns
    pub fn empty() -> Self {
        Self::default()
    }
}
