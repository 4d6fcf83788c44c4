use crate::core::grid::Lattice;

/// Interior (y, x) of every live cell in row-major order
pub(super) fn live_cells(lattice: &Lattice) -> impl Iterator<Item = (u32, u32)> + '_ {
    let cols = lattice.interior_cols();
    (1..=lattice.interior_rows()).flat_map(move |y| {
        (1..=cols)
            .filter(move |&x| lattice.get(y, x))
            .map(move |x| (y, x))
    })
}

/// Interior rows alive in lattice column `col`, top to bottom
pub(super) fn column_alive_rows(lattice: &Lattice, col: u32) -> impl Iterator<Item = u32> + '_ {
    let interior_col = col >= 1 && col <= lattice.interior_cols();
    let rows = if interior_col { lattice.interior_rows() } else { 0 };
    (1..=rows).filter(move |&y| lattice.get(y, col))
}
