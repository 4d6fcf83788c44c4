use super::*;

/// Moore neighborhood as (dy, dx), row-major, center excluded
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Lattice {
    /// Live cells among the 8 neighbors of interior cell (y, x), in 0..=8.
    ///
    /// Only valid for interior coordinates: the border ring is what keeps
    /// every offset inside the buffer. Reads are unchecked in release, so
    /// this stays crate-private; outside callers go through
    /// `AutomatonGrid::count_alive_neighbors`.
    #[inline]
    pub(crate) fn alive_neighbors(&self, y: u32, x: u32) -> u8 {
        debug_assert!(
            self.is_interior(y, x),
            "alive_neighbors: ({}, {}) is not interior in {}x{} lattice",
            y,
            x,
            self.rows,
            self.cols
        );
        let cols = self.cols as usize;
        let center = self.index(y, x);
        let cells = &self.cells;

        let mut count = 0u8;
        for (dy, dx) in NEIGHBOR_OFFSETS {
            let idx = (center as isize + dy as isize * cols as isize + dx as isize) as usize;
            count += u8::from(*fast!(cells, [idx]));
        }
        count
    }
}
