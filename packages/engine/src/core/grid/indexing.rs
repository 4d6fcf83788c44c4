use super::*;

impl Lattice {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn interior_rows(&self) -> u32 { self.rows.saturating_sub(2) }

    #[inline]
    pub fn interior_cols(&self) -> u32 { self.cols.saturating_sub(2) }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, y: u32, x: u32) -> usize {
        y as usize * self.cols as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((idx / cols) as u32, (idx % cols) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, y: u32, x: u32) -> bool {
        y < self.rows && x < self.cols
    }

    /// True for real cells, false for the border ring and anything outside
    #[inline]
    pub fn is_interior(&self, y: u32, x: u32) -> bool {
        y >= 1 && x >= 1 && y <= self.interior_rows() && x <= self.interior_cols()
    }
}
