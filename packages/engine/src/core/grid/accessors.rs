use super::*;

impl Lattice {
    // === Cell access ===
    #[inline]
    pub fn get(&self, y: u32, x: u32) -> bool {
        self.cells[self.index(y, x)]
    }

    #[inline]
    pub fn set(&mut self, y: u32, x: u32, alive: bool) {
        let idx = self.index(y, x);
        self.cells[idx] = alive;
    }

    /// Full lattice row, border columns included
    pub fn row(&self, y: u32) -> &[bool] {
        let start = self.index(y, 0);
        &self.cells[start..start + self.cols as usize]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Raw view for the renderer; `bool` is one byte holding 0 or 1
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }

    /// Live cells; the border never holds any so the whole buffer is counted
    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|&&alive| alive).count() as u32
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn border_is_dead(&self) -> bool {
        if self.rows == 0 || self.cols == 0 {
            return true;
        }
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let rows_dead = !self.row(0).contains(&true) && !self.row(last_row).contains(&true);
        let cols_dead = (0..self.rows).all(|y| !self.get(y, 0) && !self.get(y, last_col));
        rows_dead && cols_dead
    }
}
