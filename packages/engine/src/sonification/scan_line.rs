/// Vertical line sweeping right to left across the drawn interior
///
/// Starts at the right edge, moves a fixed number of pixels per frame and
/// wraps back to the right edge once it would go below zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanLine {
    x: f64,
    canvas_width: f64,
    cell_pitch: f64,
    speed: f64,
    interior_cols: u32,
}

impl ScanLine {
    /// `cells_per_frame` is the speed as a fraction of the cell pitch
    pub fn new(interior_cols: u32, cell_pitch: f64, cells_per_frame: f64) -> Self {
        let canvas_width = f64::from(interior_cols) * cell_pitch;
        Self {
            x: canvas_width,
            canvas_width,
            cell_pitch,
            speed: cell_pitch * cells_per_frame,
            interior_cols,
        }
    }

    /// Pixel position of the line within the drawn interior
    pub fn x(&self) -> f64 { self.x }

    pub fn canvas_width(&self) -> f64 { self.canvas_width }

    /// Lattice column currently under the line, if any
    pub fn column(&self) -> Option<u32> {
        if self.cell_pitch <= 0.0 {
            return None;
        }
        self.display_to_lattice((self.x / self.cell_pitch).floor())
    }

    /// Move one frame. Returns the lattice column the line just entered,
    /// or None when it is still inside the same column (or wrapped past
    /// the right edge, where there is no column).
    pub fn advance(&mut self) -> Option<u32> {
        if self.cell_pitch <= 0.0 || self.canvas_width <= 0.0 {
            return None;
        }

        let mut next = self.x - self.speed;
        if next < 0.0 {
            next = self.canvas_width;
        }
        let current_col = (self.x / self.cell_pitch).floor();
        let next_col = (next / self.cell_pitch).floor();
        self.x = next;

        if current_col == next_col {
            return None;
        }
        self.display_to_lattice(next_col)
    }

    /// Display column d covers pixels [d * pitch, (d + 1) * pitch) and is
    /// lattice column d + 1; the right edge itself belongs to no column
    fn display_to_lattice(&self, display_col: f64) -> Option<u32> {
        let display_col = display_col as u32;
        (display_col < self.interior_cols).then_some(display_col + 1)
    }
}
