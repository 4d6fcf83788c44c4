use crate::domain::config::AutomatonConfig;
use crate::simulation::AutomatonGrid;

use super::scan_line::ScanLine;
use super::tone;

/// One tone to start this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneTrigger {
    /// Lattice row of the live cell
    pub row: u32,
    pub midi_note: u8,
    pub frequency: f64,
}

/// Scan-line observer: each frame, live cells in a newly entered column
/// become tone triggers keyed by their row
#[derive(Clone, Debug)]
pub struct Sonifier {
    scan: ScanLine,
    base_midi_note: u8,
    note_range: u8,
    cells_per_frame: f64,
    triggers: Vec<ToneTrigger>,
}

impl Sonifier {
    pub fn new(grid: &AutomatonGrid) -> Self {
        let config: &AutomatonConfig = grid.config();
        Self {
            scan: ScanLine::new(grid.interior_cols(), grid.cell_pitch(), config.scan_cells_per_frame),
            base_midi_note: config.base_midi_note,
            note_range: config.note_range,
            cells_per_frame: config.scan_cells_per_frame,
            triggers: Vec::new(),
        }
    }

    /// Restart the sweep for a re-initialized (e.g. resized) grid
    pub fn reset(&mut self, grid: &AutomatonGrid) {
        self.scan = ScanLine::new(grid.interior_cols(), grid.cell_pitch(), self.cells_per_frame);
        self.triggers.clear();
    }

    /// Advance the scan line one frame and collect the tones to play
    pub fn observe(&mut self, grid: &AutomatonGrid) -> &[ToneTrigger] {
        self.triggers.clear();
        let Some(col) = self.scan.advance() else {
            return &self.triggers;
        };

        let row_count = grid.row_count();
        for row in grid.column_alive_rows(col) {
            let midi_note = tone::midi_note_for_row(row, row_count, self.base_midi_note, self.note_range);
            self.triggers.push(ToneTrigger {
                row,
                midi_note,
                frequency: tone::midi_to_frequency(midi_note),
            });
        }
        if !self.triggers.is_empty() {
            log::debug!("column {col}: {} tones", self.triggers.len());
        }
        &self.triggers
    }

    /// Triggers produced by the last `observe`
    pub fn triggers(&self) -> &[ToneTrigger] { &self.triggers }

    pub fn scan_line(&self) -> &ScanLine { &self.scan }
}
