//! Engine configuration
//!
//! Everything beyond the three `initialize` arguments: seeding density,
//! an optional RNG seed and the scan-line tone mapping. Hosts pass it as
//! JSON; every field is optional.
//!
//! ```json
//! { "density": 0.6, "seed": 42, "base_midi_note": 64, "note_range": 64 }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};

pub const DEFAULT_DENSITY: f64 = 0.4;
pub const DEFAULT_BASE_MIDI_NOTE: u8 = 64;
pub const DEFAULT_NOTE_RANGE: u8 = 64;
/// Scan-line speed as a fraction of the cell pitch (2px per frame at 10px cells)
pub const DEFAULT_SCAN_CELLS_PER_FRAME: f64 = 0.2;

/// One past the highest MIDI note; the top row maps to `base + range - 1`
const MIDI_NOTE_LIMIT: u16 = 128;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutomatonConfig {
    /// Fraction of interior cells drawn for live seeding
    pub density: f64,
    /// Fixed RNG seed; a clock seed is used when absent
    pub seed: Option<u64>,
    pub base_midi_note: u8,
    pub note_range: u8,
    pub scan_cells_per_frame: f64,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
            base_midi_note: DEFAULT_BASE_MIDI_NOTE,
            note_range: DEFAULT_NOTE_RANGE,
            scan_cells_per_frame: DEFAULT_SCAN_CELLS_PER_FRAME,
        }
    }
}

impl AutomatonConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: AutomatonConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| EngineError::InvalidConfiguration(e.to_string()))
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.density.is_finite() && (0.0..=1.0).contains(&self.density)) {
            return Err(EngineError::InvalidConfiguration(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        if !(self.scan_cells_per_frame.is_finite() && self.scan_cells_per_frame > 0.0) {
            return Err(EngineError::InvalidConfiguration(format!(
                "scan_cells_per_frame must be positive, got {}",
                self.scan_cells_per_frame
            )));
        }
        let top = u16::from(self.base_midi_note) + u16::from(self.note_range);
        if top > MIDI_NOTE_LIMIT {
            return Err(EngineError::InvalidConfiguration(format!(
                "base_midi_note + note_range must not exceed {MIDI_NOTE_LIMIT}, got {top}"
            )));
        }
        Ok(())
    }
}
