//! Sonification - turns live cells under a sweeping scan line into tones
//!
//! An observer over `AutomatonGrid`: it reads the grid once per frame and
//! never mutates it. Actual synthesis (oscillators, envelopes) stays with
//! the host; this module only decides which rows sound and at what pitch.

mod scan_line;
mod sonifier;
pub mod tone;

pub use scan_line::ScanLine;
pub use sonifier::{Sonifier, ToneTrigger};
