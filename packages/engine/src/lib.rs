//! Cellsound Engine - Game of Life lattice for canvas rendering in WASM
//!
//! The JS side owns the canvas, the animation loop and audio synthesis. Per
//! frame it draws the live cells, optionally asks the sonifier which rows
//! under the scan line should sound, then calls `step()`.
//!
//! Architecture:
//! - core/          - lattice storage, errors, logging, safety macros
//! - domain/        - Life rule and configuration
//! - simulation/    - AutomatonGrid (initialize / step / queries)
//! - sonification/  - scan-line observer mapping live cells to tones
//! - api/           - wasm-bindgen facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod simulation;
pub mod sonification;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::utils::console_log::init(log::LevelFilter::Info);
    log::info!("Cellsound engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{Automaton, SonifierHandle};
pub use crate::core::error::{EngineError, EngineResult};
pub use crate::core::grid::Lattice;
pub use domain::config::AutomatonConfig;
pub use simulation::{AutomatonGrid, StepStats};
pub use sonification::{ScanLine, Sonifier, ToneTrigger};
