//! Core - lattice storage, error types and low-level helpers

// Utils first so the exported macros are in scope for the grid code
#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;
