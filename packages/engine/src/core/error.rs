//! Engine errors
//!
//! Both variants are precondition violations raised at the call site.
//! Nothing inside the engine retries or substitutes a fallback grid.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Non-positive or non-finite viewport/pitch, or an invalid config value
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Cell coordinates outside the addressable range of the lattice
    #[error("cell ({row}, {col}) is out of range for a {rows}x{cols} lattice")]
    OutOfRangeAccess { row: u32, col: u32, rows: u32, cols: u32 },
}

pub type EngineResult<T> = Result<T, EngineError>;
