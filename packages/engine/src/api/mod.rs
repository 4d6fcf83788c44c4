//! API - JS-facing wrappers around the engine types

pub mod wasm;
