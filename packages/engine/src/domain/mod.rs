//! Domain - the transition rule and engine configuration

pub mod config;
pub mod rules;
