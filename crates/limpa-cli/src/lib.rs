//! CLI library components for limpador.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
