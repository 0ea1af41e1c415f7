//! Wirehack terminal front-end
//!
//! Rendering and persistence helpers over the core puzzle engine.
//!
//! This crate re-exports the engine crate for convenience.

pub mod display;
pub mod stats_file;

pub use wirehack_engine::*;
