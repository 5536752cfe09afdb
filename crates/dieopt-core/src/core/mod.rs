//! # Core Module
//!
//! Stateless building blocks shared by the placement engine.
//!
//! ## Architecture
//!
//! - **Value Models** ([`models`]) - `Wafer`, `Die`, `PlacementResult` and the
//!   three-iteration summary
//! - **Geometry** ([`utils`]) - usable radius, die corner offsets, point-in-circle tests
//! - **Presets** ([`presets`]) - standard wafer diameters addressable by name
//! - **File I/O** ([`io`]) - reading and writing wafer maps as CSV
//!
//! Everything here is a pure function of its inputs; nothing holds mutable state.

pub mod io;
pub mod models;
pub mod presets;
pub mod utils;
