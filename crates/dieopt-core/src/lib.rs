//! # DieOpt Core Library
//!
//! Estimates how many rectangular dies fit, unrotated, on a circular wafer once an
//! edge-exclusion ring and the scribe streets between dies are accounted for
//! ("dies per wafer", DPW), and reports where each die centre lands.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable value models (`Wafer`, `Die`,
//!   `PlacementResult`), closed-form geometry helpers, named wafer presets and
//!   wafer-map CSV I/O.
//!
//! - **[`engine`]: The Logic Core.** The grid enumerator, the two-stage containment
//!   filter, the single-offset counter and the three fixed-offset optimizer, together
//!   with the parameter coercion layer that turns scalar inputs into models.
//!
//! - **[`workflows`]: The Public API.** Ties the engine to result presentation: the
//!   [`workflows::place::dieopt`] entry point, the [`workflows::place::DieOpt`] wrapper,
//!   coordinate selection and the rendering seam.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::die::Die;
pub use crate::core::models::placement::{Axis, IterationLabel, PlacementResult, ThreeRunSummary};
pub use crate::core::models::wafer::Wafer;
pub use crate::engine::counter::evaluate;
pub use crate::engine::error::DieOptError;
pub use crate::engine::optimizer::optimize;
pub use crate::workflows::place::{DieOpt, DieOptOptions, DieOptOutput, dieopt};
pub use crate::workflows::present::{Coordinates, Selection};
