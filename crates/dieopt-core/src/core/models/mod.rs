//! # Core Models Module
//!
//! Plain immutable value types describing a placement problem and its answer.
//!
//! ## Key Components
//!
//! - [`wafer`] - the circular substrate and its edge exclusion
//! - [`die`] - the rectangular footprint and the scribe street around it
//! - [`placement`] - the result of one offset evaluation and the summary of the
//!   three fixed-offset iterations
//!
//! ```ignore
//! use dieopt::{Die, Wafer, optimize};
//!
//! let wafer = Wafer::new(50.8, 2.0);
//! let die = Die::new(1.0, 1.0, 7.0);
//! let summary = optimize(&wafer, &die);
//! println!("best DPW = {}", summary.best().dpw);
//! ```

pub mod die;
pub mod placement;
pub mod wafer;
