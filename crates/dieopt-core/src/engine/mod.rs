//! # Engine Module
//!
//! The placement engine: everything needed to turn a wafer and a die footprint into
//! die counts and die centres.
//!
//! ## Architecture
//!
//! Data flows one way through the submodules:
//!
//! - **Grid Enumeration** ([`grid`]) - an index lattice large enough to cover the
//!   usable circle, mapped to physical centres for a given offset
//! - **Containment** ([`containment`]) - a conservative radius prune followed by the
//!   exact four-corner test
//! - **Counting** ([`counter`]) - one offset in, one `PlacementResult` out
//! - **Optimization** ([`optimizer`]) - the three fixed-offset iterations and the
//!   tie-broken choice of the best one
//! - **Configuration** ([`config`]) - coercion of scalar inputs into `Wafer`/`Die`
//! - **Error Handling** ([`error`]) - boundary errors surfaced to callers
//!
//! The engine holds no state. With the `parallel` feature the offset evaluations run
//! on the rayon thread pool; results do not depend on evaluation order.

pub mod config;
pub mod containment;
pub mod counter;
pub mod error;
pub mod grid;
pub mod optimizer;
