//! # Workflows Module
//!
//! High-level entry points for callers of the library.
//!
//! ## Architecture
//!
//! - **Placement Workflow** ([`place`]) - the [`place::dieopt`] call and the
//!   [`place::DieOpt`] wrapper: optimize, select coordinates, optionally draw
//! - **Presentation** ([`present`]) - parsing of the `best`/`iterN`/`all` selector
//!   and conversion of results into plain coordinate pairs
//! - **Rendering Seam** ([`render`]) - the [`render::WaferSurface`] trait through
//!   which outlines and die centres reach a drawing backend

pub mod place;
pub mod present;
pub mod render;
