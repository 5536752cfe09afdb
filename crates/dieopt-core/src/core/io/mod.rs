//! Provides input/output for wafer maps.
//!
//! A wafer map is the list of die centres produced by a placement, stored as CSV so
//! that it can be handed to probers, plotting scripts or spreadsheets.

pub mod wafermap;
