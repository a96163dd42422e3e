//! Implementation of multiple devices using serial transfer (Link Cable).
//!
//! These are purely virtual devices used for testing and host-side
//! diagnostics (eg: [`buffer`] and [`stdout`]).

pub mod buffer;
pub mod stdout;
