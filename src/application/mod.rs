//! Application layer: option resolution and the example factory itself.
//!
//! [`options`] holds the declarative schema machinery; [`factory`] wires the
//! schema to the domain ports and drives entity construction.

pub mod factory;
pub mod options;
