//! Celestial bodies: static descriptors, per-body runtime state and the
//! per-frame simulation step.

pub mod registry;
pub mod simulation;
pub mod state;
