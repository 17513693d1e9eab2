//! Core data structures for the Cadence simulation.

pub mod action;
pub mod rotation;
pub mod trace;
