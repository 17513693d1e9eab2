//! Cadence: genetic search for the highest sustained-potency action rotation.
//!
//! The simulation and search live in `cadence_core`; this crate wires
//! configuration, catalogs and reporting together for the `cadence` binary.

pub mod app;
pub mod model;

pub use app::App;
