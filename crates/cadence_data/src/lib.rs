//! Plain data types shared by the Cadence rotation search.
//!
//! Nothing in this crate carries simulation logic; the rules that give these
//! values meaning live in `cadence_core`.

pub mod data;

pub use data::action::{
    ActionCategory, ActionDefinition, ActionId, Effect, Element, Requirement,
};
pub use data::rotation::Rotation;
pub use data::trace::{CastOutcome, FailureReason, ResourceSnapshot, TraceEntry};
