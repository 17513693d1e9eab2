use serde::{Deserialize, Serialize};

/// Point-in-time copy of the actor's resources, for traces and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceSnapshot {
    pub fire: u8,
    pub ice: u8,
    pub mana: u32,
    pub tp: i32,
}

/// Why a scheduled action could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    OnCooldown,
    InsufficientMana,
    InsufficientTp,
    RequirementUnmet,
}

/// Result of one rotation slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CastOutcome {
    Cast { potency: f64 },
    Failed(FailureReason),
}

impl CastOutcome {
    #[must_use]
    pub fn potency(&self) -> f64 {
        match self {
            CastOutcome::Cast { potency } => *potency,
            CastOutcome::Failed(_) => 0.0,
        }
    }

    #[must_use]
    pub fn is_cast(&self) -> bool {
        matches!(self, CastOutcome::Cast { .. })
    }
}

/// One line of a diagnostic trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Rotation slot this entry describes.
    pub slot: usize,
    pub action: String,
    pub outcome: CastOutcome,
    /// Accumulated potency after this slot.
    pub total_potency: f64,
    /// Simulated clock after this slot.
    pub elapsed: f64,
    /// Resources after this slot.
    pub resources: ResourceSnapshot,
}
