//! Mutable resource state of the simulated actor.
//!
//! The two stance tracks are mutually exclusive: at most one of `fire` and
//! `ice` is non-zero at any time. Transitions keep that invariant; they do
//! not clamp a requested level, so a bad catalog entry surfaces as
//! [`SimError::InvalidStanceLevel`] the next time a level is read.

use crate::config::{RegenPolicy, SimConfig, TABLE_MAX_STANCE};
use crate::error::{Result, SimError, Track};
use cadence_data::ResourceSnapshot;

/// Fraction of max mana regenerated per tick, indexed by ice level.
const ICE_REGEN_RATES: [f64; TABLE_MAX_STANCE as usize + 1] = [0.02, 0.32, 0.47, 0.62];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    fire: u8,
    ice: u8,
    max_stance: u8,
    mana: u32,
    max_mana: u32,
    tp: i32,
    max_tp: i32,
}

impl ResourceState {
    /// Fresh state: neutral stance, full mana and technique points.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self::with_limits(config.max_mana, config.max_tp, config.max_stance_level)
    }

    #[must_use]
    pub fn with_limits(max_mana: u32, max_tp: i32, max_stance: u8) -> Self {
        Self {
            fire: 0,
            ice: 0,
            max_stance,
            mana: max_mana,
            max_mana,
            tp: max_tp,
            max_tp,
        }
    }

    /// Overrides current mana, clamped to the pool size.
    #[must_use]
    pub fn with_mana(mut self, mana: u32) -> Self {
        self.mana = mana.min(self.max_mana);
        self
    }

    #[must_use]
    pub fn fire(&self) -> u8 {
        self.fire
    }

    #[must_use]
    pub fn ice(&self) -> u8 {
        self.ice
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    #[must_use]
    pub fn tp(&self) -> i32 {
        self.tp
    }

    #[must_use]
    pub fn max_tp(&self) -> i32 {
        self.max_tp
    }

    #[must_use]
    pub fn max_stance(&self) -> u8 {
        self.max_stance
    }

    #[must_use]
    pub fn is_burning(&self) -> bool {
        self.fire > 0
    }

    #[must_use]
    pub fn is_chilled(&self) -> bool {
        self.ice > 0
    }

    /// Fire level, failing if it is outside `0..=max_stance`.
    pub fn fire_level(&self) -> Result<u8> {
        self.checked(Track::Fire, self.fire)
    }

    /// Ice level, failing if it is outside `0..=max_stance`.
    pub fn ice_level(&self) -> Result<u8> {
        self.checked(Track::Ice, self.ice)
    }

    fn checked(&self, track: Track, level: u8) -> Result<u8> {
        let max = self.max_stance.min(TABLE_MAX_STANCE);
        if level > max {
            return Err(SimError::InvalidStanceLevel { track, level, max });
        }
        Ok(level)
    }

    /// Cancels an active ice stance, otherwise climbs the fire track up to the cap.
    pub fn raise_fire(&mut self) {
        if self.ice != 0 {
            self.ice = 0;
        } else if self.fire < self.max_stance {
            self.fire += 1;
        }
    }

    /// Cancels an active fire stance, otherwise climbs the ice track up to the cap.
    pub fn raise_ice(&mut self) {
        if self.fire != 0 {
            self.fire = 0;
        } else if self.ice < self.max_stance {
            self.ice += 1;
        }
    }

    /// Flips to the opposite track at `level`. Neutral stays neutral.
    pub fn swap(&mut self, level: u8) {
        if self.ice > 0 {
            self.ice = 0;
            self.fire = level;
        } else if self.fire > 0 {
            self.fire = 0;
            self.ice = level;
        }
    }

    pub fn set_max_fire(&mut self) {
        self.ice = 0;
        self.fire = self.max_stance;
    }

    pub fn set_max_ice(&mut self) {
        self.fire = 0;
        self.ice = self.max_stance;
    }

    /// Mana one regeneration tick would restore in the current stance.
    pub fn regen_amount(&self, policy: RegenPolicy) -> Result<u32> {
        let fire = self.fire_level()?;
        if fire > 0 && policy == RegenPolicy::SuppressWhileBurning {
            return Ok(0);
        }
        let ice = self.ice_level()?;
        let rate = ICE_REGEN_RATES[usize::from(ice)];
        Ok((f64::from(self.max_mana) * rate) as u32)
    }

    /// Applies one regeneration tick and returns the mana actually gained.
    pub fn regen_tick(&mut self, policy: RegenPolicy) -> Result<u32> {
        let amount = self.regen_amount(policy)?;
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
        Ok(self.mana - before)
    }

    #[must_use]
    pub fn can_afford(&self, mana: u32, tp: i32) -> (bool, bool) {
        (self.mana >= mana, self.tp >= tp)
    }

    /// Deducts costs. Mana never underflows; technique points may go negative.
    pub fn spend(&mut self, mana: u32, tp: i32) {
        debug_assert!(self.mana >= mana, "spend called without enough mana");
        self.mana = self.mana.saturating_sub(mana);
        self.tp = self.tp.saturating_sub(tp);
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            fire: self.fire,
            ice: self.ice,
            mana: self.mana,
            tp: self.tp,
        }
    }
}
