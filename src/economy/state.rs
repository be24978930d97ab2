/// Typing Clicker game state definitions.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::EconomyError;

// ── Balance ─────────────────────────────────────────────────────

/// Length of one passive income tick.
pub const PASSIVE_TICK_MS: u64 = 1_000;
/// `next_level_xp = ceil(LEVEL_XP_BASE * LEVEL_XP_GROWTH^level)`.
pub const LEVEL_XP_BASE: u64 = 125;
/// 1.5 as `(numerator, denominator)`.
pub const LEVEL_XP_GROWTH: (u64, u64) = (3, 2);
/// Each CPU upgrade multiplies every yield by this factor.
pub const MULTIPLIER_STEP: f64 = 1.5;
pub const START_POWER_PER_CLICK: u64 = 1;
pub const START_POWER_PER_SECOND: u64 = 0;
/// Passive yield added by one Auto Typing purchase.
pub const AUTO_POWER_PER_PURCHASE: u64 = 2;

fn saturating_exponent(level: u32) -> i32 {
    i32::try_from(level).unwrap_or(i32::MAX)
}

/// `ceil(base * (num / den)^exp)`.
///
/// Computed in integers while `num^exp * base` fits in a `u128`, so whole
/// results such as `50 * 1.6^2 = 128` stay whole. Past that the float
/// formula takes over; results that large saturate at `u64::MAX` anyway or
/// are far from an integer boundary.
fn ceil_scaled(base: u64, (num, den): (u64, u64), exp: u32) -> u64 {
    let exact = (num as u128)
        .checked_pow(exp)
        .and_then(|n| n.checked_mul(base as u128))
        .zip((den as u128).checked_pow(exp));
    match exact {
        Some((n, d)) => u64::try_from(n.div_ceil(d)).unwrap_or(u64::MAX),
        None => {
            let rate = num as f64 / den as f64;
            (base as f64 * rate.powi(saturating_exponent(exp))).ceil() as u64
        }
    }
}

/// Cumulative xp needed to leave `level`.
pub fn xp_for_next_level(level: u32) -> u64 {
    ceil_scaled(LEVEL_XP_BASE, LEVEL_XP_GROWTH, level)
}

/// Global yield multiplier after `multiplier_level` CPU purchases.
pub fn multiplier_for(multiplier_level: u32) -> f64 {
    MULTIPLIER_STEP.powi(saturating_exponent(multiplier_level))
}

// ── Upgrade tracks ──────────────────────────────────────────────

/// The three upgrade lines. Definitions are fixed; only the purchase count
/// per track lives in [`GameState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackId {
    /// Typing Skill: +1 base power per click.
    Practice,
    /// Auto Typing: +2 base power per second.
    Auto,
    /// CPU: ×1.5 on everything.
    Multiplier,
}

impl TrackId {
    /// All tracks in display order.
    pub const ALL: [TrackId; 3] = [TrackId::Practice, TrackId::Auto, TrackId::Multiplier];

    pub fn index(self) -> usize {
        match self {
            TrackId::Practice => 0,
            TrackId::Auto => 1,
            TrackId::Multiplier => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<TrackId> {
        Self::ALL.get(idx).copied()
    }

    /// Stable identifier used at string boundaries.
    pub fn id(self) -> &'static str {
        match self {
            TrackId::Practice => "practice",
            TrackId::Auto => "auto",
            TrackId::Multiplier => "multiplier",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            TrackId::Practice => "Typing Skill",
            TrackId::Auto => "Auto Typing",
            TrackId::Multiplier => "CPU",
        }
    }

    /// Cost of the first purchase.
    pub fn base_cost(self) -> u64 {
        match self {
            TrackId::Practice => 10,
            TrackId::Auto => 50,
            TrackId::Multiplier => 500,
        }
    }

    /// Cost growth per purchase already made, as `(numerator, denominator)`:
    /// 1.35, 1.60 and 3.00.
    pub fn growth_rate(self) -> (u64, u64) {
        match self {
            TrackId::Practice => (27, 20),
            TrackId::Auto => (8, 5),
            TrackId::Multiplier => (3, 1),
        }
    }

    /// Price of the next purchase when `level` purchases have been made.
    pub fn cost_at(self, level: u32) -> u64 {
        ceil_scaled(self.base_cost(), self.growth_rate(), level)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TrackId {
    type Err = EconomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackId::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| EconomyError::UnknownTrack(s.to_string()))
    }
}

// ── Game state ──────────────────────────────────────────────────

/// Full state of a play session.
///
/// Fields are crate-private: outside code changes it only through
/// [`super::logic`] / [`super::EconomyEngine`] and reads it through
/// [`super::Snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Spendable typing power.
    pub(crate) currency: u64,
    /// Typing power earned all-time. Never decreases.
    pub(crate) xp: u64,
    pub(crate) level: u32,
    /// Cumulative xp at which `level` goes up.
    pub(crate) next_level_xp: u64,
    pub(crate) practice_level: u32,
    pub(crate) auto_level: u32,
    pub(crate) multiplier_level: u32,
    pub(crate) power_per_click_base: u64,
    pub(crate) power_per_second_base: u64,
    /// Milliseconds not yet paid out as a passive tick (< 1000 between calls).
    pub(crate) auto_accumulator_ms: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            currency: 0,
            xp: 0,
            level: 1,
            next_level_xp: xp_for_next_level(1),
            practice_level: 0,
            auto_level: 0,
            multiplier_level: 0,
            power_per_click_base: START_POWER_PER_CLICK,
            power_per_second_base: START_POWER_PER_SECOND,
            auto_accumulator_ms: 0,
        }
    }

    /// Purchases made on `track`.
    pub fn track_level(&self, track: TrackId) -> u32 {
        match track {
            TrackId::Practice => self.practice_level,
            TrackId::Auto => self.auto_level,
            TrackId::Multiplier => self.multiplier_level,
        }
    }

    pub(crate) fn track_level_mut(&mut self, track: TrackId) -> &mut u32 {
        match track {
            TrackId::Practice => &mut self.practice_level,
            TrackId::Auto => &mut self.auto_level,
            TrackId::Multiplier => &mut self.multiplier_level,
        }
    }

    pub fn multiplier(&self) -> f64 {
        multiplier_for(self.multiplier_level)
    }

    pub fn power_per_click(&self) -> u64 {
        (self.power_per_click_base as f64 * self.multiplier()).floor() as u64
    }

    pub fn power_per_second(&self) -> u64 {
        (self.power_per_second_base as f64 * self.multiplier()).floor() as u64
    }

    /// Current price of the next purchase on `track`.
    pub fn cost(&self, track: TrackId) -> u64 {
        track.cost_at(self.track_level(track))
    }

    pub fn can_afford(&self, track: TrackId) -> bool {
        self.currency >= self.cost(track)
    }

    /// How far xp has moved from the current level's threshold towards the
    /// next one, in `[0, 1]`.
    pub fn level_progress(&self) -> f64 {
        let floor = if self.level <= 1 {
            0
        } else {
            xp_for_next_level(self.level - 1)
        };
        let span = self.next_level_xp.saturating_sub(floor);
        if span == 0 {
            return 1.0;
        }
        (self.xp.saturating_sub(floor) as f64 / span as f64).clamp(0.0, 1.0)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
