//! Read-only view of a [`GameState`] for the presentation layer.

use serde::Serialize;

use super::state::{GameState, TrackId};

/// One upgrade track as the UI needs it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackView {
    pub id: TrackId,
    pub label: &'static str,
    /// Purchases made so far.
    pub level: u32,
    /// Price of the next purchase.
    pub cost: u64,
    pub affordable: bool,
}

/// Everything a frame needs to draw. Owns its data, so holding or editing a
/// snapshot never touches the engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub currency: u64,
    pub xp: u64,
    pub level: u32,
    pub next_level_xp: u64,
    /// Share of the way to the next level, in `[0, 1]`.
    pub level_progress: f64,
    pub practice_level: u32,
    pub auto_level: u32,
    pub multiplier_level: u32,
    pub power_per_click_base: u64,
    pub power_per_second_base: u64,
    pub auto_accumulator_ms: u64,
    pub power_per_click: u64,
    pub power_per_second: u64,
    pub multiplier: f64,
    /// Indexed by [`TrackId::index`].
    pub tracks: [TrackView; 3],
}

impl Snapshot {
    pub fn track(&self, id: TrackId) -> &TrackView {
        &self.tracks[id.index()]
    }

    /// Current price of `id`.
    pub fn cost(&self, id: TrackId) -> u64 {
        self.track(id).cost
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let view = |id: TrackId| TrackView {
            id,
            label: id.label(),
            level: state.track_level(id),
            cost: state.cost(id),
            affordable: state.can_afford(id),
        };
        Self {
            currency: state.currency,
            xp: state.xp,
            level: state.level,
            next_level_xp: state.next_level_xp,
            level_progress: state.level_progress(),
            practice_level: state.practice_level,
            auto_level: state.auto_level,
            multiplier_level: state.multiplier_level,
            power_per_click_base: state.power_per_click_base,
            power_per_second_base: state.power_per_second_base,
            auto_accumulator_ms: state.auto_accumulator_ms,
            power_per_click: state.power_per_click(),
            power_per_second: state.power_per_second(),
            multiplier: state.multiplier(),
            tracks: TrackId::ALL.map(view),
        }
    }
}
