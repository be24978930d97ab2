//! Typing Clicker economy: currency, xp/levels and the three upgrade tracks.
//!
//! [`logic`] holds the rules as free functions over a [`GameState`].
//! [`EconomyEngine`] owns one session's state and is the boundary the
//! front-end talks to: it validates raw inputs (signed frame deltas, string
//! track ids) before handing them to the rules.

pub mod error;
pub mod logic;
pub mod snapshot;
pub mod state;

use tracing::warn;

pub use error::EconomyError;
pub use logic::{Earned, PassiveTicks};
pub use snapshot::{Snapshot, TrackView};
pub use state::{GameState, TrackId};

/// Sole owner of a session's [`GameState`].
#[derive(Clone, Debug, Default)]
pub struct EconomyEngine {
    state: GameState,
}

impl EconomyEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Grant the current power per click.
    pub fn click(&mut self) -> Earned {
        logic::click(&mut self.state)
    }

    /// Advance the passive income clock by `dt_ms` milliseconds.
    ///
    /// Negative input means the caller's clock is broken; it is rejected and
    /// nothing changes.
    pub fn advance_time(&mut self, dt_ms: i64) -> Result<PassiveTicks, EconomyError> {
        let dt = u64::try_from(dt_ms).map_err(|_| {
            warn!(dt_ms, "rejected negative elapsed time");
            EconomyError::NegativeElapsed(dt_ms)
        })?;
        Ok(logic::advance_time(&mut self.state, dt))
    }

    /// Buy one level of `track`. Returns false (and changes nothing) when the
    /// player cannot afford it.
    pub fn purchase(&mut self, track: TrackId) -> bool {
        logic::purchase(&mut self.state, track)
    }

    /// [`purchase`](Self::purchase) for a track given by its string id.
    pub fn purchase_named(&mut self, id: &str) -> Result<bool, EconomyError> {
        let track = id.parse::<TrackId>().map_err(|err| {
            warn!(id, "rejected unknown upgrade track");
            err
        })?;
        Ok(self.purchase(track))
    }

    /// Zero the spendable currency; progression is kept.
    pub fn reset_currency(&mut self) {
        logic::reset_currency(&mut self.state);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }
}
