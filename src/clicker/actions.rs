//! Semantic action IDs for Typing Clicker tap targets.
//!
//! Registered during render and dispatched back via `InputEvent::Click`.

use typing_clicker::economy::TrackId;

// ── Core actions ────────────────────────────────────────────────
pub const TYPE_KEY: u16 = 0;
pub const RESET_CURRENCY: u16 = 1;

// ── Track purchase (base + TrackId::index) ──────────────────────
pub const BUY_TRACK_BASE: u16 = 100;

pub fn buy_track(track: TrackId) -> u16 {
    BUY_TRACK_BASE + track.index() as u16
}

/// Inverse of [`buy_track`].
pub fn track_for(action_id: u16) -> Option<TrackId> {
    let idx = action_id.checked_sub(BUY_TRACK_BASE)?;
    TrackId::from_index(idx as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_track_ids_map_back() {
        for track in TrackId::ALL {
            assert_eq!(track_for(buy_track(track)), Some(track));
        }
    }

    #[test]
    fn non_purchase_ids_have_no_track() {
        assert_eq!(track_for(TYPE_KEY), None);
        assert_eq!(track_for(RESET_CURRENCY), None);
        assert_eq!(track_for(BUY_TRACK_BASE + 3), None);
    }
}
