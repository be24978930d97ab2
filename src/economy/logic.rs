//! Typing Clicker economy rules: pure functions over [`GameState`].

use tracing::{debug, info};

use super::state::{
    xp_for_next_level, GameState, TrackId, AUTO_POWER_PER_PURCHASE, PASSIVE_TICK_MS,
};

/// Result of one grant of typing power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Earned {
    /// Typing power added to both currency and xp.
    pub currency: u64,
    /// Levels crossed by this grant (may be more than one).
    pub levels_gained: u32,
}

/// Result of [`advance_time`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassiveTicks {
    /// Whole seconds consumed from the accumulator.
    pub ticks: u64,
    pub earned: Earned,
}

/// Add `amount` to currency and xp, then climb as many levels as the new xp
/// allows.
fn grant(state: &mut GameState, amount: u64) -> Earned {
    if amount == 0 {
        return Earned::default();
    }
    state.currency = state.currency.saturating_add(amount);
    state.xp = state.xp.saturating_add(amount);
    Earned {
        currency: amount,
        levels_gained: apply_level_ups(state),
    }
}

fn apply_level_ups(state: &mut GameState) -> u32 {
    let mut levelups = 0;
    // A saturated threshold can never be passed; stop instead of spinning.
    while state.xp >= state.next_level_xp && state.next_level_xp < u64::MAX {
        state.level += 1;
        state.next_level_xp = xp_for_next_level(state.level);
        levelups += 1;
    }
    if levelups > 0 {
        info!(
            level = state.level,
            gained = levelups,
            next_level_xp = state.next_level_xp,
            "level up"
        );
    }
    levelups
}

/// Manual click: grant the current power per click.
pub fn click(state: &mut GameState) -> Earned {
    let power = state.power_per_click();
    grant(state, power)
}

/// Feed `dt_ms` of elapsed time into the passive income accumulator and pay
/// one `power_per_second` grant per whole second it holds.
///
/// Yield cannot change between ticks of one call, so all due ticks are paid
/// as a single grant; the level cascade covers every threshold crossed.
pub fn advance_time(state: &mut GameState, dt_ms: u64) -> PassiveTicks {
    state.auto_accumulator_ms = state.auto_accumulator_ms.saturating_add(dt_ms);
    let ticks = state.auto_accumulator_ms / PASSIVE_TICK_MS;
    if ticks == 0 {
        return PassiveTicks::default();
    }
    state.auto_accumulator_ms -= ticks * PASSIVE_TICK_MS;

    let per_second = state.power_per_second();
    let earned = if per_second > 0 {
        grant(state, per_second.saturating_mul(ticks))
    } else {
        Earned::default()
    };
    debug!(
        ticks,
        per_second,
        carried_ms = state.auto_accumulator_ms,
        "passive income"
    );
    PassiveTicks { ticks, earned }
}

/// Try to buy the next level of `track`. Returns true if successful.
///
/// An unaffordable purchase leaves the state untouched.
pub fn purchase(state: &mut GameState, track: TrackId) -> bool {
    let cost = state.cost(track);
    if state.currency < cost {
        return false;
    }

    state.currency -= cost;
    *state.track_level_mut(track) += 1;
    match track {
        TrackId::Practice => {
            state.power_per_click_base = state.power_per_click_base.saturating_add(1);
        }
        TrackId::Auto => {
            state.power_per_second_base = state
                .power_per_second_base
                .saturating_add(AUTO_POWER_PER_PURCHASE);
        }
        // The level bump alone raises the multiplier.
        TrackId::Multiplier => {}
    }
    debug!(
        track = track.id(),
        cost,
        level = state.track_level(track),
        currency = state.currency,
        "purchase"
    );
    true
}

/// Wipe spendable currency. Xp, level and upgrades are kept.
pub fn reset_currency(state: &mut GameState) {
    debug!(discarded = state.currency, "currency reset");
    state.currency = 0;
}

/// Format a number with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks(state: &mut GameState, n: usize) {
        for _ in 0..n {
            click(state);
        }
    }

    #[test]
    fn click_adds_currency_and_xp() {
        let mut state = GameState::new();
        let earned = click(&mut state);
        assert_eq!(earned.currency, 1);
        assert_eq!(state.currency, 1);
        assert_eq!(state.xp, 1);
    }

    #[test]
    fn click_respects_multiplier() {
        let mut state = GameState::new();
        state.power_per_click_base = 2;
        state.multiplier_level = 1;
        click(&mut state);
        assert_eq!(state.currency, 3); // floor(2 * 1.5)
    }

    #[test]
    fn click_with_zero_power_is_noop() {
        let mut state = GameState::new();
        state.power_per_click_base = 0;
        let before = state.clone();
        assert_eq!(click(&mut state), Earned::default());
        assert_eq!(state, before);
    }

    #[test]
    fn opening_scenario() {
        let mut state = GameState::new();
        clicks(&mut state, 5);
        assert_eq!(state.currency, 5);
        assert_eq!(state.xp, 5);

        assert!(!purchase(&mut state, TrackId::Practice));
        assert_eq!(state.currency, 5);

        clicks(&mut state, 5);
        assert_eq!(state.currency, 10);
        assert!(purchase(&mut state, TrackId::Practice));
        assert_eq!(state.currency, 0);
        assert_eq!(state.practice_level, 1);
        assert_eq!(state.power_per_click_base, 2);
        assert_eq!(state.xp, 10);
    }

    #[test]
    fn purchase_insufficient_funds_changes_nothing() {
        let mut state = GameState::new();
        state.currency = 49;
        state.auto_accumulator_ms = 300;
        let before = state.clone();
        assert!(!purchase(&mut state, TrackId::Auto));
        assert_eq!(state, before);
    }

    #[test]
    fn purchase_auto_adds_passive_power() {
        let mut state = GameState::new();
        state.currency = 50;
        assert!(purchase(&mut state, TrackId::Auto));
        assert_eq!(state.auto_level, 1);
        assert_eq!(state.power_per_second_base, 2);
        assert_eq!(state.power_per_click_base, 1);
        assert_eq!(state.currency, 0);
    }

    #[test]
    fn purchase_multiplier_only_bumps_level() {
        let mut state = GameState::new();
        state.currency = 600;
        assert!(purchase(&mut state, TrackId::Multiplier));
        assert_eq!(state.multiplier_level, 1);
        assert_eq!(state.power_per_click_base, 1);
        assert_eq!(state.power_per_second_base, 0);
        assert_eq!(state.currency, 100);
        assert_eq!(state.power_per_click(), 1); // floor(1.5)
    }

    #[test]
    fn purchase_with_exactly_the_whole_cost() {
        let mut state = GameState::new();
        state.auto_level = 2;
        state.power_per_second_base = 4;
        state.currency = 128; // 50 * 1.6^2
        assert!(purchase(&mut state, TrackId::Auto));
        assert_eq!(state.currency, 0);
        assert_eq!(state.auto_level, 3);
        assert_eq!(state.cost(TrackId::Auto), 205);

        state.currency = 204;
        assert!(!purchase(&mut state, TrackId::Auto));
        state.currency = 205;
        assert!(purchase(&mut state, TrackId::Auto));
        assert_eq!(state.currency, 0);
    }

    #[test]
    fn purchase_buys_exactly_one_level() {
        let mut state = GameState::new();
        state.currency = 1_000_000;
        assert!(purchase(&mut state, TrackId::Practice));
        assert_eq!(state.practice_level, 1);
        assert_eq!(state.currency, 1_000_000 - 10);
    }

    #[test]
    fn purchase_never_grants_xp() {
        let mut state = GameState::new();
        state.currency = 500;
        state.xp = 7;
        purchase(&mut state, TrackId::Multiplier);
        assert_eq!(state.xp, 7);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn purchase_cost_increases() {
        let mut state = GameState::new();
        state.currency = 1_000;
        let first = state.cost(TrackId::Practice);
        purchase(&mut state, TrackId::Practice);
        let second = state.cost(TrackId::Practice);
        purchase(&mut state, TrackId::Practice);
        let third = state.cost(TrackId::Practice);
        assert!(first < second && second < third);
        assert_eq!(state.currency, 1_000 - first - second);
    }

    #[test]
    fn advance_time_split_matches_single_call() {
        let mut split = GameState::new();
        split.power_per_second_base = 4;
        let mut whole = split.clone();

        advance_time(&mut split, 999);
        assert_eq!(split.currency, 0);
        advance_time(&mut split, 1);
        advance_time(&mut whole, 1_000);

        assert_eq!(split, whole);
        assert_eq!(whole.currency, 4);
        assert_eq!(whole.auto_accumulator_ms, 0);
    }

    #[test]
    fn advance_time_pays_whole_seconds_and_carries_rest() {
        let mut state = GameState::new();
        state.power_per_second_base = 2;
        let paid = advance_time(&mut state, 2_500);
        assert_eq!(paid.ticks, 2);
        assert_eq!(paid.earned.currency, 4);
        assert_eq!(state.currency, 4);
        assert_eq!(state.xp, 4);
        assert_eq!(state.auto_accumulator_ms, 500);
    }

    #[test]
    fn advance_time_consumes_ticks_without_income() {
        let mut state = GameState::new();
        let paid = advance_time(&mut state, 3_200);
        assert_eq!(paid.ticks, 3);
        assert_eq!(paid.earned, Earned::default());
        assert_eq!(state.currency, 0);
        assert_eq!(state.auto_accumulator_ms, 200);
    }

    #[test]
    fn advance_time_zero_is_noop() {
        let mut state = GameState::new();
        state.power_per_second_base = 10;
        let before = state.clone();
        assert_eq!(advance_time(&mut state, 0), PassiveTicks::default());
        assert_eq!(state, before);
    }

    #[test]
    fn advance_time_after_stall_pays_every_second() {
        let mut state = GameState::new();
        state.power_per_second_base = 2;
        state.multiplier_level = 1; // 3 per second
        let paid = advance_time(&mut state, 60_000);
        assert_eq!(paid.ticks, 60);
        assert_eq!(state.currency, 180);
    }

    #[test]
    fn grant_cascades_over_two_levels() {
        let mut state = GameState::new();
        let earned = grant(&mut state, 300);
        assert_eq!(earned.levels_gained, 2);
        assert_eq!(state.level, 3);
        assert_eq!(state.next_level_xp, 422);
        assert_eq!(state.xp, 300);
        assert_eq!(state.currency, 300);
    }

    #[test]
    fn passive_tick_can_cascade_levels() {
        let mut state = GameState::new();
        state.power_per_second_base = 900;
        let paid = advance_time(&mut state, 1_000);
        // 900 xp passes 188, 282, 422 and 633 but not 950
        assert_eq!(paid.earned.levels_gained, 4);
        assert_eq!(state.level, 5);
        assert_eq!(state.next_level_xp, xp_for_next_level(5));
    }

    #[test]
    fn level_up_on_exact_threshold() {
        let mut state = GameState::new();
        state.xp = 187;
        click(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.next_level_xp, 282);
    }

    #[test]
    fn grant_saturates_instead_of_overflowing() {
        let mut state = GameState::new();
        state.currency = u64::MAX - 1;
        state.xp = u64::MAX - 1;
        grant(&mut state, 10);
        assert_eq!(state.currency, u64::MAX);
        assert_eq!(state.xp, u64::MAX);
        assert!(state.level > 1);
    }

    #[test]
    fn reset_currency_keeps_progression() {
        let mut state = GameState::new();
        state.currency = 1_234;
        state.xp = 5_000;
        state.level = 7;
        state.practice_level = 3;
        state.auto_level = 2;
        state.multiplier_level = 1;
        let before = state.clone();

        reset_currency(&mut state);

        assert_eq!(state.currency, 0);
        assert_eq!(state.xp, before.xp);
        assert_eq!(state.level, before.level);
        assert_eq!(state.next_level_xp, before.next_level_xp);
        assert_eq!(state.practice_level, 3);
        assert_eq!(state.auto_level, 2);
        assert_eq!(state.multiplier_level, 1);
    }

    #[test]
    fn format_number_basic() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
