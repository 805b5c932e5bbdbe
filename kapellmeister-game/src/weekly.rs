//! The weekly tick: the single authoritative advancement of the game clock
//! and everything that rides on it.

use rand::Rng;

use crate::constants::{
    HEALTH_REGEN_PER_WEEK, INSPIRATION_DRIFT_DOWN, INSPIRATION_DRIFT_UP,
    INSPIRATION_DRIFT_UP_CHANCE, OLD_AGE_WEEKLY_CHANCE, OLD_AGE_YEAR, TREND_INTENSITY_CAP,
    TREND_SHIFT_CHANCE, TREND_SHIFT_INTENSITY_STEP, TREND_SHIFT_MONTH_INTERVAL,
};
use crate::catalog::TasteTrend;
use crate::error::GameError;
use crate::publishing::publisher_week_tick;
use crate::state::{Ending, GameState, LogKind, TasteState};

/// What one tick of the clock did, for shells that want to narrate it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekOutcome {
    pub publisher_income: i64,
    pub taste_shifted: bool,
    pub revival_offered: bool,
    pub game_ended: bool,
}

/// Advance the game by one week: roll the calendar, drift public taste
/// once a quarter, recover health, drift inspiration, run the publisher
/// pass, and - late in life - roll against old age. Refuses to run once
/// the career has ended.
pub fn advance_week<R: Rng>(state: &mut GameState, rng: &mut R) -> Result<WeekOutcome, GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }

    state.current_date.advance_week();

    // Fashion reconsiders itself each quarter, on the quarter's first week.
    let mut taste_shifted = false;
    if state.current_date.month % TREND_SHIFT_MONTH_INTERVAL == 0 && state.current_date.week == 1 {
        taste_shifted = shift_tastes(&mut state.tastes, rng);
        if taste_shifted {
            let [a, b] = state.tastes.current;
            state.push_log(
                format!("The public's taste has turned toward {a} and {b}."),
                LogKind::System,
            );
        }
    }

    let recovery = HEALTH_REGEN_PER_WEEK.min(state.stats.max_health - state.stats.health);
    state.stats.health += recovery.max(0);

    let drift = if rng.gen_bool(INSPIRATION_DRIFT_UP_CHANCE) {
        INSPIRATION_DRIFT_UP
    } else {
        -INSPIRATION_DRIFT_DOWN
    };
    state.stats.inspiration = (state.stats.inspiration + drift).clamp(0, 100);

    let publisher = publisher_week_tick(state, rng);

    let mut game_ended = false;
    if state.current_date.year >= OLD_AGE_YEAR && rng.gen_bool(OLD_AGE_WEEKLY_CHANCE) {
        state.ending = Some(Ending::OldAge);
        state.push_log(
            format!("{} has {}.", state.composer_name, Ending::OldAge.reason()),
            LogKind::System,
        );
        log::info!("career ended: {}", Ending::OldAge.reason());
        game_ended = true;
    }

    Ok(WeekOutcome {
        publisher_income: publisher.income,
        taste_shifted,
        revival_offered: publisher.revival_offered,
        game_ended,
    })
}

/// With even odds, swap one active trend for a fresh one. The replacement
/// is never already active and never the opposite of the trend staying in
/// the other slot, so an opposed pair can never be active together. A
/// shift hardens opinion: intensity climbs toward its cap.
fn shift_tastes<R: Rng>(tastes: &mut TasteState, rng: &mut R) -> bool {
    if !rng.gen_bool(TREND_SHIFT_CHANCE) {
        return false;
    }

    let slot = rng.gen_range(0..tastes.current.len());
    let keeper = tastes.current[1 - slot];
    let candidates: Vec<TasteTrend> = TasteTrend::ALL
        .into_iter()
        .filter(|t| !tastes.is_active(*t) && *t != keeper.opposite())
        .collect();
    if candidates.is_empty() {
        return false;
    }
    tastes.current[slot] = candidates[rng.gen_range(0..candidates.len())];
    tastes.intensity = (tastes.intensity + TREND_SHIFT_INTENSITY_STEP).min(TREND_INTENSITY_CAP);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GameDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    #[test]
    fn tick_advances_the_calendar() {
        let mut state = GameState::new("Ludwig");
        let mut r = rng(1);
        advance_week(&mut state, &mut r).unwrap();
        assert_eq!(state.current_date, GameDate::new(1820, 0, 2));
    }

    #[test]
    fn health_recovers_without_overshoot() {
        let mut state = GameState::new("Ludwig");
        state.stats.health = 93;
        let mut r = rng(2);
        advance_week(&mut state, &mut r).unwrap();
        assert_eq!(state.stats.health, 98);
        advance_week(&mut state, &mut r).unwrap();
        assert_eq!(state.stats.health, 100);
        advance_week(&mut state, &mut r).unwrap();
        assert_eq!(state.stats.health, 100);
    }

    #[test]
    fn inspiration_drifts_within_bounds() {
        let mut state = GameState::new("Ludwig");
        let mut r = rng(3);
        for _ in 0..200 {
            let before = state.stats.inspiration;
            advance_week(&mut state, &mut r).unwrap();
            let delta = state.stats.inspiration - before;
            assert!(
                delta == 2 || delta == -1 || state.stats.inspiration == 0
                    || state.stats.inspiration == 100,
                "unexpected drift {delta}"
            );
            assert!((0..=100).contains(&state.stats.inspiration));
        }
    }

    #[test]
    fn tastes_only_move_on_quarter_boundaries() {
        let mut state = GameState::new("Ludwig");
        let mut r = rng(4);
        // Weeks 2..4 of January and all of February: no quarter boundary.
        for _ in 0..7 {
            let outcome = advance_week(&mut state, &mut r).unwrap();
            assert!(!outcome.taste_shifted);
        }
        assert_eq!(state.tastes, TasteState::default());
    }

    #[test]
    fn opposed_trends_never_cohabit() {
        let mut state = GameState::new("Ludwig");
        let mut r = rng(5);
        for _ in 0..2_000 {
            if advance_week(&mut state, &mut r).is_err() {
                break;
            }
            let [a, b] = state.tastes.current;
            assert_ne!(a, b, "duplicate trend active");
            assert_ne!(a.opposite(), b, "opposed trends active together");
            assert!(state.tastes.intensity <= 80);
        }
    }

    #[test]
    fn shift_replaces_exactly_one_trend() {
        let mut tastes = TasteState::default();
        let mut r = rng(6);
        let mut shifts = 0;
        for _ in 0..400 {
            let before = tastes.current;
            if shift_tastes(&mut tastes, &mut r) {
                shifts += 1;
                let kept = tastes
                    .current
                    .iter()
                    .filter(|t| before.contains(t))
                    .count();
                assert_eq!(kept, 1, "a shift must keep exactly one trend");
            } else {
                assert_eq!(tastes.current, before);
            }
        }
        // Even odds per call; 400 calls make ~200 shifts.
        assert!((140..=260).contains(&shifts));
        assert_eq!(tastes.intensity, 80);
    }

    #[test]
    fn nobody_dies_young() {
        let mut state = GameState::new("Ludwig");
        let mut r = rng(7);
        for _ in 0..500 {
            let outcome = advance_week(&mut state, &mut r).unwrap();
            assert!(!outcome.game_ended);
        }
        assert!(!state.is_game_over());
    }

    #[test]
    fn old_age_eventually_claims_the_composer() {
        let mut state = GameState::new("Ludwig");
        state.current_date = GameDate::new(1870, 0, 1);
        let mut r = rng(8);
        let mut weeks = 0;
        loop {
            match advance_week(&mut state, &mut r) {
                Ok(outcome) => {
                    weeks += 1;
                    if outcome.game_ended {
                        break;
                    }
                    assert!(weeks < 5_000, "0.5% weekly mortality never fired");
                }
                Err(e) => panic!("tick failed before the end: {e}"),
            }
        }
        assert_eq!(state.ending, Some(Ending::OldAge));
        // The flag is sticky: further ticks are refused.
        assert_eq!(advance_week(&mut state, &mut r), Err(GameError::GameOver));
        assert_eq!(state.ending, Some(Ending::OldAge));
    }
}
