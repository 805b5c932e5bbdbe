//! The publisher lifecycle of premiered works: weekly royalties while
//! popularity lasts, decay toward obscurity, and the occasional offer to
//! revive a long-faded success.

use rand::Rng;

use crate::constants::{
    LEGACY_POPULARITY_BONUS, POPULARITY_DECAY_BASE, POPULARITY_DECAY_DIFFICULTY_RATE,
    POPULARITY_DECAY_FLOOR, POPULARITY_DECAY_MIN_BASE, POPULARITY_DECAY_QUALITY_RATE,
    PUBLISHER_DIFFICULTY_RATE, PUBLISHER_INCOME_SCALE, REVIVAL_COST, REVIVAL_EARNINGS_RATE,
    REVIVAL_INSPIRATION_COST, REVIVAL_LUCK_MAX, REVIVAL_MIN_QUALITY, REVIVAL_MIN_WEEKS,
    REVIVAL_POPULARITY_BONUS, REVIVAL_WEEKLY_CHANCE,
};
use crate::error::GameError;
use crate::numbers::{round_f64_to_i32, round_f64_to_i64};
use crate::review::pick_review;
use crate::state::{CompletedWork, GameState, LogKind, RevivalOpportunity};
use crate::upgrades::{channel_multiplier, MultiplierChannel};

/// What the weekly publisher pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublisherWeek {
    /// Royalties credited this week across the whole catalogue.
    pub income: i64,
    pub revival_offered: bool,
}

/// Royalties one work earns this week, before any contract multiplier.
fn weekly_royalty(difficulty: i32, quality: i32, popularity: f32) -> i64 {
    round_f64_to_i64(
        f64::from(difficulty) * PUBLISHER_DIFFICULTY_RATE
            * (f64::from(quality) / 100.0)
            * (f64::from(popularity) / 100.0)
            * PUBLISHER_INCOME_SCALE,
    )
}

/// How much popularity a work loses per week. Difficult, high-quality
/// works linger; nothing fades slower than the floor.
fn weekly_decay(difficulty: i32, quality: i32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let base = (POPULARITY_DECAY_BASE - difficulty as f32 * POPULARITY_DECAY_DIFFICULTY_RATE)
        .max(POPULARITY_DECAY_MIN_BASE);
    #[allow(clippy::cast_precision_loss)]
    let slowed = base - (quality as f32 / 100.0) * POPULARITY_DECAY_QUALITY_RATE;
    slowed.max(POPULARITY_DECAY_FLOOR)
}

/// A work qualifies for a revival offer only when every condition holds:
/// fully faded, at least a year old, good enough to bother, not itself a
/// revival, and not already revived.
fn revival_eligible(work: &CompletedWork, catalogue: &[CompletedWork]) -> bool {
    work.popularity == Some(0.0)
        && work.weeks_since_premiere >= REVIVAL_MIN_WEEKS
        && work.quality >= REVIVAL_MIN_QUALITY
        && !work.is_revival
        && !catalogue
            .iter()
            .any(|other| other.original_work_id.as_deref() == Some(work.id.as_str()))
}

/// Run the weekly publisher pass over every completed work: age it, pay
/// royalties while its popularity holds, decay the popularity, and perhaps
/// surface a revival opportunity. Credits the income to the composer and
/// records it as the week's display figure.
pub fn publisher_week_tick<R: Rng>(state: &mut GameState, rng: &mut R) -> PublisherWeek {
    let earnings_mult = channel_multiplier(&state.upgrades, MultiplierChannel::Earnings);
    let mut income_total = 0_i64;

    for work in &mut state.completed_works {
        work.weeks_since_premiere += 1;
        // Saves from before the publisher system carry neither field.
        let popularity = *work
            .popularity
            .get_or_insert((work.quality + LEGACY_POPULARITY_BONUS).min(100) as f32);
        let earned = work.total_publisher_earnings.get_or_insert(0);

        if popularity > 0.0 {
            let royalty = round_f64_to_i64(
                crate::numbers::i64_to_f64(weekly_royalty(
                    work.form.info().difficulty,
                    work.quality,
                    popularity,
                )) * earnings_mult,
            );
            income_total += royalty;
            *earned += royalty;

            let decayed =
                (popularity - weekly_decay(work.form.info().difficulty, work.quality)).max(0.0);
            work.popularity = Some(decayed);
        }
    }

    state.stats.money += income_total;
    state.weekly_publisher_income = income_total;

    let mut revival_offered = false;
    if state.pending_revival.is_none() {
        let candidate = state
            .completed_works
            .iter()
            .filter(|work| revival_eligible(work, &state.completed_works))
            .find(|_| rng.gen_bool(REVIVAL_WEEKLY_CHANCE))
            .map(|work| RevivalOpportunity {
                work_id: work.id.clone(),
                work_title: work.title.clone(),
                original_quality: work.quality,
            });
        if let Some(opportunity) = candidate {
            log::info!("revival offered for {}", opportunity.work_id);
            state.push_log(
                format!(
                    "A publisher proposes reviving \"{}\".",
                    opportunity.work_title
                ),
                LogKind::System,
            );
            state.pending_revival = Some(opportunity);
            revival_offered = true;
        }
    }

    PublisherWeek {
        income: income_total,
        revival_offered,
    }
}

/// Accept the pending revival: spend money and inspiration, restage the
/// work with a quality boost from matured skills, and enter the revival as
/// a new completed work with a fresh popularity surge.
pub fn accept_revival<R: Rng>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<CompletedWork, GameError> {
    let Some(pending) = state.pending_revival.clone() else {
        return Err(GameError::NoPendingRevival);
    };
    if state.stats.money < REVIVAL_COST {
        return Err(GameError::InsufficientFunds {
            needed: REVIVAL_COST,
            available: state.stats.money,
        });
    }
    if state.stats.inspiration < REVIVAL_INSPIRATION_COST {
        return Err(GameError::InsufficientInspiration {
            needed: REVIVAL_INSPIRATION_COST,
            available: state.stats.inspiration,
        });
    }
    let Some(source) = state.find_work(&pending.work_id).cloned() else {
        return Err(GameError::RevivalSourceMissing);
    };

    state.stats.money -= REVIVAL_COST;
    state.stats.inspiration -= REVIVAL_INSPIRATION_COST;

    let quality_boost =
        round_f64_to_i32(f64::from(state.skills.melody + state.skills.harmony) / 10.0);
    let quality =
        (pending.original_quality + quality_boost + rng.gen_range(0..=REVIVAL_LUCK_MAX)).min(100);
    let earnings = round_f64_to_i64(f64::from(quality) * REVIVAL_EARNINGS_RATE);
    let reputation_gained = round_f64_to_i32(f64::from(quality) / 10.0);
    let review = pick_review(quality, source.form, source.style, rng);

    let record = CompletedWork {
        id: state.claim_work_id(),
        title: source.title.clone(),
        form: source.form,
        style: source.style,
        instrumentation: source.instrumentation,
        quality,
        premiere_date: state.current_date,
        venue: source.venue,
        earnings,
        reputation_gained,
        review,
        dedicated_to: None,
        factors: None,
        popularity: Some(((quality + REVIVAL_POPULARITY_BONUS).min(100)) as f32),
        weeks_since_premiere: 0,
        total_publisher_earnings: Some(0),
        is_revival: true,
        original_work_id: Some(source.id.clone()),
    };

    state.stats.money += earnings;
    state.stats.reputation += reputation_gained;
    state.pending_revival = None;
    state.push_log(
        format!(
            "Revived \"{}\" to renewed acclaim. Quality: {}.",
            record.title, record.quality
        ),
        LogKind::Premiere,
    );
    state.completed_works.push(record.clone());
    Ok(record)
}

/// Turn the publisher down; the opportunity does not return for this work
/// this week.
pub fn decline_revival(state: &mut GameState) -> Result<(), GameError> {
    let Some(pending) = state.pending_revival.take() else {
        return Err(GameError::NoPendingRevival);
    };
    state.push_log(
        format!("Declined to revive \"{}\".", pending.work_title),
        LogKind::System,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GameDate;
    use crate::catalog::{CompositionForm, CompositionStyle, Instrumentation, VenueId};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn archived_work(id: &str, quality: i32, popularity: f32) -> CompletedWork {
        CompletedWork {
            id: id.to_string(),
            title: format!("Work {id}"),
            form: CompositionForm::PianoSonata,
            style: CompositionStyle::Classical,
            instrumentation: Instrumentation::SoloPiano,
            quality,
            premiere_date: GameDate::new(1820, 0, 1),
            venue: VenueId::Salon,
            earnings: 0,
            reputation_gained: 0,
            review: String::new(),
            dedicated_to: None,
            factors: None,
            popularity: Some(popularity),
            weeks_since_premiere: 0,
            total_publisher_earnings: Some(0),
            is_revival: false,
            original_work_id: None,
        }
    }

    #[test]
    fn royalty_formula_matches_the_ledger() {
        // difficulty 2, quality 80, popularity 100:
        // 2*0.5 * 0.8 * 1.0 * 2 = 1.6 -> 2.
        assert_eq!(weekly_royalty(2, 80, 100.0), 2);
        // difficulty 5, quality 90, popularity 50:
        // 2.5 * 0.9 * 0.5 * 2 = 2.25 -> 2.
        assert_eq!(weekly_royalty(5, 90, 50.0), 2);
        assert_eq!(weekly_royalty(1, 10, 0.5), 0);
    }

    #[test]
    fn decay_slows_for_difficult_quality_work() {
        // Lied (difficulty 1), quality 40: max(0.5, 3-0.4)=2.6 - 0.2 = 2.4.
        assert!((weekly_decay(1, 40) - 2.4).abs() < 1e-6);
        // Opera (difficulty 6), quality 100: max(0.5, 0.6)=0.6 - 0.5 = 0.3 floor.
        assert!((weekly_decay(6, 100) - 0.3).abs() < 1e-6);
        // The floor holds even for absurd inputs.
        assert!(weekly_decay(6, 100) >= POPULARITY_DECAY_FLOOR - 1e-6);
    }

    #[test]
    fn tick_ages_pays_and_decays() {
        let mut state = GameState::new("Ludwig");
        state.completed_works.push(archived_work("work_0000", 80, 100.0));
        let money_before = state.stats.money;
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let week = publisher_week_tick(&mut state, &mut rng);

        let work = &state.completed_works[0];
        assert_eq!(work.weeks_since_premiere, 1);
        assert_eq!(week.income, 2);
        assert_eq!(state.stats.money, money_before + 2);
        assert_eq!(state.weekly_publisher_income, 2);
        assert_eq!(work.total_publisher_earnings, Some(2));
        let expected_pop = 100.0 - weekly_decay(2, 80);
        assert!((work.popularity.unwrap() - expected_pop).abs() < 1e-6);
    }

    #[test]
    fn faded_works_earn_nothing() {
        let mut state = GameState::new("Ludwig");
        state.completed_works.push(archived_work("work_0000", 80, 0.0));
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let week = publisher_week_tick(&mut state, &mut rng);
        assert_eq!(week.income, 0);
        assert_eq!(state.completed_works[0].popularity, Some(0.0));
    }

    #[test]
    fn legacy_saves_are_initialized_on_first_tick() {
        let mut state = GameState::new("Ludwig");
        let mut legacy = archived_work("work_0000", 70, 0.0);
        legacy.popularity = None;
        legacy.total_publisher_earnings = None;
        state.completed_works.push(legacy);
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        publisher_week_tick(&mut state, &mut rng);
        let work = &state.completed_works[0];
        // min(100, quality + 20) minus one week of decay.
        let expected = 90.0 - weekly_decay(2, 70);
        assert!((work.popularity.unwrap() - expected).abs() < 1e-6);
        assert!(work.total_publisher_earnings.is_some());
    }

    fn eligible_work() -> CompletedWork {
        let mut work = archived_work("work_0000", 80, 0.0);
        work.weeks_since_premiere = 60;
        work
    }

    #[test]
    fn eligibility_requires_every_condition() {
        let catalogue = vec![eligible_work()];
        assert!(revival_eligible(&catalogue[0], &catalogue));

        let mut still_popular = eligible_work();
        still_popular.popularity = Some(0.5);
        assert!(!revival_eligible(&still_popular, &catalogue));

        let mut too_recent = eligible_work();
        too_recent.weeks_since_premiere = 51;
        assert!(!revival_eligible(&too_recent, &catalogue));

        let mut too_weak = eligible_work();
        too_weak.quality = 49;
        assert!(!revival_eligible(&too_weak, &catalogue));

        let mut already_a_revival = eligible_work();
        already_a_revival.is_revival = true;
        assert!(!revival_eligible(&already_a_revival, &catalogue));

        let mut revived_catalogue = vec![eligible_work()];
        let mut revival = archived_work("work_0001", 85, 50.0);
        revival.is_revival = true;
        revival.original_work_id = Some("work_0000".to_string());
        revived_catalogue.push(revival);
        assert!(!revival_eligible(
            &revived_catalogue[0],
            &revived_catalogue
        ));
    }

    #[test]
    fn ineligible_works_never_generate_offers() {
        let mut state = GameState::new("Ludwig");
        let mut work = eligible_work();
        work.quality = 49; // one condition short
        state.completed_works.push(work);
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        for _ in 0..2_000 {
            publisher_week_tick(&mut state, &mut rng);
            assert!(state.pending_revival.is_none());
        }
    }

    #[test]
    fn eligible_work_eventually_draws_an_offer() {
        let mut state = GameState::new("Ludwig");
        state.completed_works.push(eligible_work());
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let mut offered = false;
        for _ in 0..1_000 {
            let week = publisher_week_tick(&mut state, &mut rng);
            if week.revival_offered {
                offered = true;
                break;
            }
        }
        assert!(offered, "3% weekly chance never fired in 1000 weeks");
        let pending = state.pending_revival.as_ref().unwrap();
        assert_eq!(pending.work_id, "work_0000");
        assert_eq!(pending.original_quality, 80);
    }

    #[test]
    fn only_one_offer_exists_at_a_time() {
        let mut state = GameState::new("Ludwig");
        state.completed_works.push(eligible_work());
        let mut second = eligible_work();
        second.id = "work_0001".to_string();
        state.completed_works.push(second);
        state.pending_revival = Some(RevivalOpportunity {
            work_id: "work_0000".to_string(),
            work_title: "Work".to_string(),
            original_quality: 80,
        });
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..500 {
            let week = publisher_week_tick(&mut state, &mut rng);
            assert!(!week.revival_offered);
        }
        assert_eq!(
            state.pending_revival.as_ref().unwrap().work_id,
            "work_0000"
        );
    }

    #[test]
    fn accepting_a_revival_spends_and_restages() {
        let mut state = GameState::new("Ludwig");
        state.stats.money = 200;
        state.stats.inspiration = 50;
        state.skills.melody = 40;
        state.skills.harmony = 30;
        state.completed_works.push(eligible_work());
        state.pending_revival = Some(RevivalOpportunity {
            work_id: "work_0000".to_string(),
            work_title: "Work work_0000".to_string(),
            original_quality: 80,
        });

        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let record = accept_revival(&mut state, &mut rng).unwrap();

        assert!(record.is_revival);
        assert_eq!(record.original_work_id.as_deref(), Some("work_0000"));
        // boost = round((40+30)/10) = 7; quality in 87..=96, capped at 100.
        assert!((87..=96).contains(&record.quality));
        assert_eq!(record.earnings, i64::from(record.quality) * 5);
        assert_eq!(
            record.reputation_gained,
            round_f64_to_i32(f64::from(record.quality) / 10.0)
        );
        assert_eq!(
            record.popularity,
            Some(((record.quality + 10).min(100)) as f32)
        );
        assert!(record.factors.is_none());
        assert_eq!(state.stats.inspiration, 30);
        assert_eq!(state.stats.money, 200 - 50 + record.earnings);
        assert!(state.pending_revival.is_none());
        assert_eq!(state.completed_works.len(), 2);
    }

    #[test]
    fn revival_needs_money_and_inspiration() {
        let mut state = GameState::new("Ludwig");
        state.completed_works.push(eligible_work());
        state.pending_revival = Some(RevivalOpportunity {
            work_id: "work_0000".to_string(),
            work_title: "Work".to_string(),
            original_quality: 80,
        });
        let mut rng = ChaCha20Rng::seed_from_u64(31);

        state.stats.money = 10;
        let err = accept_revival(&mut state, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 50,
                available: 10
            }
        );

        state.stats.money = 100;
        state.stats.inspiration = 5;
        let err = accept_revival(&mut state, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientInspiration {
                needed: 20,
                available: 5
            }
        );
        assert!(state.pending_revival.is_some());
    }

    #[test]
    fn declining_clears_the_offer() {
        let mut state = GameState::new("Ludwig");
        state.pending_revival = Some(RevivalOpportunity {
            work_id: "work_0000".to_string(),
            work_title: "Work".to_string(),
            original_quality: 80,
        });
        decline_revival(&mut state).unwrap();
        assert!(state.pending_revival.is_none());
        assert_eq!(decline_revival(&mut state), Err(GameError::NoPendingRevival));
    }
}
