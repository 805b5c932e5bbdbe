//! Premiere settlement: book the hall, pay the bills, face the critics,
//! and enter the work into the catalogue.

use rand::Rng;

use crate::constants::{
    PREMIERE_INSPIRATION_REWARD, SKILL_GAIN_FORM_QUALITY, SKILL_GAIN_HARMONY_QUALITY,
    SKILL_GAIN_MELODY_QUALITY, SKILL_GAIN_ORCHESTRAL,
};
use crate::catalog::SkillKind;
use crate::error::GameError;
use crate::numbers::{round_f64_to_i32, round_f64_to_i64};
use crate::patrons::record_dedication;
use crate::scoring::{calculate_premiere_success, PremiereSetup};
use crate::state::{CompletedWork, GameState, LogKind, WorkInProgress};
use crate::upgrades::{channel_multiplier, MultiplierChannel};

/// Up-front cost of staging a premiere: hall booking, musician fees, the
/// ensemble itself, and any advertising.
#[must_use]
pub fn premiere_cost(work: &WorkInProgress, setup: &PremiereSetup) -> i64 {
    setup.venue.info().cost
        + setup.musicians.info().cost
        + work.instrumentation.info().cost
        + setup.advertising_spent
}

/// Stage the premiere of a finished work. Validates the venue's reputation
/// gate, the dedication target, and the composer's purse, then resolves the
/// evening and applies every consequence. Returns the archived record.
pub fn schedule_premiere<R: Rng>(
    state: &mut GameState,
    work: &WorkInProgress,
    setup: &PremiereSetup,
    rng: &mut R,
) -> Result<CompletedWork, GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }
    let venue = setup.venue.info();
    if state.stats.reputation < venue.required_reputation {
        return Err(GameError::ReputationTooLow {
            required: venue.required_reputation,
            current: state.stats.reputation,
        });
    }
    if let Some(patron_id) = &setup.dedicated_to {
        if !state.patrons.iter().any(|p| &p.id == patron_id) {
            return Err(GameError::UnknownPatron(patron_id.clone()));
        }
    }
    let cost = premiere_cost(work, setup);
    if state.stats.money < cost {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: state.stats.money,
        });
    }

    let outcome = calculate_premiere_success(work, &state.skills, &state.tastes, setup, rng);

    // Standing arrangements scale the take, not the artistry.
    let earnings_mult = channel_multiplier(&state.upgrades, MultiplierChannel::Earnings);
    let reputation_mult = channel_multiplier(&state.upgrades, MultiplierChannel::Reputation);
    let inspiration_mult = channel_multiplier(&state.upgrades, MultiplierChannel::Inspiration);
    let earnings = round_f64_to_i64(crate::numbers::i64_to_f64(outcome.earnings) * earnings_mult);
    let reputation_gained =
        round_f64_to_i32(f64::from(outcome.reputation_gained) * reputation_mult);

    let dedicated_to = setup.dedicated_to.as_ref().and_then(|patron_id| {
        record_dedication(&mut state.patrons, patron_id).map(|p| p.name.clone())
    });

    let record = CompletedWork {
        id: state.claim_work_id(),
        title: work.title.clone(),
        form: work.form,
        style: work.style,
        instrumentation: work.instrumentation,
        quality: outcome.quality,
        premiere_date: state.current_date,
        venue: setup.venue,
        earnings,
        reputation_gained,
        review: outcome.review.clone(),
        dedicated_to,
        factors: Some(outcome.factors),
        popularity: Some(outcome.initial_popularity as f32),
        weeks_since_premiere: 0,
        total_publisher_earnings: Some(0),
        is_revival: false,
        original_work_id: None,
    };

    state.stats.money = state.stats.money - cost + earnings;
    state.stats.reputation += reputation_gained;
    state.stats.inspiration = (state.stats.inspiration
        + round_f64_to_i32(f64::from(PREMIERE_INSPIRATION_REWARD) * inspiration_mult))
    .clamp(0, 100);

    apply_skill_growth(state, work, outcome.quality, setup.dedicated_to.is_some());
    state.stats.clamp();

    state.push_log(
        format!(
            "Premiered \"{}\" at {}. Quality: {}.",
            record.title,
            venue.name,
            record.quality
        ),
        LogKind::Premiere,
    );
    log::info!(
        "premiere settled: {} quality={} earnings={}",
        record.id,
        record.quality,
        record.earnings
    );

    state.completed_works.push(record.clone());
    Ok(record)
}

/// Every premiere teaches something; what, depends on how it went and what
/// was on the program.
fn apply_skill_growth(state: &mut GameState, work: &WorkInProgress, quality: i32, dedicated: bool) {
    if quality >= SKILL_GAIN_MELODY_QUALITY {
        state.skills.raise(SkillKind::Melody, 1);
    }
    if quality >= SKILL_GAIN_HARMONY_QUALITY {
        state.skills.raise(SkillKind::Harmony, 1);
    }
    if work.instrumentation.is_orchestral() {
        state.skills.raise(SkillKind::Orchestration, SKILL_GAIN_ORCHESTRAL);
    }
    if quality >= SKILL_GAIN_FORM_QUALITY {
        state.skills.raise(SkillKind::Form, 1);
    }
    state.skills.raise(SkillKind::Productivity, 1);
    if dedicated {
        state.skills.raise(SkillKind::Social, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        CompositionForm, CompositionStyle, Instrumentation, MusicianTier, VenueId,
    };
    use crate::state::CompositionPhases;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn finished_sonata() -> WorkInProgress {
        WorkInProgress {
            form: CompositionForm::PianoSonata,
            style: CompositionStyle::Classical,
            instrumentation: Instrumentation::SoloPiano,
            phases: CompositionPhases {
                sketching: 8,
                orchestration: 6,
                rehearsal_prep: 6,
                revision: 6,
            },
            weeks_spent: 3,
            title: "Sonata in G major, Op. 1".to_string(),
        }
    }

    fn salon_setup() -> PremiereSetup {
        PremiereSetup {
            venue: VenueId::Salon,
            musicians: MusicianTier::Amateur,
            dedicated_to: None,
            advertising_spent: 0,
        }
    }

    #[test]
    fn cost_sums_every_line_item() {
        let work = finished_sonata();
        let setup = PremiereSetup {
            venue: VenueId::SmallHall,
            musicians: MusicianTier::Professional,
            dedicated_to: None,
            advertising_spent: 30,
        };
        assert_eq!(premiere_cost(&work, &setup), 75 + 120 + 0 + 30);
    }

    #[test]
    fn settlement_moves_money_and_archives_the_work() {
        let mut state = GameState::new("Ludwig");
        let work = finished_sonata();
        let setup = salon_setup();
        let cost = premiere_cost(&work, &setup);
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let record = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap();

        assert_eq!(state.completed_works.len(), 1);
        assert_eq!(state.stats.money, 100 - cost + record.earnings);
        assert_eq!(state.stats.reputation, record.reputation_gained);
        assert_eq!(record.id, "work_0000");
        assert_eq!(record.weeks_since_premiere, 0);
        assert_eq!(record.total_publisher_earnings, Some(0));
        assert!(!record.is_revival);
        assert!(record.factors.is_some());
        // Finishing a premiere always sharpens discipline.
        assert_eq!(state.skills.productivity, 11);
        assert_eq!(state.event_log[0].kind, LogKind::Premiere);
    }

    #[test]
    fn grand_venues_are_gated_by_reputation() {
        let mut state = GameState::new("Ludwig");
        let work = finished_sonata();
        let mut setup = salon_setup();
        setup.venue = VenueId::ConcertHall;
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let err = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::ReputationTooLow {
                required: 60,
                current: 0
            }
        );
    }

    #[test]
    fn an_empty_purse_cancels_the_evening() {
        let mut state = GameState::new("Ludwig");
        state.stats.money = 5;
        let work = finished_sonata();
        let setup = salon_setup();
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let err = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 30,
                available: 5
            }
        );
        assert!(state.completed_works.is_empty());
    }

    #[test]
    fn dedication_touches_patron_and_social_skill() {
        let mut state = GameState::new("Ludwig");
        state.stats.money = 500;
        let work = finished_sonata();
        let setup = PremiereSetup {
            dedicated_to: Some("countess_erdody".to_string()),
            ..salon_setup()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let record = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap();
        assert_eq!(record.dedicated_to.as_deref(), Some("Countess Erdődy"));
        let patron = state
            .patrons
            .iter()
            .find(|p| p.id == "countess_erdody")
            .unwrap();
        assert_eq!(patron.relationship, 15);
        assert_eq!(state.skills.social, 6);
    }

    #[test]
    fn unknown_dedication_target_is_rejected_before_payment() {
        let mut state = GameState::new("Ludwig");
        let work = finished_sonata();
        let setup = PremiereSetup {
            dedicated_to: Some("prince_nobody".to_string()),
            ..salon_setup()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let err = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap_err();
        assert_eq!(err, GameError::UnknownPatron("prince_nobody".to_string()));
        assert_eq!(state.stats.money, 100);
    }

    #[test]
    fn publisher_contract_scales_earnings() {
        let mut state = GameState::new("Ludwig");
        state.stats.money = 1000;
        state.stats.reputation = 25;
        crate::upgrades::purchase_upgrade(&mut state, "publisher_contract").unwrap();
        let money_before = state.stats.money;

        let work = finished_sonata();
        let setup = salon_setup();
        let cost = premiere_cost(&work, &setup);
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let record = schedule_premiere(&mut state, &work, &setup, &mut rng).unwrap();

        // The same seed without the contract yields the base take.
        let mut plain = GameState::new("Control");
        plain.stats.money = 1000;
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let base = schedule_premiere(&mut plain, &work, &setup, &mut rng).unwrap();

        assert_eq!(
            record.earnings,
            round_f64_to_i64(crate::numbers::i64_to_f64(base.earnings) * 1.3)
        );
        assert_eq!(state.stats.money, money_before - cost + record.earnings);
    }
}
