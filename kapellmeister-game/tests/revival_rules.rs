//! The five-condition revival gate, falsified one condition at a time
//! across many weekly ticks.

use kapellmeister_game::{
    accept_revival, advance_week, decline_revival, CompletedWork, CompositionForm,
    CompositionStyle, GameDate, GameError, GameState, Instrumentation, VenueId,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn faded_work(id: &str) -> CompletedWork {
    CompletedWork {
        id: id.to_string(),
        title: format!("Quartet {id}"),
        form: CompositionForm::StringQuartet,
        style: CompositionStyle::EarlyRomantic,
        instrumentation: Instrumentation::ChamberEnsemble,
        quality: 72,
        premiere_date: GameDate::new(1820, 0, 1),
        venue: VenueId::Salon,
        earnings: 120,
        reputation_gained: 8,
        review: "\"A fine evening.\"".to_string(),
        dedicated_to: None,
        factors: None,
        popularity: Some(0.0),
        weeks_since_premiere: 80,
        total_publisher_earnings: Some(40),
        is_revival: false,
        original_work_id: None,
    }
}

/// Run many ticks and report whether any revival was ever offered.
fn offered_within(state: &mut GameState, weeks: usize, seed: u64) -> bool {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for _ in 0..weeks {
        match advance_week(state, &mut rng) {
            Ok(outcome) => {
                if outcome.revival_offered {
                    return true;
                }
            }
            Err(_) => break,
        }
    }
    false
}

#[test]
fn a_fully_eligible_work_gets_its_offer() {
    let mut state = GameState::new("Ludwig");
    state.completed_works.push(faded_work("work_0000"));
    assert!(offered_within(&mut state, 1_000, 0xA));
    let pending = state.pending_revival.as_ref().unwrap();
    assert_eq!(pending.work_id, "work_0000");
    assert_eq!(pending.original_quality, 72);
}

#[test]
fn lingering_popularity_blocks_the_offer() {
    let mut state = GameState::new("Ludwig");
    let mut work = faded_work("work_0000");
    // Popularity must have reached exactly zero. Seed it high enough that
    // a thousand weeks of decay cannot drain it (floor decay 0.3/week
    // against quartet decay ~1.44/week still empties 100 in ~70 weeks, so
    // keep refilling instead).
    work.popularity = Some(100.0);
    state.completed_works.push(work);
    let mut rng = ChaCha20Rng::seed_from_u64(0xB);
    for _ in 0..1_000 {
        let outcome = advance_week(&mut state, &mut rng).unwrap();
        assert!(!outcome.revival_offered);
        state.completed_works[0].popularity = Some(100.0);
    }
    assert!(state.pending_revival.is_none());
}

#[test]
fn young_works_are_not_revived() {
    let mut state = GameState::new("Ludwig");
    let mut work = faded_work("work_0000");
    work.weeks_since_premiere = 0;
    state.completed_works.push(work);
    let mut rng = ChaCha20Rng::seed_from_u64(0xC);
    // 51 ticks bring it to exactly 51 weeks: still one short.
    for _ in 0..51 {
        let outcome = advance_week(&mut state, &mut rng).unwrap();
        assert!(!outcome.revival_offered);
    }
    assert_eq!(state.completed_works[0].weeks_since_premiere, 51);
    assert!(state.pending_revival.is_none());
}

#[test]
fn mediocre_works_stay_forgotten() {
    let mut state = GameState::new("Ludwig");
    let mut work = faded_work("work_0000");
    work.quality = 49;
    state.completed_works.push(work);
    assert!(!offered_within(&mut state, 1_500, 0xD));
}

#[test]
fn revivals_are_not_revived_again() {
    let mut state = GameState::new("Ludwig");
    let mut work = faded_work("work_0000");
    work.is_revival = true;
    work.original_work_id = Some("work_1111".to_string());
    state.completed_works.push(work);
    assert!(!offered_within(&mut state, 1_500, 0xE));
}

#[test]
fn an_already_revived_work_is_spent() {
    let mut state = GameState::new("Ludwig");
    state.completed_works.push(faded_work("work_0000"));
    let mut revival = faded_work("work_0001");
    revival.is_revival = true;
    revival.original_work_id = Some("work_0000".to_string());
    state.completed_works.push(revival);
    assert!(!offered_within(&mut state, 1_500, 0xF));
}

#[test]
fn accepting_an_offer_round_trips_through_the_tick() {
    let mut state = GameState::new("Ludwig");
    state.completed_works.push(faded_work("work_0000"));
    assert!(offered_within(&mut state, 1_000, 0x10));

    state.stats.money = state.stats.money.max(60);
    state.stats.inspiration = 80;
    let mut rng = ChaCha20Rng::seed_from_u64(0x11);
    let record = accept_revival(&mut state, &mut rng).unwrap();
    assert!(record.is_revival);
    assert_eq!(record.original_work_id.as_deref(), Some("work_0000"));
    assert!(record.quality >= 72);
    assert!(record.popularity.unwrap() > 0.0);
    assert!(state.pending_revival.is_none());

    // The revived edition earns royalties again, and its source can never
    // be offered a second time.
    let mut rng = ChaCha20Rng::seed_from_u64(0x12);
    let outcome = advance_week(&mut state, &mut rng).unwrap();
    assert!(outcome.publisher_income > 0);
    assert!(!offered_within(&mut state, 1_500, 0x13));
}

#[test]
fn declining_leaves_the_door_open() {
    let mut state = GameState::new("Ludwig");
    state.completed_works.push(faded_work("work_0000"));
    assert!(offered_within(&mut state, 1_000, 0x14));
    decline_revival(&mut state).unwrap();
    assert!(state.pending_revival.is_none());
    // The work is still eligible; a later week may offer it again.
    assert!(offered_within(&mut state, 2_000, 0x15));
}

#[test]
fn acceptance_without_an_offer_is_rejected() {
    let mut state = GameState::new("Ludwig");
    let mut rng = ChaCha20Rng::seed_from_u64(0x16);
    assert_eq!(
        accept_revival(&mut state, &mut rng).unwrap_err(),
        GameError::NoPendingRevival
    );
}
