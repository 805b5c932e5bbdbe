//! The composition and premiere scoring engine.
//!
//! Pure arithmetic over the work, the composer's skills, public taste, and
//! the premiere arrangements. Every stochastic term comes from the caller's
//! RNG; `base_quality_with_luck` exposes the deterministic seam underneath
//! the luck roll.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Instrumentation, MusicianTier, VenueId};
use crate::constants::{
    BASE_QUALITY_MAX, DIFFICULTY_PENALTY_STEP, EARNINGS_ADVERTISING_RATE, EARNINGS_CAPACITY_RATE,
    INITIAL_POPULARITY_PRESTIGE_RATE, INITIAL_POPULARITY_QUALITY_RATE, LUCK_MAX, LUCK_MIN,
    MUSICIAN_BONUS_RATE, MUSICIAN_COMPLEXITY_RATE, MUSICIAN_FLOOR_MULTIPLIER,
    PATRON_DEDICATION_QUALITY_BONUS, PHASE_BALANCE_WEIGHT, PHASE_EFFICIENCY_CAP,
    PHASE_EFFICIENCY_WEIGHT, PHASE_POINTS_PER_WEEK, QUALITY_SOFT_CAP, QUALITY_SOFT_CAP_RATE,
    REPUTATION_DIFFICULTY_RATE, REPUTATION_PRESTIGE_RATE, SKILL_AVERAGE_WEIGHT,
    SKILL_BONUS_RATE, SKILL_BONUS_THRESHOLD, SKILL_DIMINISH_RATE, SKILL_DIMINISH_THRESHOLD,
    TREND_FORM_BONUS, TREND_NEUTRAL_INTENSITY, TREND_STYLE_BONUS, VENUE_CAVERNOUS_PENALTY,
    VENUE_CRAMPED_PENALTY, VENUE_IDEAL_BONUS, VENUE_NEUTRAL_BONUS,
};
use crate::numbers::{round_f64_to_i32, round_f64_to_i64};
use crate::review::pick_review;
use crate::state::{CompositionPhases, ScoreFactors, Skills, TasteState, WorkInProgress};

/// The arrangements a premiere is booked under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiereSetup {
    pub venue: VenueId,
    pub musicians: MusicianTier,
    /// Patron id, if the work carries a dedication.
    #[serde(default)]
    pub dedicated_to: Option<String>,
    #[serde(default)]
    pub advertising_spent: i64,
}

/// Everything a premiere resolves to, before settlement against the state.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiereOutcome {
    pub quality: i32,
    pub factors: ScoreFactors,
    pub earnings: i64,
    pub reputation_gained: i32,
    pub review: String,
    pub initial_popularity: i32,
}

/// How evenly labor was spread across the four phases: 1.0 for a perfect
/// quarter each, falling as the distribution skews, 0.0 for an empty work.
#[must_use]
pub fn phase_balance(phases: &CompositionPhases) -> f64 {
    let values = phases.as_array();
    let total: i32 = values.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = f64::from(total);
    let avg_deviation: f64 = values
        .iter()
        .map(|&v| (f64::from(v) / total - 0.25).abs())
        .sum::<f64>()
        / 4.0;
    1.0 - avg_deviation * 4.0
}

/// Skill points past the threshold count at half weight.
fn diminished(skill: i32) -> f64 {
    let v = f64::from(skill);
    if v <= SKILL_DIMINISH_THRESHOLD {
        v
    } else {
        SKILL_DIMINISH_THRESHOLD + (v - SKILL_DIMINISH_THRESHOLD) * SKILL_DIMINISH_RATE
    }
}

/// Intrinsic quality of the finished score with an explicit luck term, an
/// integer in `LUCK_MIN..=LUCK_MAX`. Result is clamped to 0..=75: craft
/// alone never reaches masterpiece territory.
#[must_use]
pub fn base_quality_with_luck(work: &WorkInProgress, skills: &Skills, luck: i32) -> i32 {
    let form = work.form.info();
    let style = work.style.info();

    let melody = diminished(skills.melody) * style.melody;
    let harmony = diminished(skills.harmony) * style.harmony;
    let orchestration = diminished(skills.orchestration) * style.orchestration;
    let form_craft = diminished(skills.form);
    let skill_average = (melody + harmony + orchestration + form_craft) / 4.0;

    let total_points = f64::from(work.phases.total());
    let phase_efficiency = (total_points
        / (f64::from(form.base_weeks) * PHASE_POINTS_PER_WEEK))
        .min(PHASE_EFFICIENCY_CAP);

    let mut quality = skill_average * SKILL_AVERAGE_WEIGHT
        + phase_balance(&work.phases) * PHASE_BALANCE_WEIGHT
        + phase_efficiency * PHASE_EFFICIENCY_WEIGHT;
    quality -= f64::from(form.difficulty - 1) * DIFFICULTY_PENALTY_STEP;
    quality += f64::from(luck);

    round_f64_to_i32(quality).clamp(0, BASE_QUALITY_MAX)
}

/// Intrinsic quality with the luck term drawn from the caller's RNG.
#[must_use]
pub fn calculate_base_quality<R: Rng>(work: &WorkInProgress, skills: &Skills, rng: &mut R) -> i32 {
    let luck = rng.gen_range(LUCK_MIN..=LUCK_MAX);
    base_quality_with_luck(work, skills, luck)
}

/// How well the work rides current fashion: +15 per active trend favoring
/// its form, +10 per active trend favoring its style, scaled by intensity
/// (50 is neutral). Never negative.
#[must_use]
pub fn calculate_trend_alignment(work: &WorkInProgress, tastes: &TasteState) -> i32 {
    let mut alignment = 0.0;
    for trend in tastes.current {
        if trend.favored_forms().contains(&work.form) {
            alignment += TREND_FORM_BONUS;
        }
        if trend.favored_styles().contains(&work.style) {
            alignment += TREND_STYLE_BONUS;
        }
    }
    alignment *= f64::from(tastes.intensity) / TREND_NEUTRAL_INTENSITY;
    round_f64_to_i32(alignment)
}

/// Fit between work and hall: ideal programming, a large ensemble crammed
/// into a parlor, a trifle lost in a cavern, or a plain neutral booking.
#[must_use]
pub fn calculate_venue_match(work: &WorkInProgress, venue: VenueId) -> i32 {
    let info = venue.info();
    if info.best_for.contains(&work.form) {
        return VENUE_IDEAL_BONUS;
    }
    let complexity = work.instrumentation.info().complexity;
    if info.capacity < 100 && complexity > 3.0 {
        return VENUE_CRAMPED_PENALTY;
    }
    if info.capacity > 1000 && complexity < 2.0 {
        return VENUE_CAVERNOUS_PENALTY;
    }
    VENUE_NEUTRAL_BONUS
}

/// Better players help more the bigger the ensemble; amateurs drag the
/// evening down regardless.
#[must_use]
pub fn calculate_musician_bonus(tier: MusicianTier, instrumentation: Instrumentation) -> i32 {
    let multiplier = tier.info().multiplier;
    let complexity = instrumentation.info().complexity;
    let base_bonus = (multiplier - 1.0) * MUSICIAN_BONUS_RATE;
    let complexity_bonus =
        (complexity - 1.0) * MUSICIAN_COMPLEXITY_RATE * (multiplier - MUSICIAN_FLOOR_MULTIPLIER);
    round_f64_to_i32(base_bonus + complexity_bonus)
}

/// Totals above the cap are halved past it, making scores beyond ~92 rare.
#[must_use]
pub fn soft_cap(raw_total: f64) -> f64 {
    if raw_total > QUALITY_SOFT_CAP {
        QUALITY_SOFT_CAP + (raw_total - QUALITY_SOFT_CAP) * QUALITY_SOFT_CAP_RATE
    } else {
        raw_total
    }
}

/// Resolve a premiere: compose the six scoring factors, soft-cap the total,
/// and derive earnings, reputation, opening popularity, and a review.
///
/// The returned factor breakdown is stored raw; the reported quality is
/// `soft_cap(Σ factors)` rounded and clamped to 0..=100.
#[must_use]
pub fn calculate_premiere_success<R: Rng>(
    work: &WorkInProgress,
    skills: &Skills,
    tastes: &TasteState,
    setup: &PremiereSetup,
    rng: &mut R,
) -> PremiereOutcome {
    let base_quality = calculate_base_quality(work, skills, rng);
    let trend_alignment = calculate_trend_alignment(work, tastes);
    let venue_match = calculate_venue_match(work, setup.venue);
    let musician_quality = calculate_musician_bonus(setup.musicians, work.instrumentation);

    let avg_skill = skills.craft_average();
    let skill_bonus =
        round_f64_to_i32((avg_skill - SKILL_BONUS_THRESHOLD) * SKILL_BONUS_RATE).max(0);

    let patron_bonus = if setup.dedicated_to.is_some() {
        PATRON_DEDICATION_QUALITY_BONUS
    } else {
        0
    };

    let factors = ScoreFactors {
        base_quality,
        skill_bonus,
        trend_alignment,
        venue_match,
        musician_quality,
        patron_bonus,
    };

    let total_quality = soft_cap(f64::from(factors.total()));
    let quality = round_f64_to_i32(total_quality).clamp(0, 100);

    let venue = setup.venue.info();
    let form = work.form.info();
    let quality_share = f64::from(quality) / 100.0;

    let earnings = round_f64_to_i64(
        f64::from(venue.capacity) * quality_share * EARNINGS_CAPACITY_RATE
            + crate::numbers::i64_to_f64(setup.advertising_spent) * EARNINGS_ADVERTISING_RATE,
    );
    let reputation_gained = round_f64_to_i32(
        f64::from(form.difficulty) * quality_share * REPUTATION_DIFFICULTY_RATE
            + f64::from(venue.prestige) * REPUTATION_PRESTIGE_RATE,
    );
    let initial_popularity = round_f64_to_i32(
        f64::from(quality) * INITIAL_POPULARITY_QUALITY_RATE
            + f64::from(venue.prestige) * INITIAL_POPULARITY_PRESTIGE_RATE,
    )
    .min(100);

    let review = pick_review(quality, work.form, work.style, rng);

    PremiereOutcome {
        quality,
        factors,
        earnings,
        reputation_gained,
        review,
        initial_popularity,
    }
}
