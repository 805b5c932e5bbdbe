//! Centralized balance and tuning constants for the simulation.
//!
//! These values define the deterministic math for the core loop. Keeping
//! them together means gameplay can only be adjusted through reviewed code
//! changes, not scattered literals.

// Composition scoring ------------------------------------------------------
/// Skill value above which additional points count at half rate.
pub(crate) const SKILL_DIMINISH_THRESHOLD: f64 = 15.0;
pub(crate) const SKILL_DIMINISH_RATE: f64 = 0.5;
/// Phase points per base week that count as "fully worked".
pub(crate) const PHASE_POINTS_PER_WEEK: f64 = 8.0;
pub(crate) const PHASE_EFFICIENCY_CAP: f64 = 1.2;
pub(crate) const SKILL_AVERAGE_WEIGHT: f64 = 0.4;
pub(crate) const PHASE_BALANCE_WEIGHT: f64 = 12.0;
pub(crate) const PHASE_EFFICIENCY_WEIGHT: f64 = 20.0;
pub(crate) const DIFFICULTY_PENALTY_STEP: f64 = 3.0;
pub(crate) const LUCK_MIN: i32 = -10;
pub(crate) const LUCK_MAX: i32 = 8;
/// Base quality alone can never reach masterpiece territory.
pub(crate) const BASE_QUALITY_MAX: i32 = 75;

// Premiere scoring ----------------------------------------------------------
pub(crate) const TREND_FORM_BONUS: f64 = 15.0;
pub(crate) const TREND_STYLE_BONUS: f64 = 10.0;
/// Taste intensity at which trend alignment is neither amplified nor muted.
pub(crate) const TREND_NEUTRAL_INTENSITY: f64 = 50.0;
pub(crate) const VENUE_IDEAL_BONUS: i32 = 20;
pub(crate) const VENUE_CRAMPED_PENALTY: i32 = -15;
pub(crate) const VENUE_CAVERNOUS_PENALTY: i32 = -10;
pub(crate) const VENUE_NEUTRAL_BONUS: i32 = 5;
pub(crate) const SKILL_BONUS_THRESHOLD: f64 = 15.0;
pub(crate) const SKILL_BONUS_RATE: f64 = 0.3;
pub(crate) const MUSICIAN_BONUS_RATE: f64 = 30.0;
pub(crate) const MUSICIAN_COMPLEXITY_RATE: f64 = 2.0;
/// The amateur tier's multiplier; complexity bonuses scale from here.
pub(crate) const MUSICIAN_FLOOR_MULTIPLIER: f64 = 0.7;
pub(crate) const PATRON_DEDICATION_QUALITY_BONUS: i32 = 5;
/// Raw factor totals above this are halved past the threshold.
pub(crate) const QUALITY_SOFT_CAP: f64 = 85.0;
pub(crate) const QUALITY_SOFT_CAP_RATE: f64 = 0.5;
pub(crate) const EARNINGS_CAPACITY_RATE: f64 = 0.8;
pub(crate) const EARNINGS_ADVERTISING_RATE: f64 = 2.0;
pub(crate) const REPUTATION_DIFFICULTY_RATE: f64 = 3.0;
pub(crate) const REPUTATION_PRESTIGE_RATE: f64 = 2.0;
pub(crate) const INITIAL_POPULARITY_QUALITY_RATE: f64 = 0.8;
pub(crate) const INITIAL_POPULARITY_PRESTIGE_RATE: f64 = 5.0;

// Composition lifecycle ------------------------------------------------------
/// Minimum phase points earned in any working week.
pub(crate) const MIN_WEEKLY_POINTS: i32 = 2;
/// Fraction of a form's base weeks after which a work may be declared done.
pub(crate) const FINISH_WEEKS_FRACTION: f64 = 0.6;

// Weekly tick ----------------------------------------------------------------
pub(crate) const HEALTH_REGEN_PER_WEEK: i32 = 5;
pub(crate) const INSPIRATION_DRIFT_UP: i32 = 2;
pub(crate) const INSPIRATION_DRIFT_DOWN: i32 = 1;
pub(crate) const INSPIRATION_DRIFT_UP_CHANCE: f64 = 0.5;
pub(crate) const TREND_SHIFT_CHANCE: f64 = 0.5;
pub(crate) const TREND_SHIFT_INTENSITY_STEP: i32 = 10;
pub(crate) const TREND_INTENSITY_CAP: i32 = 80;
/// Months per taste-drift evaluation window (quarterly).
pub(crate) const TREND_SHIFT_MONTH_INTERVAL: u32 = 3;

// Publisher income and popularity -------------------------------------------
pub(crate) const PUBLISHER_DIFFICULTY_RATE: f64 = 0.5;
pub(crate) const PUBLISHER_INCOME_SCALE: f64 = 2.0;
pub(crate) const POPULARITY_DECAY_BASE: f32 = 3.0;
pub(crate) const POPULARITY_DECAY_DIFFICULTY_RATE: f32 = 0.4;
pub(crate) const POPULARITY_DECAY_MIN_BASE: f32 = 0.5;
pub(crate) const POPULARITY_DECAY_QUALITY_RATE: f32 = 0.5;
pub(crate) const POPULARITY_DECAY_FLOOR: f32 = 0.3;
/// Popularity granted to legacy works that predate the royalty system.
pub(crate) const LEGACY_POPULARITY_BONUS: i32 = 20;

// Revivals -------------------------------------------------------------------
pub(crate) const REVIVAL_COST: i64 = 50;
pub(crate) const REVIVAL_INSPIRATION_COST: i32 = 20;
pub(crate) const REVIVAL_MIN_WEEKS: u32 = 52;
pub(crate) const REVIVAL_MIN_QUALITY: i32 = 50;
pub(crate) const REVIVAL_WEEKLY_CHANCE: f64 = 0.03;
pub(crate) const REVIVAL_LUCK_MAX: i32 = 9;
pub(crate) const REVIVAL_EARNINGS_RATE: f64 = 5.0;
pub(crate) const REVIVAL_POPULARITY_BONUS: i32 = 10;

// Patrons --------------------------------------------------------------------
pub(crate) const DEDICATION_RELATIONSHIP_GAIN: i32 = 15;
pub(crate) const RELATIONSHIP_MAX: i32 = 100;

// Premiere settlement --------------------------------------------------------
pub(crate) const PREMIERE_INSPIRATION_REWARD: i32 = 10;
pub(crate) const SKILL_GAIN_MELODY_QUALITY: i32 = 60;
pub(crate) const SKILL_GAIN_HARMONY_QUALITY: i32 = 50;
pub(crate) const SKILL_GAIN_FORM_QUALITY: i32 = 70;
pub(crate) const SKILL_GAIN_ORCHESTRAL: i32 = 2;

// Events ---------------------------------------------------------------------
/// Chance per week that anything newsworthy happens at all.
pub(crate) const EVENT_CHANCE: f64 = 0.20;

// Mortality ------------------------------------------------------------------
/// Year from which each week carries an old-age mortality roll.
pub(crate) const OLD_AGE_YEAR: i32 = 1870;
pub(crate) const OLD_AGE_WEEKLY_CHANCE: f64 = 0.005;

// Bookkeeping ----------------------------------------------------------------
pub(crate) const EVENT_LOG_CAP: usize = 100;
pub(crate) const SAVE_VERSION: u32 = 1;
