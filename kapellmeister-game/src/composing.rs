//! The composition lifecycle: starting a work, allocating a week of labor,
//! and declaring it finished.

use rand::Rng;

use crate::catalog::{CompositionForm, CompositionStyle, Instrumentation};
use crate::constants::{FINISH_WEEKS_FRACTION, MIN_WEEKLY_POINTS};
use crate::error::GameError;
use crate::numbers::floor_f64_to_i32;
use crate::state::{CompositionPhases, GameState, LogKind, WorkInProgress};
use crate::titles::generate_work_title;

/// How this week's effort splits across the four phases, in percent.
/// Must total 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAllocation {
    pub sketching: u32,
    pub orchestration: u32,
    pub rehearsal_prep: u32,
    pub revision: u32,
}

impl WeekAllocation {
    /// An even quarter to each phase.
    #[must_use]
    pub const fn even() -> Self {
        Self {
            sketching: 25,
            orchestration: 25,
            rehearsal_prep: 25,
            revision: 25,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.sketching + self.orchestration + self.rehearsal_prep + self.revision
    }
}

impl Default for WeekAllocation {
    fn default() -> Self {
        Self::even()
    }
}

/// Earliest week count at which a form may be declared finished.
#[must_use]
pub fn weeks_to_finish(form: CompositionForm) -> u32 {
    let weeks = f64::from(form.info().base_weeks) * FINISH_WEEKS_FRACTION;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        weeks.ceil() as u32
    }
}

/// Phase points produced by one week of work: inspiration supplies the
/// energy, productivity converts it, and even a dry week yields a trickle.
#[must_use]
pub fn weekly_points(inspiration: i32, productivity: i32) -> i32 {
    let energy = f64::from(inspiration) / 10.0;
    let rate = f64::from(productivity) / 10.0;
    floor_f64_to_i32(energy * rate).max(MIN_WEEKLY_POINTS)
}

/// Put a fresh manuscript on the desk. Rejected while another work is in
/// progress or the form's reputation gate is unmet.
pub fn start_composition<R: Rng>(
    state: &mut GameState,
    form: CompositionForm,
    style: CompositionStyle,
    instrumentation: Instrumentation,
    rng: &mut R,
) -> Result<(), GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }
    if state.work_in_progress.is_some() {
        return Err(GameError::AlreadyComposing);
    }
    let required = form.info().required_reputation;
    if state.stats.reputation < required {
        return Err(GameError::ReputationTooLow {
            required,
            current: state.stats.reputation,
        });
    }

    let title = generate_work_title(form, state.completed_works.len(), rng);
    state.work_in_progress = Some(WorkInProgress {
        form,
        style,
        instrumentation,
        phases: CompositionPhases::default(),
        weeks_spent: 0,
        title: title.clone(),
    });
    state.push_log(format!("Began work on \"{title}\"."), LogKind::Composition);
    Ok(())
}

/// Spend a week at the desk: distribute this week's points across the
/// phases per the allocation (floored per phase) and advance the week
/// counter. Returns the points earned.
pub fn work_week(state: &mut GameState, allocation: &WeekAllocation) -> Result<i32, GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }
    if allocation.total() != 100 {
        return Err(GameError::InvalidAllocation {
            total: allocation.total(),
        });
    }
    let points = weekly_points(state.stats.inspiration, state.skills.productivity);
    let work = state
        .work_in_progress
        .as_mut()
        .ok_or(GameError::NoWorkInProgress)?;

    let share = |pct: u32| floor_f64_to_i32(f64::from(points) * f64::from(pct) / 100.0);
    work.phases.sketching += share(allocation.sketching);
    work.phases.orchestration += share(allocation.orchestration);
    work.phases.rehearsal_prep += share(allocation.rehearsal_prep);
    work.phases.revision += share(allocation.revision);
    work.weeks_spent += 1;
    Ok(points)
}

/// Take the finished manuscript off the desk, ready for a premiere. The
/// work must have seen at least 60% of its form's base weeks.
pub fn finish_composition(state: &mut GameState) -> Result<WorkInProgress, GameError> {
    let Some(work) = state.work_in_progress.take() else {
        return Err(GameError::NoWorkInProgress);
    };
    let required = weeks_to_finish(work.form);
    if work.weeks_spent < required {
        state.work_in_progress = Some(work);
        return Err(GameError::CompositionUnfinished { required });
    }

    state.push_log(
        format!("Completed \"{}\". Ready for premiere.", work.title),
        LogKind::Composition,
    );
    Ok(work)
}
