//! Career milestones: one-way achievement flags unlocked by state
//! predicates and surfaced to the player once.

use crate::catalog::CompositionForm;
use crate::state::{GameState, LogKind};

struct Milestone {
    id: &'static str,
    name: &'static str,
    reached: fn(&GameState) -> bool,
}

/// Evaluated in order; the order is part of the presentation.
const MILESTONES: [Milestone; 8] = [
    Milestone {
        id: "first_work",
        name: "First Performance",
        reached: |s| !s.completed_works.is_empty(),
    },
    Milestone {
        id: "reputation_25",
        name: "Rising Talent",
        reached: |s| s.stats.reputation >= 25,
    },
    Milestone {
        id: "reputation_50",
        name: "Established Composer",
        reached: |s| s.stats.reputation >= 50,
    },
    Milestone {
        id: "reputation_100",
        name: "Minor Famous Composer",
        reached: |s| s.stats.reputation >= 100,
    },
    Milestone {
        id: "five_works",
        name: "Prolific Artist",
        reached: |s| s.completed_works.len() >= 5,
    },
    Milestone {
        id: "symphony_premiere",
        name: "Symphonist",
        reached: |s| {
            s.completed_works
                .iter()
                .any(|w| w.form == CompositionForm::Symphony)
        },
    },
    Milestone {
        id: "wealthy",
        name: "Comfortable Living",
        reached: |s| s.stats.money >= 1000,
    },
    Milestone {
        id: "patron_favor",
        name: "Patron's Favorite",
        reached: |s| s.patrons.iter().any(|p| p.relationship >= 50),
    },
];

/// Evaluate every milestone against the current state, recording and
/// logging the newly reached ones. Returns their display names for the
/// shell to announce. Idempotent: a second call on unchanged state
/// reports nothing.
pub fn check_milestones(state: &mut GameState) -> Vec<&'static str> {
    let mut unlocked = Vec::new();
    for milestone in &MILESTONES {
        if state.achieved_milestones.iter().any(|id| id == milestone.id) {
            continue;
        }
        if (milestone.reached)(state) {
            state.achieved_milestones.push(milestone.id.to_string());
            state.push_log(
                format!("Achievement unlocked: {}!", milestone.name),
                LogKind::System,
            );
            log::debug!("milestone reached: {}", milestone.id);
            unlocked.push(milestone.name);
        }
    }
    unlocked
}
