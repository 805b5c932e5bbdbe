//! Mutable game entities and the aggregate root.
//!
//! `GameState` is the single unit of persistence: the shell holds one,
//! passes it to the simulation functions, and snapshots it through the
//! `SaveStore` port. Late additions to the schema carry `#[serde(default)]`
//! so older save blobs keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::GameDate;
use crate::catalog::{
    CompositionForm, CompositionStyle, Instrumentation, SkillKind, TasteTrend, VenueId,
};
use crate::constants::{EVENT_LOG_CAP, SAVE_VERSION};
use crate::events::GameEvent;
use crate::patrons::{self, Patron};
use crate::upgrades::{self, Upgrade};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerStats {
    pub money: i64,
    pub reputation: i32,
    pub inspiration: i32,
    pub health: i32,
    pub max_health: i32,
    pub connections: i32,
}

impl Default for ComposerStats {
    fn default() -> Self {
        Self {
            money: 100,
            reputation: 0,
            inspiration: 50,
            health: 100,
            max_health: 100,
            connections: 5,
        }
    }
}

impl ComposerStats {
    /// Restore every stat to its legal range. Money, reputation and
    /// connections never go negative; inspiration lives in 0..=100;
    /// health in 0..=max_health.
    pub fn clamp(&mut self) {
        self.money = self.money.max(0);
        self.reputation = self.reputation.max(0);
        self.connections = self.connections.max(0);
        self.inspiration = self.inspiration.clamp(0, 100);
        self.max_health = self.max_health.max(1);
        self.health = self.health.clamp(0, self.max_health);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub melody: i32,
    pub harmony: i32,
    pub orchestration: i32,
    pub form: i32,
    pub productivity: i32,
    pub social: i32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            melody: 10,
            harmony: 10,
            orchestration: 5,
            form: 8,
            productivity: 10,
            social: 5,
        }
    }
}

impl Skills {
    pub fn clamp(&mut self) {
        for kind in SkillKind::ALL {
            let v = self.get(kind).clamp(0, 100);
            *self.get_mut(kind) = v;
        }
    }

    #[must_use]
    pub const fn get(&self, kind: SkillKind) -> i32 {
        match kind {
            SkillKind::Melody => self.melody,
            SkillKind::Harmony => self.harmony,
            SkillKind::Orchestration => self.orchestration,
            SkillKind::Form => self.form,
            SkillKind::Productivity => self.productivity,
            SkillKind::Social => self.social,
        }
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> &mut i32 {
        match kind {
            SkillKind::Melody => &mut self.melody,
            SkillKind::Harmony => &mut self.harmony,
            SkillKind::Orchestration => &mut self.orchestration,
            SkillKind::Form => &mut self.form,
            SkillKind::Productivity => &mut self.productivity,
            SkillKind::Social => &mut self.social,
        }
    }

    /// Raise one skill, clamping into 0..=100.
    pub fn raise(&mut self, kind: SkillKind, amount: i32) {
        let slot = self.get_mut(kind);
        *slot = (*slot + amount).clamp(0, 100);
    }

    /// Mean of the four craft skills that feed composition scoring.
    #[must_use]
    pub fn craft_average(&self) -> f64 {
        f64::from(self.melody + self.harmony + self.orchestration + self.form) / 4.0
    }
}

/// What the concert-going public currently favors: exactly two compatible
/// trends, plus how strongly fashion sways reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasteState {
    pub current: [TasteTrend; 2],
    pub intensity: i32,
}

impl Default for TasteState {
    fn default() -> Self {
        Self {
            current: [TasteTrend::Lyricism, TasteTrend::Cosmopolitan],
            intensity: 30,
        }
    }
}

impl TasteState {
    #[must_use]
    pub fn is_active(&self, trend: TasteTrend) -> bool {
        self.current.contains(&trend)
    }
}

/// Accumulated labor on each composition phase, in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompositionPhases {
    pub sketching: i32,
    pub orchestration: i32,
    pub rehearsal_prep: i32,
    pub revision: i32,
}

impl CompositionPhases {
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.sketching + self.orchestration + self.rehearsal_prep + self.revision
    }

    #[must_use]
    pub const fn as_array(&self) -> [i32; 4] {
        [
            self.sketching,
            self.orchestration,
            self.rehearsal_prep,
            self.revision,
        ]
    }
}

/// The one composition currently on the desk. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInProgress {
    pub form: CompositionForm,
    pub style: CompositionStyle,
    pub instrumentation: Instrumentation,
    pub phases: CompositionPhases,
    pub weeks_spent: u32,
    pub title: String,
}

/// Per-factor breakdown of a premiere score. Stored raw (pre soft cap);
/// the reported quality is the soft-capped, rounded, clamped total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreFactors {
    pub base_quality: i32,
    pub skill_bonus: i32,
    pub trend_alignment: i32,
    pub venue_match: i32,
    pub musician_quality: i32,
    pub patron_bonus: i32,
}

impl ScoreFactors {
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.base_quality
            + self.skill_bonus
            + self.trend_alignment
            + self.venue_match
            + self.musician_quality
            + self.patron_bonus
    }
}

/// A premiered work. The premiere record itself is immutable history; only
/// the publisher-lifecycle fields (popularity, weeks since premiere,
/// cumulative royalties) change on the weekly tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWork {
    pub id: String,
    pub title: String,
    pub form: CompositionForm,
    pub style: CompositionStyle,
    pub instrumentation: Instrumentation,
    pub quality: i32,
    pub premiere_date: GameDate,
    pub venue: VenueId,
    pub earnings: i64,
    pub reputation_gained: i32,
    pub review: String,
    #[serde(default)]
    pub dedicated_to: Option<String>,
    /// Absent for revivals, whose quality comes from the revival formula
    /// rather than the six-factor premiere pipeline.
    #[serde(default)]
    pub factors: Option<ScoreFactors>,
    /// Absent in saves that predate the publisher system; initialized on
    /// the next weekly tick.
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub weeks_since_premiere: u32,
    #[serde(default)]
    pub total_publisher_earnings: Option<i64>,
    #[serde(default)]
    pub is_revival: bool,
    #[serde(default)]
    pub original_work_id: Option<String>,
}

/// A publisher's one-time offer to restage an old, fully-faded work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevivalOpportunity {
    pub work_id: String,
    pub work_title: String,
    pub original_quality: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Event,
    Premiere,
    Composition,
    Upgrade,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub date: GameDate,
    pub text: String,
    pub kind: LogKind,
}

/// Terminal career states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ending {
    OldAge,
}

impl Ending {
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::OldAge => "died of old age",
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// The aggregate root. One value of this type is the entire game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub save_version: u32,
    pub composer_name: String,
    pub current_date: GameDate,
    pub stats: ComposerStats,
    pub skills: Skills,
    pub tastes: TasteState,
    #[serde(default)]
    pub work_in_progress: Option<WorkInProgress>,
    #[serde(default)]
    pub completed_works: Vec<CompletedWork>,
    pub patrons: Vec<Patron>,
    pub upgrades: Vec<Upgrade>,
    /// Newest-first, capped at 100 entries.
    #[serde(default)]
    pub event_log: Vec<LogEntry>,
    #[serde(default)]
    pub current_event: Option<GameEvent>,
    #[serde(default)]
    pub pending_revival: Option<RevivalOpportunity>,
    /// Append-only set of milestone ids, in unlock order.
    #[serde(default)]
    pub achieved_milestones: Vec<String>,
    /// Royalties credited by the most recent weekly tick; display value,
    /// not a running total.
    #[serde(default)]
    pub weekly_publisher_income: i64,
    #[serde(default)]
    pub ending: Option<Ending>,
    #[serde(default)]
    pub next_log_id: u64,
    #[serde(default)]
    pub next_work_id: u32,
}

impl GameState {
    /// A fresh career in Vienna, January 1820.
    #[must_use]
    pub fn new(composer_name: &str) -> Self {
        let mut state = Self {
            save_version: SAVE_VERSION,
            composer_name: composer_name.to_string(),
            current_date: GameDate::new(1820, 0, 1),
            stats: ComposerStats::default(),
            skills: Skills::default(),
            tastes: TasteState::default(),
            work_in_progress: None,
            completed_works: Vec::new(),
            patrons: patrons::starting_patrons(),
            upgrades: upgrades::starting_upgrades(),
            event_log: Vec::new(),
            current_event: None,
            pending_revival: None,
            achieved_milestones: Vec::new(),
            weekly_publisher_income: 0,
            ending: None,
            next_log_id: 0,
            next_work_id: 0,
        };
        state.push_log(
            format!("{composer_name} begins their journey as a composer in Vienna."),
            LogKind::System,
        );
        state
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Prepend a log entry, dropping the oldest past the cap.
    pub fn push_log(&mut self, text: impl Into<String>, kind: LogKind) {
        let entry = LogEntry {
            id: self.next_log_id,
            date: self.current_date,
            text: text.into(),
            kind,
        };
        self.next_log_id += 1;
        self.event_log.insert(0, entry);
        self.event_log.truncate(EVENT_LOG_CAP);
    }

    #[must_use]
    pub fn find_work(&self, work_id: &str) -> Option<&CompletedWork> {
        self.completed_works.iter().find(|w| w.id == work_id)
    }

    /// Claim the next work id, formatted like an archive shelf mark.
    pub(crate) fn claim_work_id(&mut self) -> String {
        let id = format!("work_{:04}", self.next_work_id);
        self.next_work_id += 1;
        id
    }
}
