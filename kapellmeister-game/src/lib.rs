//! Kapellmeister Game Engine
//!
//! Platform-agnostic core logic for Kapellmeister, a composer-career
//! simulation set in nineteenth-century Vienna. This crate provides the
//! full simulation - composition, premieres, patrons, upgrades, narrative
//! events, publisher royalties, revivals, and the weekly clock - without
//! any UI or platform dependencies.
//!
//! A shell owns a [`GameState`] and an RNG, calls the simulation functions
//! in response to player actions, and persists snapshots through the
//! [`SaveStore`] port. Every stochastic input is drawn from the RNG the
//! caller passes in, so the whole simulation is deterministic under test.

pub mod calendar;
pub mod catalog;
pub mod composing;
pub mod constants;
pub mod error;
pub mod events;
pub mod milestones;
pub mod numbers;
pub mod patrons;
pub mod premiere;
pub mod publishing;
pub mod review;
pub mod scoring;
pub mod state;
pub mod titles;
pub mod upgrades;
pub mod weekly;

// Re-export commonly used types
pub use calendar::GameDate;
pub use catalog::{
    CompositionForm, CompositionStyle, Instrumentation, MusicianTier, SkillKind, TasteTrend,
    VenueId,
};
pub use composing::{
    finish_composition, start_composition, weeks_to_finish, work_week, WeekAllocation,
};
pub use error::GameError;
pub use events::{
    apply_event_choice, default_events, get_random_event, EventChoice, EventData, EventEffect,
    GameEvent,
};
pub use milestones::check_milestones;
pub use patrons::Patron;
pub use premiere::{premiere_cost, schedule_premiere};
pub use publishing::{accept_revival, decline_revival, publisher_week_tick, PublisherWeek};
pub use review::{pick_review, ReviewTier};
pub use scoring::{
    base_quality_with_luck, calculate_base_quality, calculate_musician_bonus,
    calculate_premiere_success, calculate_trend_alignment, calculate_venue_match, phase_balance,
    soft_cap, PremiereOutcome, PremiereSetup,
};
pub use state::{
    CompletedWork, ComposerStats, CompositionPhases, Ending, GameState, LogEntry, LogKind,
    RevivalOpportunity, ScoreFactors, Skills, TasteState, WorkInProgress,
};
pub use titles::generate_work_title;
pub use upgrades::{purchase_upgrade, MultiplierChannel, Upgrade, UpgradeEffect};
pub use weekly::{advance_week, WeekOutcome};

/// Trait for abstracting save/load of the whole game blob.
/// Platform-specific implementations should provide this.
pub trait SaveStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a full snapshot of the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, state: &GameState) -> Result<(), Self::Error>;

    /// Load the saved game, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the blob cannot be
    /// decoded.
    fn load(&self) -> Result<Option<GameState>, Self::Error>;

    /// Whether a saved game exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be inspected.
    fn exists(&self) -> Result<bool, Self::Error>;

    /// Delete the saved game.
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Shell-facing engine: creates careers and moves snapshots through the
/// storage port. Storage faults on the read path surface as "no saved
/// game" rather than as errors the player could do nothing about.
pub struct GameEngine<S>
where
    S: SaveStore,
{
    storage: S,
}

impl<S> GameEngine<S>
where
    S: SaveStore,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Begin a fresh career in Vienna, 1820.
    #[must_use]
    pub fn new_game(&self, composer_name: &str) -> GameState {
        GameState::new(composer_name)
    }

    /// Persist a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    pub fn save(&self, state: &GameState) -> Result<(), anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        self.storage.save(state).map_err(Into::into)
    }

    /// Load the saved career, or `None` when there is nothing to resume.
    /// Read faults are logged and reported as `None`.
    #[must_use]
    pub fn load(&self) -> Option<GameState> {
        match self.storage.load() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("failed to load saved game: {e}");
                None
            }
        }
    }

    /// Whether a resumable career exists. Faults count as "no".
    #[must_use]
    pub fn has_save(&self) -> bool {
        self.storage.exists().unwrap_or(false)
    }

    /// Forget the saved career.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the delete.
    pub fn clear_save(&self) -> Result<(), anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        self.storage.clear().map_err(Into::into)
    }
}
