//! Precondition errors for player actions.
//!
//! The simulation never panics on bad input; actions that violate a
//! precondition are rejected with a typed error the shell can present.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough money: need {needed} thalers, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("not enough inspiration: need {needed}, have {available}")]
    InsufficientInspiration { needed: i32, available: i32 },

    #[error("reputation too low: requires {required}, have {current}")]
    ReputationTooLow { required: i32, current: i32 },

    #[error("a composition is already in progress")]
    AlreadyComposing,

    #[error("no composition is in progress")]
    NoWorkInProgress,

    #[error("the work needs at least {required} weeks of labor before it can be finished")]
    CompositionUnfinished { required: u32 },

    #[error("week allocation must total 100 percent, got {total}")]
    InvalidAllocation { total: u32 },

    #[error("unknown upgrade: {0}")]
    UnknownUpgrade(String),

    #[error("upgrade already purchased: {0}")]
    UpgradeAlreadyOwned(String),

    #[error("unknown patron: {0}")]
    UnknownPatron(String),

    #[error("no revival opportunity is pending")]
    NoPendingRevival,

    #[error("the revived work no longer exists in the catalogue")]
    RevivalSourceMissing,

    #[error("the career is over")]
    GameOver,
}
