//! Random narrative events: selection and effect application.
//!
//! Effects are a closed sum type with exhaustive matching; adding a new
//! effect kind forces every application site to handle it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::SkillKind;
use crate::constants::EVENT_CHANCE;
use crate::state::{GameState, LogKind};

/// A single signed adjustment applied when a choice is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEffect {
    Money { amount: i64 },
    Reputation { amount: i32 },
    Inspiration { amount: i32 },
    Health { amount: i32 },
    Connections { amount: i32 },
    Skill { skill: SkillKind, amount: i32 },
}

/// One of the 2-3 responses a player may pick for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub text: String,
    #[serde(default)]
    pub effects: Vec<EventEffect>,
    #[serde(default)]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventRequirements {
    #[serde(default)]
    pub min_reputation: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<EventChoice>,
    #[serde(default)]
    pub requirements: Option<EventRequirements>,
}

impl GameEvent {
    #[must_use]
    pub fn is_available(&self, reputation: i32) -> bool {
        match &self.requirements {
            Some(req) => req.min_reputation.is_none_or(|min| reputation >= min),
            None => true,
        }
    }
}

/// Container for the event pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventData {
    pub events: Vec<GameEvent>,
}

impl EventData {
    /// Load a custom event pool from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid events.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn from_events(events: Vec<GameEvent>) -> Self {
        Self { events }
    }
}

/// Roll for this week's narrative event: 20% that anything happens, then a
/// uniform pick among events the composer's reputation qualifies for.
#[must_use]
pub fn get_random_event<R: Rng>(
    data: &EventData,
    reputation: i32,
    rng: &mut R,
) -> Option<GameEvent> {
    if !rng.gen_bool(EVENT_CHANCE) {
        return None;
    }

    let eligible: Vec<&GameEvent> = data
        .events
        .iter()
        .filter(|event| event.is_available(reputation))
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..eligible.len());
    Some(eligible[idx].clone())
}

/// Apply a chosen response: sum every effect into the named stat or skill,
/// clamp, clear the pending event, and log the decision.
pub fn apply_event_choice(state: &mut GameState, choice: &EventChoice) {
    for effect in &choice.effects {
        match *effect {
            EventEffect::Money { amount } => {
                state.stats.money = (state.stats.money + amount).max(0);
            }
            EventEffect::Reputation { amount } => {
                state.stats.reputation = (state.stats.reputation + amount).max(0);
            }
            EventEffect::Inspiration { amount } => {
                state.stats.inspiration = (state.stats.inspiration + amount).clamp(0, 100);
            }
            EventEffect::Health { amount } => {
                state.stats.health =
                    (state.stats.health + amount).clamp(0, state.stats.max_health);
            }
            EventEffect::Connections { amount } => {
                state.stats.connections = (state.stats.connections + amount).max(0);
            }
            EventEffect::Skill { skill, amount } => {
                state.skills.raise(skill, amount);
            }
        }
    }

    let title = state
        .current_event
        .take()
        .map_or_else(|| "An event".to_string(), |event| event.title);
    state.push_log(format!("{title}: Chose \"{}\"", choice.text), LogKind::Event);
}

fn choice(text: &str, tooltip: &str, effects: Vec<EventEffect>) -> EventChoice {
    EventChoice {
        text: text.to_string(),
        effects,
        tooltip: Some(tooltip.to_string()),
    }
}

fn event(id: &str, title: &str, description: &str, choices: Vec<EventChoice>) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        choices,
        requirements: None,
    }
}

/// The built-in pool of narrative events.
#[must_use]
pub fn default_events() -> EventData {
    use EventEffect::{Connections, Health, Inspiration, Money, Reputation, Skill};

    let mut events = vec![
        event(
            "patron_request",
            "A Noble Request",
            "The Countess von Brunswick has heard of your talents and requests a piano \
             sonata for her upcoming soirée. She offers generous payment, though her \
             musical taste is decidedly old-fashioned.",
            vec![
                choice(
                    "Accept graciously",
                    "Reliable income but creatively unfulfilling",
                    vec![
                        Money { amount: 80 },
                        Reputation { amount: 5 },
                        Inspiration { amount: -10 },
                    ],
                ),
                choice(
                    "Politely decline",
                    "Maintain your artistic integrity",
                    vec![Inspiration { amount: 10 }, Reputation { amount: -3 }],
                ),
            ],
        ),
        event(
            "illness",
            "A Fever Takes Hold",
            "You awake with a pounding headache and chills. The doctor recommends rest, \
             but you have compositions to finish.",
            vec![
                choice(
                    "Rest as prescribed",
                    "Your health is your wealth",
                    vec![Health { amount: 20 }, Inspiration { amount: -15 }],
                ),
                choice(
                    "Work through it",
                    "Risky but shows dedication",
                    vec![
                        Health { amount: -25 },
                        Skill {
                            skill: SkillKind::Productivity,
                            amount: 2,
                        },
                    ],
                ),
                choice(
                    "Seek expensive treatment",
                    "The best care money can buy",
                    vec![Money { amount: -40 }, Health { amount: 30 }],
                ),
            ],
        ),
        event(
            "rival_premiere",
            "A Rival's Triumph",
            "Your contemporary, Herr Hummel, has premiered a new piano concerto to great \
             acclaim. The papers speak of nothing else. You feel the pressure to respond.",
            vec![
                choice(
                    "Attend and congratulate him",
                    "Learn from your rivals",
                    vec![
                        Reputation { amount: 3 },
                        Connections { amount: 5 },
                        Inspiration { amount: 15 },
                    ],
                ),
                choice(
                    "Redouble your efforts",
                    "Competition drives excellence",
                    vec![
                        Skill {
                            skill: SkillKind::Melody,
                            amount: 3,
                        },
                        Health { amount: -10 },
                    ],
                ),
                choice(
                    "Dismiss it publicly",
                    "A dangerous move",
                    vec![Reputation { amount: -8 }, Inspiration { amount: 5 }],
                ),
            ],
        ),
        event(
            "publisher_offer",
            "A Publisher's Proposal",
            "Artaria & Co. offers to publish your recent works. They propose either a \
             one-time payment or ongoing royalties.",
            vec![
                choice(
                    "Accept one-time payment (150 Thalers)",
                    "Guaranteed money now",
                    vec![Money { amount: 150 }],
                ),
                choice(
                    "Negotiate royalties",
                    "Better long-term prospects",
                    vec![Reputation { amount: 8 }, Connections { amount: 10 }],
                ),
                choice(
                    "Refuse - self-publish instead",
                    "Expensive but maintains control",
                    vec![
                        Money { amount: -50 },
                        Reputation { amount: 5 },
                        Inspiration { amount: 10 },
                    ],
                ),
            ],
        ),
        event(
            "war_news",
            "War in Europe",
            "Napoleon's armies march again. Concert halls close and patrons flee the \
             city. Times are uncertain.",
            vec![
                choice(
                    "Compose patriotic works",
                    "Popular but artistically limiting",
                    vec![Reputation { amount: 12 }, Inspiration { amount: -20 }],
                ),
                choice(
                    "Continue as before",
                    "Art transcends politics",
                    vec![Money { amount: -30 }, Inspiration { amount: 10 }],
                ),
                choice(
                    "Leave the city temporarily",
                    "Safety first",
                    vec![
                        Money { amount: -80 },
                        Health { amount: 15 },
                        Connections { amount: -10 },
                    ],
                ),
            ],
        ),
        event(
            "instrument_trouble",
            "The Piano Falls Silent",
            "Your piano has developed a serious fault - several hammers are broken and \
             the tuning is impossible to hold.",
            vec![
                choice(
                    "Repair it (40 Thalers)",
                    "A necessary expense",
                    vec![Money { amount: -40 }],
                ),
                choice(
                    "Borrow a friend's instrument",
                    "A temporary solution",
                    vec![Connections { amount: -5 }, Inspiration { amount: -5 }],
                ),
                choice(
                    "Compose in silence",
                    "Beethoven did it...",
                    vec![
                        Skill {
                            skill: SkillKind::Form,
                            amount: 4,
                        },
                        Inspiration { amount: -10 },
                    ],
                ),
            ],
        ),
        event(
            "virtuoso_visit",
            "A Famous Visitor",
            "The celebrated pianist Franz Liszt is in town and expresses interest in \
             performing your works. He is brilliant but notorious for taking liberties.",
            vec![
                choice(
                    "Welcome his interpretations",
                    "Fame at the cost of control",
                    vec![Reputation { amount: 20 }, Inspiration { amount: -10 }],
                ),
                choice(
                    "Insist on faithful rendition",
                    "Your art, your way",
                    vec![
                        Reputation { amount: 8 },
                        Skill {
                            skill: SkillKind::Orchestration,
                            amount: 3,
                        },
                    ],
                ),
                choice(
                    "Collaborate on a new work",
                    "Learn from a master",
                    vec![
                        Inspiration { amount: 25 },
                        Skill {
                            skill: SkillKind::Melody,
                            amount: 5,
                        },
                        Health { amount: -15 },
                    ],
                ),
            ],
        ),
        event(
            "economic_crisis",
            "Financial Panic",
            "The banking houses are failing and currency is devalued. Your savings are \
             worth less than yesterday.",
            vec![
                choice(
                    "Accept the loss",
                    "Weather the storm",
                    vec![Money { amount: -50 }],
                ),
                choice(
                    "Seek immediate commissions",
                    "Survival mode",
                    vec![
                        Money { amount: 30 },
                        Inspiration { amount: -15 },
                        Reputation { amount: -5 },
                    ],
                ),
            ],
        ),
        event(
            "musical_debate",
            "A War of Words",
            "The newspapers are ablaze with debate: should music be \"absolute\" or serve \
             dramatic ends? Critics demand your opinion.",
            vec![
                choice(
                    "Champion absolute music",
                    "Side with the formalists",
                    vec![
                        Reputation { amount: 5 },
                        Skill {
                            skill: SkillKind::Form,
                            amount: 3,
                        },
                    ],
                ),
                choice(
                    "Advocate programmatic music",
                    "Music should tell stories",
                    vec![
                        Inspiration { amount: 15 },
                        Skill {
                            skill: SkillKind::Orchestration,
                            amount: 2,
                        },
                    ],
                ),
                choice(
                    "Stay above the fray",
                    "Let the work speak for itself",
                    vec![Connections { amount: 5 }, Health { amount: 5 }],
                ),
            ],
        ),
        event(
            "student_request",
            "A Promising Pupil",
            "A young musician of exceptional talent begs to study with you. Teaching \
             would consume time but could prove rewarding.",
            vec![
                choice(
                    "Accept the student",
                    "Teaching deepens understanding",
                    vec![
                        Money { amount: 20 },
                        Skill {
                            skill: SkillKind::Harmony,
                            amount: 4,
                        },
                        Inspiration { amount: -10 },
                    ],
                ),
                choice(
                    "Decline - focus on composing",
                    "Guard your creative energy",
                    vec![Inspiration { amount: 10 }],
                ),
            ],
        ),
        event(
            "copyist_error",
            "A Disastrous Mistake",
            "Your copyist has made terrible errors in the orchestral parts. The premiere \
             is in three days.",
            vec![
                choice(
                    "Correct them yourself",
                    "Only you can fix this",
                    vec![
                        Health { amount: -20 },
                        Skill {
                            skill: SkillKind::Productivity,
                            amount: 3,
                        },
                    ],
                ),
                choice(
                    "Postpone the premiere",
                    "Better safe than sorry",
                    vec![Money { amount: -50 }, Reputation { amount: -5 }],
                ),
                choice(
                    "Proceed and hope for the best",
                    "A gamble",
                    vec![Inspiration { amount: -25 }],
                ),
            ],
        ),
    ];

    let mut royal = event(
        "royal_invitation",
        "An Imperial Summons",
        "The Emperor himself requests your presence at a private concert. This could \
         change everything - or be an elaborate trap.",
        vec![
            choice(
                "Attend with your finest work",
                "A once-in-a-lifetime opportunity",
                vec![
                    Reputation { amount: 25 },
                    Connections { amount: 20 },
                    Money { amount: -60 },
                ],
            ),
            choice(
                "Send regrets (claim illness)",
                "Dangerous but principled",
                vec![Reputation { amount: -10 }, Inspiration { amount: 15 }],
            ),
        ],
    );
    royal.requirements = Some(EventRequirements {
        min_reputation: Some(30),
    });
    events.push(royal);

    EventData::from_events(events)
}
