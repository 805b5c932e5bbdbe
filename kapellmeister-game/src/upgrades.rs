//! The upgrade catalogue: one-way purchases that improve the composer's
//! circumstances.
//!
//! Effects are a closed sum type so a new effect kind is a compile-time
//! decision, not a silently ignored record.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillKind;
use crate::error::GameError;
use crate::state::{GameState, LogKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeCategory {
    Living,
    Instrument,
    Staff,
    Connections,
}

/// Stats an upgrade can permanently raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatBoostTarget {
    MaxHealth,
    Inspiration,
    Connections,
}

/// Income channels a multiplier upgrade scales at settlement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierChannel {
    Earnings,
    Reputation,
    Inspiration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UpgradeEffect {
    /// Immediate, permanent stat increase on purchase.
    StatBoost { target: StatBoostTarget, value: i32 },
    /// Immediate, permanent skill increase on purchase.
    SkillBoost { skill: SkillKind, value: i32 },
    /// Persistent scaling applied wherever the channel settles.
    Multiplier { channel: MultiplierChannel, factor: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: UpgradeCategory,
    pub cost: i64,
    pub effects: Vec<UpgradeEffect>,
    pub required_reputation: i32,
    /// One-way flag; never reverts.
    #[serde(default)]
    pub purchased: bool,
}

fn upgrade(
    id: &str,
    name: &str,
    description: &str,
    category: UpgradeCategory,
    cost: i64,
    required_reputation: i32,
    effects: Vec<UpgradeEffect>,
) -> Upgrade {
    Upgrade {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        cost,
        effects,
        required_reputation,
        purchased: false,
    }
}

#[must_use]
pub fn starting_upgrades() -> Vec<Upgrade> {
    use MultiplierChannel as Ch;
    use StatBoostTarget as St;
    use UpgradeCategory as Cat;
    use UpgradeEffect::{Multiplier, SkillBoost, StatBoost};

    vec![
        upgrade(
            "better_apartment",
            "Better Apartment",
            "Move to a quieter neighborhood with more space for your piano.",
            Cat::Living,
            150,
            0,
            vec![
                StatBoost {
                    target: St::MaxHealth,
                    value: 20,
                },
                StatBoost {
                    target: St::Inspiration,
                    value: 10,
                },
            ],
        ),
        upgrade(
            "quality_piano",
            "Broadwood Piano",
            "A fine English pianoforte with superior tone.",
            Cat::Instrument,
            300,
            10,
            vec![
                SkillBoost {
                    skill: SkillKind::Melody,
                    value: 5,
                },
                SkillBoost {
                    skill: SkillKind::Harmony,
                    value: 3,
                },
            ],
        ),
        upgrade(
            "copyist",
            "Hire Copyist",
            "A skilled copyist to prepare performance parts.",
            Cat::Staff,
            200,
            15,
            vec![SkillBoost {
                skill: SkillKind::Productivity,
                value: 10,
            }],
        ),
        upgrade(
            "salon_invitation",
            "Salon Invitation",
            "Gain entry to the Countess von Thun's musical salon.",
            Cat::Connections,
            100,
            5,
            vec![
                StatBoost {
                    target: St::Connections,
                    value: 10,
                },
                SkillBoost {
                    skill: SkillKind::Social,
                    value: 5,
                },
            ],
        ),
        upgrade(
            "grand_study",
            "Grand Study",
            "A proper composer's study with excellent acoustics.",
            Cat::Living,
            500,
            40,
            vec![
                StatBoost {
                    target: St::MaxHealth,
                    value: 30,
                },
                Multiplier {
                    channel: Ch::Inspiration,
                    factor: 1.2,
                },
            ],
        ),
        upgrade(
            "erard_piano",
            "Érard Grand Piano",
            "The finest Parisian instrument, favored by Liszt himself.",
            Cat::Instrument,
            800,
            50,
            vec![
                SkillBoost {
                    skill: SkillKind::Melody,
                    value: 10,
                },
                SkillBoost {
                    skill: SkillKind::Orchestration,
                    value: 5,
                },
            ],
        ),
        upgrade(
            "assistant",
            "Musical Assistant",
            "A talented student to help with arrangements.",
            Cat::Staff,
            400,
            35,
            vec![
                SkillBoost {
                    skill: SkillKind::Productivity,
                    value: 15,
                },
                SkillBoost {
                    skill: SkillKind::Orchestration,
                    value: 5,
                },
            ],
        ),
        upgrade(
            "publisher_contract",
            "Publisher Contract",
            "An exclusive arrangement with Peters Publishing.",
            Cat::Connections,
            350,
            25,
            vec![
                Multiplier {
                    channel: Ch::Earnings,
                    factor: 1.3,
                },
                StatBoost {
                    target: St::Connections,
                    value: 15,
                },
            ],
        ),
        upgrade(
            "country_retreat",
            "Country Retreat",
            "A peaceful cottage for summer composition.",
            Cat::Living,
            1000,
            70,
            vec![
                StatBoost {
                    target: St::MaxHealth,
                    value: 50,
                },
                Multiplier {
                    channel: Ch::Inspiration,
                    factor: 1.5,
                },
            ],
        ),
        upgrade(
            "court_position",
            "Court Position",
            "Secure a position at the Imperial Court.",
            Cat::Connections,
            600,
            60,
            vec![
                StatBoost {
                    target: St::Connections,
                    value: 25,
                },
                Multiplier {
                    channel: Ch::Reputation,
                    factor: 1.2,
                },
            ],
        ),
    ]
}

/// Product of every purchased multiplier on the given channel.
#[must_use]
pub fn channel_multiplier(upgrades: &[Upgrade], channel: MultiplierChannel) -> f64 {
    let mut result = 1.0;
    for upgrade in upgrades.iter().filter(|u| u.purchased) {
        for effect in &upgrade.effects {
            if let UpgradeEffect::Multiplier { channel: ch, factor } = effect {
                if *ch == channel {
                    result *= factor;
                }
            }
        }
    }
    result
}

/// Buy an upgrade: checks funds and reputation, debits the cost, applies
/// boost effects immediately, and flips the one-way purchased flag.
pub fn purchase_upgrade(state: &mut GameState, upgrade_id: &str) -> Result<(), GameError> {
    let idx = state
        .upgrades
        .iter()
        .position(|u| u.id == upgrade_id)
        .ok_or_else(|| GameError::UnknownUpgrade(upgrade_id.to_string()))?;

    let (cost, required_reputation, already) = {
        let u = &state.upgrades[idx];
        (u.cost, u.required_reputation, u.purchased)
    };
    if already {
        return Err(GameError::UpgradeAlreadyOwned(upgrade_id.to_string()));
    }
    if state.stats.reputation < required_reputation {
        return Err(GameError::ReputationTooLow {
            required: required_reputation,
            current: state.stats.reputation,
        });
    }
    if state.stats.money < cost {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: state.stats.money,
        });
    }

    state.stats.money -= cost;
    let effects = state.upgrades[idx].effects.clone();
    for effect in &effects {
        match effect {
            UpgradeEffect::StatBoost { target, value } => match target {
                StatBoostTarget::MaxHealth => state.stats.max_health += value,
                StatBoostTarget::Inspiration => state.stats.inspiration += value,
                StatBoostTarget::Connections => state.stats.connections += value,
            },
            UpgradeEffect::SkillBoost { skill, value } => state.skills.raise(*skill, *value),
            // Multipliers are persistent; they apply at settlement time.
            UpgradeEffect::Multiplier { .. } => {}
        }
    }
    state.stats.clamp();
    state.skills.clamp();
    state.upgrades[idx].purchased = true;

    let name = state.upgrades[idx].name.clone();
    log::debug!("upgrade purchased: {upgrade_id}");
    state.push_log(format!("Purchased: {name}"), LogKind::Upgrade);
    Ok(())
}
