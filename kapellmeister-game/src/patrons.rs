//! The patron roster and dedication mechanics.

use serde::{Deserialize, Serialize};

use crate::catalog::{CompositionForm, CompositionStyle};
use crate::constants::{DEDICATION_RELATIONSHIP_GAIN, RELATIONSHIP_MAX};

/// A noble backer. The roster is fixed at career start; only the
/// relationship value moves, and only upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub id: String,
    pub name: String,
    pub title: String,
    pub preferred_forms: Vec<CompositionForm>,
    pub preferred_style: CompositionStyle,
    pub generosity: i32,
    /// 0..=100, raised by dedicating works.
    #[serde(default)]
    pub relationship: i32,
}

#[must_use]
pub fn starting_patrons() -> Vec<Patron> {
    vec![
        Patron {
            id: "archduke_rudolf".to_string(),
            name: "Archduke Rudolf".to_string(),
            title: "Imperial Archduke".to_string(),
            preferred_forms: vec![
                CompositionForm::Symphony,
                CompositionForm::Concerto,
                CompositionForm::Mass,
            ],
            preferred_style: CompositionStyle::Classical,
            generosity: 100,
            relationship: 0,
        },
        Patron {
            id: "countess_erdody".to_string(),
            name: "Countess Erdődy".to_string(),
            title: "Hungarian Countess".to_string(),
            preferred_forms: vec![
                CompositionForm::StringQuartet,
                CompositionForm::PianoSonata,
            ],
            preferred_style: CompositionStyle::EarlyRomantic,
            generosity: 60,
            relationship: 0,
        },
        Patron {
            id: "baron_van_swieten".to_string(),
            name: "Baron van Swieten".to_string(),
            title: "Imperial Librarian".to_string(),
            preferred_forms: vec![CompositionForm::Mass, CompositionForm::Symphony],
            preferred_style: CompositionStyle::Classical,
            generosity: 80,
            relationship: 0,
        },
    ]
}

/// Record a dedication: the patron's relationship rises by a fixed step,
/// saturating at the cap. Returns the patron so callers can read the name.
pub fn record_dedication<'a>(patrons: &'a mut [Patron], patron_id: &str) -> Option<&'a Patron> {
    let patron = patrons.iter_mut().find(|p| p.id == patron_id)?;
    patron.relationship =
        (patron.relationship + DEDICATION_RELATIONSHIP_GAIN).min(RELATIONSHIP_MAX);
    Some(patron)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedication_raises_relationship_by_fifteen() {
        let mut patrons = starting_patrons();
        let patron = record_dedication(&mut patrons, "countess_erdody").unwrap();
        assert_eq!(patron.relationship, 15);
    }

    #[test]
    fn dedication_saturates_at_one_hundred() {
        let mut patrons = starting_patrons();
        patrons[0].relationship = 92;
        let patron = record_dedication(&mut patrons, "archduke_rudolf").unwrap();
        assert_eq!(patron.relationship, 100);
    }

    #[test]
    fn unknown_patron_is_ignored() {
        let mut patrons = starting_patrons();
        assert!(record_dedication(&mut patrons, "prince_nobody").is_none());
    }
}
