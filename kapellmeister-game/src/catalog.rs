//! Static reference tables: forms, styles, instrumentations, venues,
//! musician tiers, and public taste trends.
//!
//! These are read-only configuration data consumed throughout the engine;
//! they are compiled in rather than loaded from assets so balance changes
//! go through code review.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Composition forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionForm {
    PianoSonata,
    StringQuartet,
    Lied,
    Symphony,
    Concerto,
    Opera,
    Mass,
}

/// Fixed metadata for a composition form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInfo {
    pub name: &'static str,
    /// 1 (trivial) through 6 (monumental).
    pub difficulty: i32,
    /// Weeks a diligent composer needs for a full draft.
    pub base_weeks: u32,
    pub required_reputation: i32,
    pub description: &'static str,
    pub best_instrumentation: &'static [Instrumentation],
}

impl CompositionForm {
    pub const ALL: [Self; 7] = [
        Self::PianoSonata,
        Self::StringQuartet,
        Self::Lied,
        Self::Symphony,
        Self::Concerto,
        Self::Opera,
        Self::Mass,
    ];

    #[must_use]
    pub const fn info(self) -> &'static FormInfo {
        match self {
            Self::PianoSonata => &FormInfo {
                name: "Piano Sonata",
                difficulty: 2,
                base_weeks: 3,
                required_reputation: 0,
                description: "An intimate work showcasing pianistic mastery",
                best_instrumentation: &[Instrumentation::SoloPiano],
            },
            Self::StringQuartet => &FormInfo {
                name: "String Quartet",
                difficulty: 3,
                base_weeks: 4,
                required_reputation: 10,
                description: "The purest test of compositional craft",
                best_instrumentation: &[Instrumentation::ChamberEnsemble],
            },
            Self::Lied => &FormInfo {
                name: "Lied",
                difficulty: 1,
                base_weeks: 2,
                required_reputation: 0,
                description: "A German art song for voice and piano",
                best_instrumentation: &[Instrumentation::VoiceAndPiano],
            },
            Self::Symphony => &FormInfo {
                name: "Symphony",
                difficulty: 5,
                base_weeks: 8,
                required_reputation: 50,
                description: "The grandest orchestral statement",
                best_instrumentation: &[Instrumentation::FullOrchestra],
            },
            Self::Concerto => &FormInfo {
                name: "Concerto",
                difficulty: 4,
                base_weeks: 6,
                required_reputation: 30,
                description: "A dialogue between soloist and orchestra",
                best_instrumentation: &[
                    Instrumentation::FullOrchestra,
                    Instrumentation::SmallOrchestra,
                ],
            },
            Self::Opera => &FormInfo {
                name: "Opera",
                difficulty: 6,
                base_weeks: 12,
                required_reputation: 80,
                description: "The ultimate dramatic musical work",
                best_instrumentation: &[
                    Instrumentation::ChoirAndOrchestra,
                    Instrumentation::FullOrchestra,
                ],
            },
            Self::Mass => &FormInfo {
                name: "Mass",
                difficulty: 4,
                base_weeks: 6,
                required_reputation: 40,
                description: "Sacred music for chorus and orchestra",
                best_instrumentation: &[Instrumentation::ChoirAndOrchestra],
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PianoSonata => "piano_sonata",
            Self::StringQuartet => "string_quartet",
            Self::Lied => "lied",
            Self::Symphony => "symphony",
            Self::Concerto => "concerto",
            Self::Opera => "opera",
            Self::Mass => "mass",
        }
    }
}

impl fmt::Display for CompositionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for CompositionForm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "piano_sonata" => Ok(Self::PianoSonata),
            "string_quartet" => Ok(Self::StringQuartet),
            "lied" => Ok(Self::Lied),
            "symphony" => Ok(Self::Symphony),
            "concerto" => Ok(Self::Concerto),
            "opera" => Ok(Self::Opera),
            "mass" => Ok(Self::Mass),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionStyle {
    Classical,
    EarlyRomantic,
    LateRomantic,
}

/// Per-style scaling of the craft skills that matter most in that idiom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub melody: f64,
    pub harmony: f64,
    pub orchestration: f64,
}

impl CompositionStyle {
    pub const ALL: [Self; 3] = [Self::Classical, Self::EarlyRomantic, Self::LateRomantic];

    #[must_use]
    pub const fn info(self) -> &'static StyleInfo {
        match self {
            Self::Classical => &StyleInfo {
                name: "Classical",
                description: "Formal elegance in the manner of Haydn and Mozart",
                melody: 1.0,
                harmony: 0.9,
                orchestration: 0.8,
            },
            Self::EarlyRomantic => &StyleInfo {
                name: "Early Romantic",
                description: "Emotional expressiveness with structural balance",
                melody: 1.1,
                harmony: 1.0,
                orchestration: 1.0,
            },
            Self::LateRomantic => &StyleInfo {
                name: "Late Romantic",
                description: "Grand gestures and rich orchestral colors",
                melody: 1.0,
                harmony: 1.2,
                orchestration: 1.3,
            },
        }
    }
}

impl fmt::Display for CompositionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

// ---------------------------------------------------------------------------
// Instrumentations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrumentation {
    SoloPiano,
    VoiceAndPiano,
    ChamberEnsemble,
    SmallOrchestra,
    FullOrchestra,
    ChoirAndOrchestra,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentationInfo {
    pub name: &'static str,
    /// One-off hire cost at premiere time, in thalers.
    pub cost: i64,
    /// 1.0 (a single pianist) through 5.0 (choir plus orchestra).
    pub complexity: f64,
}

impl Instrumentation {
    pub const ALL: [Self; 6] = [
        Self::SoloPiano,
        Self::VoiceAndPiano,
        Self::ChamberEnsemble,
        Self::SmallOrchestra,
        Self::FullOrchestra,
        Self::ChoirAndOrchestra,
    ];

    #[must_use]
    pub const fn info(self) -> &'static InstrumentationInfo {
        match self {
            Self::SoloPiano => &InstrumentationInfo {
                name: "Solo Piano",
                cost: 0,
                complexity: 1.0,
            },
            Self::VoiceAndPiano => &InstrumentationInfo {
                name: "Voice and Piano",
                cost: 15,
                complexity: 1.5,
            },
            Self::ChamberEnsemble => &InstrumentationInfo {
                name: "Chamber Ensemble",
                cost: 30,
                complexity: 2.0,
            },
            Self::SmallOrchestra => &InstrumentationInfo {
                name: "Small Orchestra",
                cost: 80,
                complexity: 3.0,
            },
            Self::FullOrchestra => &InstrumentationInfo {
                name: "Full Orchestra",
                cost: 150,
                complexity: 4.0,
            },
            Self::ChoirAndOrchestra => &InstrumentationInfo {
                name: "Choir and Orchestra",
                cost: 200,
                complexity: 5.0,
            },
        }
    }

    /// Whether this ensemble exercises the orchestration skill.
    #[must_use]
    pub const fn is_orchestral(self) -> bool {
        matches!(
            self,
            Self::SmallOrchestra | Self::FullOrchestra | Self::ChoirAndOrchestra
        )
    }
}

impl fmt::Display for Instrumentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

// ---------------------------------------------------------------------------
// Venues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueId {
    Salon,
    Church,
    SmallHall,
    ConcertHall,
    OperaHouse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueInfo {
    pub name: &'static str,
    pub capacity: i32,
    /// 1 through 5; feeds reputation gains.
    pub prestige: i32,
    /// Booking cost in thalers.
    pub cost: i64,
    pub required_reputation: i32,
    pub best_for: &'static [CompositionForm],
}

impl VenueId {
    pub const ALL: [Self; 5] = [
        Self::Salon,
        Self::Church,
        Self::SmallHall,
        Self::ConcertHall,
        Self::OperaHouse,
    ];

    #[must_use]
    pub const fn info(self) -> &'static VenueInfo {
        match self {
            Self::Salon => &VenueInfo {
                name: "Private Salon",
                capacity: 30,
                prestige: 1,
                cost: 10,
                required_reputation: 0,
                best_for: &[
                    CompositionForm::PianoSonata,
                    CompositionForm::Lied,
                    CompositionForm::StringQuartet,
                ],
            },
            Self::Church => &VenueInfo {
                name: "St. Michael's Church",
                capacity: 200,
                prestige: 2,
                cost: 25,
                required_reputation: 15,
                best_for: &[CompositionForm::Mass],
            },
            Self::SmallHall => &VenueInfo {
                name: "Municipal Concert Hall",
                capacity: 400,
                prestige: 3,
                cost: 75,
                required_reputation: 30,
                best_for: &[
                    CompositionForm::StringQuartet,
                    CompositionForm::Concerto,
                    CompositionForm::PianoSonata,
                ],
            },
            Self::ConcertHall => &VenueInfo {
                name: "Grand Concert Hall",
                capacity: 1200,
                prestige: 4,
                cost: 200,
                required_reputation: 60,
                best_for: &[CompositionForm::Symphony, CompositionForm::Concerto],
            },
            Self::OperaHouse => &VenueInfo {
                name: "Royal Opera House",
                capacity: 2000,
                prestige: 5,
                cost: 500,
                required_reputation: 100,
                best_for: &[CompositionForm::Opera, CompositionForm::Symphony],
            },
        }
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

// ---------------------------------------------------------------------------
// Musicians
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MusicianTier {
    Amateur,
    #[default]
    Competent,
    Professional,
    Virtuoso,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicianInfo {
    /// Engagement fee in thalers.
    pub cost: i64,
    /// Performance quality multiplier; 1.0 is a competent reading.
    pub multiplier: f64,
}

impl MusicianTier {
    pub const ALL: [Self; 4] = [
        Self::Amateur,
        Self::Competent,
        Self::Professional,
        Self::Virtuoso,
    ];

    #[must_use]
    pub const fn info(self) -> &'static MusicianInfo {
        match self {
            Self::Amateur => &MusicianInfo {
                cost: 20,
                multiplier: 0.7,
            },
            Self::Competent => &MusicianInfo {
                cost: 50,
                multiplier: 1.0,
            },
            Self::Professional => &MusicianInfo {
                cost: 120,
                multiplier: 1.2,
            },
            Self::Virtuoso => &MusicianInfo {
                cost: 300,
                multiplier: 1.5,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Taste trends
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TasteTrend {
    Virtuosity,
    Lyricism,
    Sacred,
    Secular,
    Nationalist,
    Cosmopolitan,
}

impl TasteTrend {
    pub const ALL: [Self; 6] = [
        Self::Virtuosity,
        Self::Lyricism,
        Self::Sacred,
        Self::Secular,
        Self::Nationalist,
        Self::Cosmopolitan,
    ];

    /// The trend the public cannot favor at the same time as this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Virtuosity => Self::Lyricism,
            Self::Lyricism => Self::Virtuosity,
            Self::Sacred => Self::Secular,
            Self::Secular => Self::Sacred,
            Self::Nationalist => Self::Cosmopolitan,
            Self::Cosmopolitan => Self::Nationalist,
        }
    }

    /// Forms the public flocks to while this trend is in fashion.
    #[must_use]
    pub const fn favored_forms(self) -> &'static [CompositionForm] {
        match self {
            Self::Virtuosity => &[CompositionForm::Concerto, CompositionForm::PianoSonata],
            Self::Lyricism => &[CompositionForm::Lied, CompositionForm::StringQuartet],
            Self::Sacred => &[CompositionForm::Mass],
            Self::Secular => &[
                CompositionForm::Opera,
                CompositionForm::Symphony,
                CompositionForm::Concerto,
            ],
            Self::Nationalist => &[CompositionForm::Symphony, CompositionForm::Opera],
            Self::Cosmopolitan => &[
                CompositionForm::StringQuartet,
                CompositionForm::PianoSonata,
                CompositionForm::Concerto,
            ],
        }
    }

    #[must_use]
    pub const fn favored_styles(self) -> &'static [CompositionStyle] {
        match self {
            Self::Virtuosity => &[CompositionStyle::LateRomantic],
            Self::Lyricism => &[CompositionStyle::EarlyRomantic],
            Self::Sacred => &[CompositionStyle::Classical],
            Self::Secular => &[
                CompositionStyle::LateRomantic,
                CompositionStyle::EarlyRomantic,
            ],
            Self::Nationalist => &[CompositionStyle::LateRomantic],
            Self::Cosmopolitan => &[
                CompositionStyle::Classical,
                CompositionStyle::EarlyRomantic,
            ],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Virtuosity => "virtuosity",
            Self::Lyricism => "lyricism",
            Self::Sacred => "sacred",
            Self::Secular => "secular",
            Self::Nationalist => "nationalist",
            Self::Cosmopolitan => "cosmopolitan",
        }
    }
}

impl fmt::Display for TasteTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Melody,
    Harmony,
    Orchestration,
    Form,
    Productivity,
    Social,
}

impl SkillKind {
    pub const ALL: [Self; 6] = [
        Self::Melody,
        Self::Harmony,
        Self::Orchestration,
        Self::Form,
        Self::Productivity,
        Self::Social,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Melody => "melody",
            Self::Harmony => "harmony",
            Self::Orchestration => "orchestration",
            Self::Form => "form",
            Self::Productivity => "productivity",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
