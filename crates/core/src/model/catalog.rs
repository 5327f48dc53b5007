use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

//
// ─── SCHOOL LEVEL ─────────────────────────────────────────────────────────────
//

/// Education stage the candidate teaches at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    Primary,
    Middle,
    Secondary,
}

impl SchoolLevel {
    pub const ALL: [SchoolLevel; 3] = [Self::Primary, Self::Middle, Self::Secondary];

    /// Stable identifier used by form selectors.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Middle => "middle",
            Self::Secondary => "secondary",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary school",
            Self::Middle => "Middle school",
            Self::Secondary => "Secondary school",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── SUBJECT ──────────────────────────────────────────────────────────────────
//

/// Teaching subject. Only meaningful inside the didactics section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Arabic,
    French,
    English,
    Mathematics,
    NaturalSciences,
    Physics,
    HistoryGeography,
    IslamicEducation,
    CivicEducation,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Self::Arabic,
        Self::French,
        Self::English,
        Self::Mathematics,
        Self::NaturalSciences,
        Self::Physics,
        Self::HistoryGeography,
        Self::IslamicEducation,
        Self::CivicEducation,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::French => "french",
            Self::English => "english",
            Self::Mathematics => "mathematics",
            Self::NaturalSciences => "natural_sciences",
            Self::Physics => "physics",
            Self::HistoryGeography => "history_geography",
            Self::IslamicEducation => "islamic_education",
            Self::CivicEducation => "civic_education",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::French => "French",
            Self::English => "English",
            Self::Mathematics => "Mathematics",
            Self::NaturalSciences => "Natural sciences",
            Self::Physics => "Physics",
            Self::HistoryGeography => "History & geography",
            Self::IslamicEducation => "Islamic education",
            Self::CivicEducation => "Civic education",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.key() == key)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── SECTION ──────────────────────────────────────────────────────────────────
//

/// Top-level quiz category shown on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Didactics,
    Legislation,
    Psychology,
}

impl SectionType {
    /// Menu order.
    pub const ALL: [SectionType; 3] = [Self::Didactics, Self::Legislation, Self::Psychology];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Didactics => "didactics",
            Self::Legislation => "legislation",
            Self::Psychology => "psychology",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Didactics => "Didactics",
            Self::Legislation => "School legislation",
            Self::Psychology => "Educational psychology",
        }
    }

    /// Didactics questions are generated per subject, so a subject must be picked first.
    #[must_use]
    pub fn requires_subject(self) -> bool {
        matches!(self, Self::Didactics)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Attempt difficulty. Drives the per-question countdown and the hard-level gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Countdown length for every question of an attempt at this difficulty.
    #[must_use]
    pub fn seconds_per_question(self) -> u32 {
        match self {
            Self::Easy => 30,
            Self::Medium => 60,
            Self::Hard => 90,
        }
    }

    #[must_use]
    pub fn time_per_question(self) -> Duration {
        Duration::from_secs(u64::from(self.seconds_per_question()))
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// Whether a question is a written item or an oral/situational scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Written,
    OralScenario,
}

impl QuestionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Written => "Written",
            Self::OralScenario => "Oral / scenario",
        }
    }
}
