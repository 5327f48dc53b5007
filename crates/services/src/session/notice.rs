use quiz_core::model::{Difficulty, SectionType, Subject, UNLOCK_SCORE};

/// User-facing message shown inline on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionNotice {
    Locked { section: SectionType },
    MissingSubject,
    /// Retryable: the same selection can be started again.
    GenerationFailed {
        section: SectionType,
        difficulty: Difficulty,
        subject: Option<Subject>,
    },
}

impl SessionNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Locked { section } => format!(
                "Hard is locked for {section}. Score at least {UNLOCK_SCORE} on medium to unlock it."
            ),
            Self::MissingSubject => "Choose a subject before starting a didactics quiz.".into(),
            Self::GenerationFailed { .. } => {
                "Something went wrong while preparing the questions. Please try again.".into()
            }
        }
    }

    /// Selection to start again, for notices that offer a retry.
    #[must_use]
    pub fn retry(&self) -> Option<(SectionType, Difficulty, Option<Subject>)> {
        match *self {
            Self::GenerationFailed {
                section,
                difficulty,
                subject,
            } => Some((section, difficulty, subject)),
            Self::Locked { .. } | Self::MissingSubject => None,
        }
    }
}
