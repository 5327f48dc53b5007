use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Difficulty, SectionType};

/// Best medium score needed before the hard difficulty of a section opens.
pub const UNLOCK_SCORE: u32 = 90;

/// Returned when an attempt is requested for a difficulty that is still gated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{difficulty} is locked for {section}: score at least {required} on medium first")]
pub struct LockedDifficulty {
    pub section: SectionType,
    pub difficulty: Difficulty,
    pub required: u32,
}

/// Best score per (section, difficulty) pair for the current process.
///
/// Scores only ever move upward; every pair starts at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    best: HashMap<(SectionType, Difficulty), u32>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn best_score(&self, section: SectionType, difficulty: Difficulty) -> u32 {
        self.best.get(&(section, difficulty)).copied().unwrap_or(0)
    }

    /// Store `max(stored, score)` and return the resulting best score.
    pub fn record(&mut self, section: SectionType, difficulty: Difficulty, score: u32) -> u32 {
        let entry = self.best.entry((section, difficulty)).or_insert(0);
        *entry = (*entry).max(score);
        *entry
    }

    #[must_use]
    pub fn is_hard_unlocked(&self, section: SectionType) -> bool {
        self.best_score(section, Difficulty::Medium) >= UNLOCK_SCORE
    }

    #[must_use]
    pub fn is_unlocked(&self, section: SectionType, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Easy | Difficulty::Medium => true,
            Difficulty::Hard => self.is_hard_unlocked(section),
        }
    }

    /// # Errors
    ///
    /// Returns `LockedDifficulty` when `difficulty` is gated for `section`.
    pub fn ensure_unlocked(
        &self,
        section: SectionType,
        difficulty: Difficulty,
    ) -> Result<(), LockedDifficulty> {
        if self.is_unlocked(section, difficulty) {
            Ok(())
        } else {
            Err(LockedDifficulty {
                section,
                difficulty,
                required: UNLOCK_SCORE,
            })
        }
    }
}
