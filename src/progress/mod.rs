//! User progression state: streaks, companion level, companion mood.

pub mod mood;
pub mod streak;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::journal::CompanionMood;

pub use mood::{derive_companion_mood, DEFAULT_MOOD_WINDOW_DAYS};
pub use streak::{companion_level, DAYS_PER_LEVEL, MAX_COMPANION_LEVEL};

/// A user's derived progression state.
///
/// Mutated only by [`UserProgress::update_streak`] and
/// [`UserProgress::update_companion_mood`]. Invariants after any update:
/// `longest_streak >= current_streak` and
/// `companion_level == min(10, current_streak / 7 + 1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    /// User this state belongs to
    pub user_id: Uuid,
    /// Consecutive calendar days with at least one entry
    pub current_streak: u32,
    /// Best streak ever reached
    pub longest_streak: u32,
    /// UTC calendar date of the most recent entry
    pub last_entry_date: Option<NaiveDate>,
    /// Companion level, 1 through 10
    pub companion_level: u8,
    /// Companion mood derived from recently logged moods
    pub companion_mood: CompanionMood,
}

impl UserProgress {
    /// Fresh progression state for a user with no entries.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            current_streak: 0,
            longest_streak: 0,
            last_entry_date: None,
            companion_level: 1,
            companion_mood: CompanionMood::Neutral,
        }
    }
}
