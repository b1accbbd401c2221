//! Aggregate statistics over a user's entry history.

use std::collections::{HashMap, HashSet};

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::journal::{JournalEntry, Mood};

/// Derived summary of a user's entire entry history.
///
/// Recomputed on demand from the entries (or by an equivalent SQL
/// aggregation in the store); never persisted independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total number of entries
    pub total_entries: u64,
    /// Total words across all entries
    pub total_words: u64,
    /// Distinct moods ever logged
    pub unique_moods: HashSet<Mood>,
    /// Entry count per mood
    pub mood_distribution: HashMap<Mood, u64>,
    /// Whether any entry was created in each UTC hour of day
    pub has_journaled_at: [bool; 24],
    /// Total AI suggestions across all entries
    pub total_ai_suggestions: u64,
}

impl AggregateStats {
    /// Compute statistics with a linear scan over the entries.
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let mut stats = Self::default();

        for entry in entries {
            stats.total_entries += 1;
            stats.total_words += u64::from(entry.word_count);
            stats.unique_moods.insert(entry.mood);
            *stats.mood_distribution.entry(entry.mood).or_insert(0) += 1;
            stats.has_journaled_at[entry.created_at.hour() as usize] = true;
            stats.total_ai_suggestions += entry.ai_suggestions.len() as u64;
        }

        stats
    }

    /// Entry count for a mood (0 if never logged).
    pub fn mood_count(&self, mood: Mood) -> u64 {
        self.mood_distribution.get(&mood).copied().unwrap_or(0)
    }
}
