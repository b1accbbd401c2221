//! Companion mood derivation from recently logged moods.

use crate::journal::{CompanionMood, Mood};

use super::UserProgress;

/// Default look-back window, in days, for the recent-mood sample.
pub const DEFAULT_MOOD_WINDOW_DAYS: i64 = 7;

/// Derive the companion's displayed mood from recently logged entry moods.
///
/// An empty sample yields neutral. Otherwise the most frequent mood wins;
/// on a tie, the mood that first appeared earliest in the sequence wins,
/// so the result is independent of any map iteration order. The winning
/// entry mood is then collapsed onto the six-value companion palette.
///
/// Descriptive only: never feeds back into streaks or companion level.
pub fn derive_companion_mood(recent_moods: &[Mood]) -> CompanionMood {
    if recent_moods.is_empty() {
        return CompanionMood::Neutral;
    }

    // Counts keyed in first-appearance order
    let mut counts: Vec<(Mood, u32)> = Vec::new();
    for &mood in recent_moods {
        match counts.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((mood, 1)),
        }
    }

    let mut best = counts[0];
    for &(mood, n) in &counts[1..] {
        // Strictly greater, so the earliest-seen mood keeps ties
        if n > best.1 {
            best = (mood, n);
        }
    }

    best.0.as_companion_mood()
}

impl UserProgress {
    /// Refresh the companion's mood from a recent-mood sample.
    pub fn update_companion_mood(&mut self, recent_moods: &[Mood]) {
        self.companion_mood = derive_companion_mood(recent_moods);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_empty_sample_is_neutral() {
        assert_eq!(derive_companion_mood(&[]), CompanionMood::Neutral);
    }

    #[test]
    fn test_mode_wins() {
        assert_eq!(
            derive_companion_mood(&[Mood::Happy, Mood::Happy, Mood::Sad]),
            CompanionMood::Happy
        );
        assert_eq!(
            derive_companion_mood(&[Mood::Sad, Mood::Calm, Mood::Calm, Mood::Sad, Mood::Calm]),
            CompanionMood::Calm
        );
    }

    #[test]
    fn test_tie_breaks_to_earliest_first_appearance() {
        assert_eq!(
            derive_companion_mood(&[Mood::Sad, Mood::Happy]),
            CompanionMood::Sad
        );
        assert_eq!(
            derive_companion_mood(&[Mood::Excited, Mood::Calm, Mood::Calm, Mood::Excited]),
            CompanionMood::Excited
        );
    }

    #[test]
    fn test_result_collapses_to_companion_palette() {
        assert_eq!(
            derive_companion_mood(&[Mood::Grateful, Mood::Grateful, Mood::Sad]),
            CompanionMood::Happy
        );
        assert_eq!(
            derive_companion_mood(&[Mood::Angry]),
            CompanionMood::Anxious
        );
    }

    #[test]
    fn test_update_companion_mood_only_touches_mood() {
        let mut progress = UserProgress::new(Uuid::new_v4());
        progress.current_streak = 4;
        progress.longest_streak = 9;
        progress.companion_level = 1;

        progress.update_companion_mood(&[Mood::Excited]);

        assert_eq!(progress.companion_mood, CompanionMood::Excited);
        assert_eq!(progress.current_streak, 4);
        assert_eq!(progress.longest_streak, 9);
        assert_eq!(progress.companion_level, 1);
    }
}
