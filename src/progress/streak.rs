//! Consecutive-day streak tracking and companion leveling.

use chrono::{DateTime, Utc};

use super::UserProgress;

/// Streak days required per companion level.
pub const DAYS_PER_LEVEL: u32 = 7;

/// Companion level cap.
pub const MAX_COMPANION_LEVEL: u8 = 10;

/// Companion level for a streak: `min(10, streak / 7 + 1)`.
pub fn companion_level(current_streak: u32) -> u8 {
    (current_streak / DAYS_PER_LEVEL + 1).min(MAX_COMPANION_LEVEL as u32) as u8
}

impl UserProgress {
    /// Record a newly created entry into the streak.
    ///
    /// Day boundaries are UTC calendar dates, so a gap is measured in
    /// calendar days rather than elapsed 24-hour periods. A second entry on
    /// the same day leaves the counter unchanged.
    ///
    /// Must be called exactly once per entry-creation event, in
    /// increasing-timestamp order per user; the persistence layer is
    /// responsible for serializing concurrent calls for the same user.
    pub fn update_streak(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();

        match self.last_entry_date {
            None => self.current_streak = 1,
            Some(last) => {
                let diff_days = (today - last).num_days();
                if diff_days == 1 {
                    self.current_streak += 1;
                } else if diff_days > 1 {
                    self.current_streak = 1;
                }
                // diff_days <= 0: same-day re-entry, counter unchanged
            }
        }

        // Never move the date backwards if the caller violates ordering
        self.last_entry_date = Some(match self.last_entry_date {
            Some(last) if last > today => last,
            _ => today,
        });

        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.companion_level = companion_level(self.current_streak);
    }
}
