//! Mood and writing analytics over a window of entries.
//!
//! Pure aggregation helpers; day bucketing uses UTC calendar dates.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::{JournalEntry, Mood};

/// Count of one mood within a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    /// The mood
    pub mood: Mood,
    /// Number of entries with that mood
    pub count: u64,
}

/// Moods logged on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Per-mood counts for the day, in first-logged order
    pub moods: Vec<MoodCount>,
}

/// Writing volume on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingFrequencyPoint {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Entries written that day
    pub entries: u64,
    /// Words written that day
    pub total_words: u64,
}

/// Combined analytics for a day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodAnalytics {
    /// Per-day mood counts, oldest day first
    pub mood_trends: Vec<MoodTrendPoint>,
    /// Windowed mood distribution, most frequent first
    pub mood_distribution: Vec<MoodCount>,
    /// Per-day writing volume, oldest day first
    pub writing_frequency: Vec<WritingFrequencyPoint>,
    /// Window length in days
    pub days: i64,
}

/// Build the full analytics bundle for the last `days` days.
pub fn mood_analytics(entries: &[JournalEntry], now: DateTime<Utc>, days: i64) -> MoodAnalytics {
    MoodAnalytics {
        mood_trends: mood_trends(entries, now, days),
        mood_distribution: mood_distribution(entries, now, days),
        writing_frequency: writing_frequency(entries, now, days),
        days,
    }
}

/// Per-day mood counts for the last `days` days, oldest day first.
pub fn mood_trends(entries: &[JournalEntry], now: DateTime<Utc>, days: i64) -> Vec<MoodTrendPoint> {
    let mut points: Vec<MoodTrendPoint> = Vec::new();

    for entry in windowed(entries, now, days) {
        let date = entry.created_at.date_naive();
        let idx = match points.iter().position(|p| p.date == date) {
            Some(idx) => idx,
            None => {
                points.push(MoodTrendPoint {
                    date,
                    moods: Vec::new(),
                });
                points.len() - 1
            }
        };
        let point = &mut points[idx];

        match point.moods.iter_mut().find(|m| m.mood == entry.mood) {
            Some(m) => m.count += 1,
            None => point.moods.push(MoodCount {
                mood: entry.mood,
                count: 1,
            }),
        }
    }

    points.sort_by_key(|p| p.date);
    points
}

/// Mood distribution for the last `days` days, most frequent mood first;
/// ties keep first-logged order.
pub fn mood_distribution(
    entries: &[JournalEntry],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Vec::new();

    for entry in windowed(entries, now, days) {
        match counts.iter_mut().find(|m| m.mood == entry.mood) {
            Some(m) => m.count += 1,
            None => counts.push(MoodCount {
                mood: entry.mood,
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Per-day entry and word counts for the last `days` days, oldest day first.
pub fn writing_frequency(
    entries: &[JournalEntry],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<WritingFrequencyPoint> {
    let mut points: Vec<WritingFrequencyPoint> = Vec::new();

    for entry in windowed(entries, now, days) {
        let date = entry.created_at.date_naive();
        match points.iter_mut().find(|p| p.date == date) {
            Some(point) => {
                point.entries += 1;
                point.total_words += u64::from(entry.word_count);
            }
            None => points.push(WritingFrequencyPoint {
                date,
                entries: 1,
                total_words: u64::from(entry.word_count),
            }),
        }
    }

    points.sort_by_key(|p| p.date);
    points
}

/// Mood tags of entries in the last `days` days, oldest entry first.
///
/// This is the sample the companion-mood engine consumes.
pub fn recent_moods(entries: &[JournalEntry], now: DateTime<Utc>, days: i64) -> Vec<Mood> {
    let mut sample: Vec<&JournalEntry> = windowed(entries, now, days).collect();
    sample.sort_by_key(|e| e.created_at);
    sample.iter().map(|e| e.mood).collect()
}

fn windowed(
    entries: &[JournalEntry],
    now: DateTime<Utc>,
    days: i64,
) -> impl Iterator<Item = &JournalEntry> {
    let start = now - Duration::days(days);
    entries.iter().filter(move |e| e.created_at >= start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn entry(day: u32, hour: u32, mood: Mood, text: &str) -> JournalEntry {
        JournalEntry::new(
            Uuid::nil(),
            text.to_string(),
            mood,
            Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_window_excludes_old_entries() {
        let entries = vec![
            entry(1, 9, Mood::Sad, "old old old"),
            entry(9, 9, Mood::Happy, "fresh"),
        ];

        let distribution = mood_distribution(&entries, now(), 7);

        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].mood, Mood::Happy);
    }

    #[test]
    fn test_mood_trends_grouped_by_day() {
        let entries = vec![
            entry(8, 9, Mood::Happy, "a"),
            entry(8, 20, Mood::Happy, "b"),
            entry(8, 22, Mood::Sad, "c"),
            entry(9, 7, Mood::Calm, "d"),
        ];

        let trends = mood_trends(&entries, now(), 7);

        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].date, entry(8, 0, Mood::Happy, "").created_at.date_naive());
        assert_eq!(
            trends[0].moods,
            vec![
                MoodCount { mood: Mood::Happy, count: 2 },
                MoodCount { mood: Mood::Sad, count: 1 },
            ]
        );
        assert_eq!(trends[1].moods, vec![MoodCount { mood: Mood::Calm, count: 1 }]);
    }

    #[test]
    fn test_distribution_sorted_descending() {
        let entries = vec![
            entry(8, 9, Mood::Sad, "a"),
            entry(8, 10, Mood::Happy, "b"),
            entry(9, 9, Mood::Happy, "c"),
        ];

        let distribution = mood_distribution(&entries, now(), 7);

        assert_eq!(distribution[0], MoodCount { mood: Mood::Happy, count: 2 });
        assert_eq!(distribution[1], MoodCount { mood: Mood::Sad, count: 1 });
    }

    #[test]
    fn test_writing_frequency_totals_words() {
        let entries = vec![
            entry(8, 9, Mood::Happy, "one two three"),
            entry(8, 21, Mood::Calm, "four five"),
            entry(9, 9, Mood::Calm, "six"),
        ];

        let frequency = writing_frequency(&entries, now(), 7);

        assert_eq!(frequency.len(), 2);
        assert_eq!(frequency[0].entries, 2);
        assert_eq!(frequency[0].total_words, 5);
        assert_eq!(frequency[1].entries, 1);
        assert_eq!(frequency[1].total_words, 1);
    }

    #[test]
    fn test_recent_moods_chronological() {
        let entries = vec![
            entry(9, 9, Mood::Calm, "later"),
            entry(8, 9, Mood::Happy, "earlier"),
            entry(1, 9, Mood::Sad, "too old"),
        ];

        let moods = recent_moods(&entries, now(), 7);

        assert_eq!(moods, vec![Mood::Happy, Mood::Calm]);
    }
}
