//! Journal entry, progress, and achievement persistence.
//!
//! Realizes the entry-persistence collaborator of the progression engine:
//! supplies aggregate statistics on demand and persists updated progress
//! after each streak update. Callers must serialize writes for a given
//! user; the store itself does no cross-request coordination.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::achievements::UnlockedAchievement;
use crate::journal::{AiSuggestion, CompanionMood, JournalEntry, Mood};
use crate::progress::UserProgress;
use crate::stats::AggregateStats;

/// Store for journal data.
pub struct JournalStore<'a> {
    conn: &'a Connection,
}

impl<'a> JournalStore<'a> {
    /// Create a new store with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new journal entry.
    pub fn insert_entry(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO journal_entries
             (id, user_id, text, mood, doodle, tags, is_private, word_count,
              ai_suggestions, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                entry.id.to_string(),
                entry.user_id.to_string(),
                entry.text,
                entry.mood.as_str(),
                entry.doodle,
                serde_json::to_string(&entry.tags)?,
                entry.is_private,
                entry.word_count,
                serde_json::to_string(&entry.ai_suggestions)?,
                entry.created_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// Get an entry by id.
    pub fn get_entry(&self, id: Uuid) -> Result<Option<JournalEntry>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, user_id, text, mood, doodle, tags, is_private,
                        word_count, ai_suggestions, created_at
                 FROM journal_entries WHERE id = ?1",
                params![id.to_string()],
                parse_entry_row,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Update a mutable entry (text, mood, doodle, tags, privacy,
    /// suggestions). The creation timestamp never changes.
    pub fn update_entry(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE journal_entries SET
             text = ?1, mood = ?2, doodle = ?3, tags = ?4, is_private = ?5,
             word_count = ?6, ai_suggestions = ?7
             WHERE id = ?8",
            params![
                entry.text,
                entry.mood.as_str(),
                entry.doodle,
                serde_json::to_string(&entry.tags)?,
                entry.is_private,
                entry.word_count,
                serde_json::to_string(&entry.ai_suggestions)?,
                entry.id.to_string(),
            ],
        )?;

        Ok(())
    }

    /// Get all entries for a user, newest first.
    pub fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<JournalEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, text, mood, doodle, tags, is_private,
                    word_count, ai_suggestions, created_at
             FROM journal_entries
             WHERE user_id = ?1
             ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![user_id.to_string()], parse_entry_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Mood tags of the user's entries in the last `days` days, oldest
    /// entry first.
    pub fn recent_moods(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        days: i64,
    ) -> Result<Vec<Mood>, StoreError> {
        let cutoff = (now - Duration::days(days)).to_rfc3339();

        let mut stmt = self.conn.prepare(
            "SELECT mood FROM journal_entries
             WHERE user_id = ?1 AND created_at >= ?2
             ORDER BY created_at ASC",
        )?;

        let rows = stmt.query_map(params![user_id.to_string(), cutoff], |row| {
            row.get::<_, String>(0)
        })?;

        let mut moods = Vec::new();
        for row in rows {
            moods.push(Mood::from_str(&row?).unwrap_or(Mood::Neutral));
        }

        Ok(moods)
    }

    /// Aggregate statistics over the user's full entry history.
    ///
    /// SQL counterpart of [`AggregateStats::from_entries`]; both produce
    /// identical results over the same history.
    pub fn aggregate_stats(&self, user_id: Uuid) -> Result<AggregateStats, StoreError> {
        let mut stats = AggregateStats::default();
        let user_key = user_id.to_string();

        let (total_entries, total_words, total_ai): (u64, u64, u64) = self.conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(word_count), 0),
                    COALESCE(SUM(json_array_length(ai_suggestions)), 0)
             FROM journal_entries WHERE user_id = ?1",
            params![user_key],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        stats.total_entries = total_entries;
        stats.total_words = total_words;
        stats.total_ai_suggestions = total_ai;

        let mut stmt = self.conn.prepare(
            "SELECT mood, COUNT(*) FROM journal_entries
             WHERE user_id = ?1 GROUP BY mood",
        )?;
        let rows = stmt.query_map(params![user_key], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
        })?;
        for row in rows {
            let (mood_str, count) = row?;
            if let Some(mood) = Mood::from_str(&mood_str) {
                stats.unique_moods.insert(mood);
                stats.mood_distribution.insert(mood, count);
            }
        }

        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT CAST(strftime('%H', created_at) AS INTEGER)
             FROM journal_entries WHERE user_id = ?1",
        )?;
        let rows = stmt.query_map(params![user_key], |row| row.get::<_, i64>(0))?;
        for row in rows {
            let hour = row?;
            if (0..24).contains(&hour) {
                stats.has_journaled_at[hour as usize] = true;
            }
        }

        Ok(stats)
    }

    /// Load a user's progression state.
    pub fn load_progress(&self, user_id: Uuid) -> Result<Option<UserProgress>, StoreError> {
        self.conn
            .query_row(
                "SELECT user_id, current_streak, longest_streak, last_entry_date,
                        companion_level, companion_mood
                 FROM user_progress WHERE user_id = ?1",
                params![user_id.to_string()],
                parse_progress_row,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Persist a user's progression state.
    pub fn save_progress(&self, progress: &UserProgress) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO user_progress
             (user_id, current_streak, longest_streak, last_entry_date,
              companion_level, companion_mood)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(user_id) DO UPDATE SET
             current_streak = excluded.current_streak,
             longest_streak = excluded.longest_streak,
             last_entry_date = excluded.last_entry_date,
             companion_level = excluded.companion_level,
             companion_mood = excluded.companion_mood",
            params![
                progress.user_id.to_string(),
                progress.current_streak,
                progress.longest_streak,
                progress.last_entry_date.map(|d| d.to_string()),
                progress.companion_level,
                progress.companion_mood.as_str(),
            ],
        )?;

        Ok(())
    }

    /// Ids of achievements the user has already unlocked.
    pub fn unlocked_ids(&self, user_id: Uuid) -> Result<HashSet<String>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT achievement_id FROM unlocked_achievements WHERE user_id = ?1",
        )?;

        let rows = stmt.query_map(params![user_id.to_string()], |row| {
            row.get::<_, String>(0)
        })?;

        rows.collect::<Result<HashSet<_>, _>>()
            .map_err(StoreError::from)
    }

    /// Record newly unlocked achievements.
    ///
    /// The unlocked set is append-only and an id is stored at most once per
    /// user, so re-recording an id is a no-op.
    pub fn record_unlocks(
        &self,
        user_id: Uuid,
        unlocked: &[UnlockedAchievement],
    ) -> Result<(), StoreError> {
        for unlock in unlocked {
            self.conn.execute(
                "INSERT OR IGNORE INTO unlocked_achievements
                 (user_id, achievement_id, unlocked_at)
                 VALUES (?1, ?2, ?3)",
                params![
                    user_id.to_string(),
                    unlock.achievement.id,
                    unlock.unlocked_at.to_rfc3339(),
                ],
            )?;
        }

        Ok(())
    }

    /// Unlocked achievement ids with timestamps, earliest unlock first.
    pub fn unlock_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(String, DateTime<Utc>)>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT achievement_id, unlocked_at FROM unlocked_achievements
             WHERE user_id = ?1 ORDER BY unlocked_at ASC, achievement_id ASC",
        )?;

        let rows = stmt.query_map(params![user_id.to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut history = Vec::new();
        for row in rows {
            let (id, at_str) = row?;
            let at = DateTime::parse_from_rfc3339(&at_str)
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());
            history.push((id, at));
        }

        Ok(history)
    }
}

/// Parse a database row into a JournalEntry.
fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<JournalEntry> {
    let id_str: String = row.get(0)?;
    let user_id_str: String = row.get(1)?;
    let mood_str: String = row.get(3)?;
    let tags_json: String = row.get(5)?;
    let suggestions_json: String = row.get(8)?;
    let created_at_str: String = row.get(9)?;

    let tags: Vec<String> = serde_json::from_str(&tags_json).unwrap_or_default();
    let ai_suggestions: Vec<AiSuggestion> =
        serde_json::from_str(&suggestions_json).unwrap_or_default();

    Ok(JournalEntry {
        id: Uuid::parse_str(&id_str).unwrap_or_default(),
        user_id: Uuid::parse_str(&user_id_str).unwrap_or_default(),
        text: row.get(2)?,
        mood: Mood::from_str(&mood_str).unwrap_or(Mood::Neutral),
        doodle: row.get(4)?,
        tags,
        is_private: row.get(6)?,
        word_count: row.get(7)?,
        ai_suggestions,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

/// Parse a database row into a UserProgress.
fn parse_progress_row(row: &rusqlite::Row) -> rusqlite::Result<UserProgress> {
    let user_id_str: String = row.get(0)?;
    let last_entry_str: Option<String> = row.get(3)?;
    let mood_str: String = row.get(5)?;

    Ok(UserProgress {
        user_id: Uuid::parse_str(&user_id_str).unwrap_or_default(),
        current_streak: row.get(1)?,
        longest_streak: row.get(2)?,
        last_entry_date: last_entry_str
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        companion_level: row.get(4)?,
        companion_mood: CompanionMood::from_str(&mood_str).unwrap_or(CompanionMood::Neutral),
    })
}

/// Journal store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
