//! Journal service: entry creation and progression orchestration.

use chrono::{DateTime, Timelike, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::achievements::{
    achievement_progress, check_new_achievements, upcoming_achievements, AchievementCatalog,
    AchievementProgress, UnlockedAchievement, UpcomingAchievement,
};
use crate::analytics::{self, MoodAnalytics};
use crate::config::AppConfig;
use crate::journal::{CompanionMood, JournalEntry, Mood, SuggestionKind, MAX_TEXT_CHARS};
use crate::messages;
use crate::progress::UserProgress;
use crate::storage::{Database, JournalStore, StoreError};

/// Input for a new journal entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Entry text (required, at most [`MAX_TEXT_CHARS`] characters)
    pub text: String,
    /// Logged mood
    pub mood: Mood,
    /// Opaque doodle payload captured client-side, if any
    pub doodle: Option<String>,
    /// Explicit tags
    pub tags: Vec<String>,
    /// Whether the entry is private
    pub is_private: bool,
}

/// Result of creating an entry.
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    /// The persisted entry
    pub entry: JournalEntry,
    /// Progression state after the update
    pub progress: UserProgress,
    /// Achievements unlocked by this entry
    pub newly_unlocked: Vec<UnlockedAchievement>,
    /// Whether the companion gained a level
    pub companion_leveled_up: bool,
    /// Encouraging line for the user
    pub encouragement: String,
}

/// Service wiring the progression engines to the journal store.
pub struct JournalService {
    db: Database,
    catalog: AchievementCatalog,
    config: AppConfig,
}

impl JournalService {
    /// Create a service over an open database.
    pub fn new(db: Database, catalog: AchievementCatalog, config: AppConfig) -> Self {
        Self {
            db,
            catalog,
            config,
        }
    }

    /// The achievement catalog in use.
    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Create a journal entry and run the full progression update.
    ///
    /// Persists the entry, records it into the streak exactly once,
    /// refreshes the companion mood from the recent-mood window, and
    /// evaluates achievements against fresh aggregate statistics.
    ///
    /// For a given user, calls must be applied atomically and in
    /// increasing-timestamp order; concurrent entry creation for the same
    /// user has to be serialized by the caller (per-user locking or
    /// optimistic retry), or streaks can double-increment.
    pub fn create_entry(
        &self,
        user_id: Uuid,
        new: NewEntry,
        now: DateTime<Utc>,
    ) -> Result<EntryOutcome, ServiceError> {
        if new.text.trim().is_empty() {
            return Err(ServiceError::Validation(
                "entry text is required".to_string(),
            ));
        }
        if new.text.chars().count() > MAX_TEXT_CHARS {
            return Err(ServiceError::Validation(format!(
                "entry text exceeds {MAX_TEXT_CHARS} characters"
            )));
        }

        let store = JournalStore::new(self.db.connection());

        let mut entry = JournalEntry::new(user_id, new.text, new.mood, now);
        entry.doodle = new.doodle;
        entry.is_private = new.is_private;
        for tag in new.tags {
            if !entry.tags.contains(&tag) {
                entry.tags.push(tag);
            }
        }
        store.insert_entry(&entry)?;

        let mut progress = store
            .load_progress(user_id)?
            .unwrap_or_else(|| UserProgress::new(user_id));
        let previous_level = progress.companion_level;

        progress.update_streak(now);

        let recent = store.recent_moods(user_id, now, self.config.journal.mood_window_days)?;
        progress.update_companion_mood(&recent);

        store.save_progress(&progress)?;

        let stats = store.aggregate_stats(user_id)?;
        let already_unlocked = store.unlocked_ids(user_id)?;
        let newly_unlocked =
            check_new_achievements(&self.catalog, &already_unlocked, &progress, &stats, now);
        store.record_unlocks(user_id, &newly_unlocked)?;

        for unlock in &newly_unlocked {
            tracing::info!(
                user = %user_id,
                achievement = %unlock.achievement.id,
                "achievement unlocked"
            );
        }

        let companion_leveled_up = progress.companion_level > previous_level;
        if companion_leveled_up {
            tracing::info!(
                user = %user_id,
                level = progress.companion_level,
                "companion leveled up"
            );
        }
        tracing::debug!(
            user = %user_id,
            streak = progress.current_streak,
            mood = %progress.companion_mood,
            "progress updated"
        );

        let encouragement =
            messages::encouraging_message(progress.current_streak, entry.mood).to_string();

        Ok(EntryOutcome {
            entry,
            progress,
            newly_unlocked,
            companion_leveled_up,
            encouragement,
        })
    }

    /// Edit an existing entry's text and mood.
    ///
    /// Recomputes the word count and re-extracts keyword tags. Editing
    /// never re-runs the streak update; only entry creation counts toward
    /// streaks.
    pub fn update_entry(
        &self,
        entry_id: Uuid,
        text: Option<String>,
        mood: Option<Mood>,
    ) -> Result<JournalEntry, ServiceError> {
        let store = JournalStore::new(self.db.connection());

        let mut entry = store
            .get_entry(entry_id)?
            .ok_or(ServiceError::EntryNotFound(entry_id))?;

        if let Some(text) = text {
            if text.trim().is_empty() {
                return Err(ServiceError::Validation(
                    "entry text is required".to_string(),
                ));
            }
            entry.text = text;
            entry.refresh_word_count();
            entry.extract_tags();
        }
        if let Some(mood) = mood {
            entry.mood = mood;
        }

        store.update_entry(&entry)?;

        Ok(entry)
    }

    /// Attach an AI writing suggestion to an existing entry.
    ///
    /// Returns the updated entry. Suggestion usage counts toward the
    /// AI-suggestion achievements on the next entry evaluation.
    pub fn add_ai_suggestion(
        &self,
        entry_id: Uuid,
        kind: SuggestionKind,
        content: String,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry, ServiceError> {
        let store = JournalStore::new(self.db.connection());

        let mut entry = store
            .get_entry(entry_id)?
            .ok_or(ServiceError::EntryNotFound(entry_id))?;

        entry.add_ai_suggestion(kind, content, now);
        store.update_entry(&entry)?;

        Ok(entry)
    }

    /// Refresh the companion mood outside entry creation (login path).
    pub fn refresh_companion_mood(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<CompanionMood, ServiceError> {
        let store = JournalStore::new(self.db.connection());

        let mut progress = store
            .load_progress(user_id)?
            .unwrap_or_else(|| UserProgress::new(user_id));

        let recent = store.recent_moods(user_id, now, self.config.journal.mood_window_days)?;
        progress.update_companion_mood(&recent);
        store.save_progress(&progress)?;

        Ok(progress.companion_mood)
    }

    /// Progress toward a single locked achievement.
    pub fn achievement_progress(
        &self,
        user_id: Uuid,
        achievement_id: &str,
    ) -> Result<Option<AchievementProgress>, ServiceError> {
        let store = JournalStore::new(self.db.connection());

        let progress = store
            .load_progress(user_id)?
            .unwrap_or_else(|| UserProgress::new(user_id));
        let stats = store.aggregate_stats(user_id)?;

        Ok(achievement_progress(
            &self.catalog,
            achievement_id,
            &progress,
            &stats,
        ))
    }

    /// The closest not-yet-unlocked achievements for the user.
    pub fn upcoming_achievements(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UpcomingAchievement>, ServiceError> {
        let store = JournalStore::new(self.db.connection());

        let progress = store
            .load_progress(user_id)?
            .unwrap_or_else(|| UserProgress::new(user_id));
        let stats = store.aggregate_stats(user_id)?;
        let already_unlocked = store.unlocked_ids(user_id)?;

        Ok(upcoming_achievements(
            &self.catalog,
            &already_unlocked,
            &progress,
            &stats,
            self.config.journal.upcoming_limit,
        ))
    }

    /// Mood analytics over the configured window.
    pub fn mood_analytics(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<MoodAnalytics, ServiceError> {
        let store = JournalStore::new(self.db.connection());
        let entries = store.entries_for_user(user_id)?;

        Ok(analytics::mood_analytics(
            &entries,
            now,
            self.config.journal.analytics_window_days,
        ))
    }

    /// Greeting line for the dashboard.
    pub fn greeting(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}! {} {} is waiting for you.",
            messages::time_greeting(now.hour()),
            self.config.companion.kind.emoji(),
            self.config.companion.name
        )
    }
}

/// Service errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}
