//! Achievement catalog and unlock engine.
//!
//! The catalog is an immutable, insertion-ordered table built once at
//! startup and passed to every engine function as a read-only input, so
//! tests can swap in custom catalogs. Unlocking is monotonic: once an id is
//! in a user's unlocked set it is never returned again.

pub mod definitions;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::Mood;
use crate::progress::UserProgress;
use crate::stats::AggregateStats;

/// Achievement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// One-off milestones (first entry, word totals)
    Milestone,
    /// Consecutive-day streaks
    Streak,
    /// Mood variety
    Variety,
    /// Counts of a specific mood
    Mood,
    /// Companion leveling
    Companion,
    /// Time-of-day and other special conditions
    Special,
    /// AI suggestion usage
    Ai,
}

impl AchievementCategory {
    /// Get the stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Milestone => "milestone",
            AchievementCategory::Streak => "streak",
            AchievementCategory::Variety => "variety",
            AchievementCategory::Mood => "mood",
            AchievementCategory::Companion => "companion",
            AchievementCategory::Special => "special",
            AchievementCategory::Ai => "ai",
        }
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Requirement that unlocks an achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Requirement {
    /// Total entries written
    Entries { count: u64 },
    /// Current consecutive-day streak
    Streak { count: u32 },
    /// Total words across all entries
    TotalWords { count: u64 },
    /// Distinct moods ever logged
    UniqueMoods { count: u64 },
    /// Entries logged with a specific mood
    MoodCount { mood: Mood, count: u64 },
    /// Companion level reached
    CompanionLevel { level: u8 },
    /// Any entry created during a given UTC hour of day
    TimeOfDay { hour: u8 },
    /// Total AI suggestions used
    AiSuggestions { count: u64 },
}

impl Requirement {
    /// Whether the requirement is met by the given state.
    pub fn is_satisfied(&self, progress: &UserProgress, stats: &AggregateStats) -> bool {
        match *self {
            Requirement::TimeOfDay { hour } => stats
                .has_journaled_at
                .get(hour as usize)
                .copied()
                .unwrap_or(false),
            _ => match self.measure(progress, stats) {
                Some((current, target)) => current >= target,
                None => false,
            },
        }
    }

    /// Current and target values, for progress reporting.
    ///
    /// `TimeOfDay` has no meaningful partial-progress metric and yields
    /// `None`; it only ever reports via [`Requirement::is_satisfied`].
    pub fn measure(&self, progress: &UserProgress, stats: &AggregateStats) -> Option<(u64, u64)> {
        match *self {
            Requirement::Entries { count } => Some((stats.total_entries, count)),
            Requirement::Streak { count } => {
                Some((u64::from(progress.current_streak), u64::from(count)))
            }
            Requirement::TotalWords { count } => Some((stats.total_words, count)),
            Requirement::UniqueMoods { count } => {
                Some((stats.unique_moods.len() as u64, count))
            }
            Requirement::MoodCount { mood, count } => Some((stats.mood_count(mood), count)),
            Requirement::CompanionLevel { level } => {
                Some((u64::from(progress.companion_level), u64::from(level)))
            }
            Requirement::AiSuggestions { count } => Some((stats.total_ai_suggestions, count)),
            Requirement::TimeOfDay { .. } => None,
        }
    }
}

/// Achievement definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Display icon
    pub icon: String,
    /// Category
    pub category: AchievementCategory,
    /// Unlock requirement
    pub requirement: Requirement,
}

impl Achievement {
    /// Create a new achievement definition.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        category: AchievementCategory,
        requirement: Requirement,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            category,
            requirement,
        }
    }
}

/// Immutable, insertion-ordered achievement table.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    achievements: Vec<Achievement>,
}

impl AchievementCatalog {
    /// Build a catalog from definitions, preserving their order.
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    /// Iterate over achievements in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    /// Look up an achievement by id.
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Number of achievements in the catalog.
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::new(definitions::default_achievements())
    }
}

/// An achievement at the moment it was unlocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Full catalog metadata
    pub achievement: Achievement,
    /// When the requirement was first observed satisfied
    pub unlocked_at: DateTime<Utc>,
}

/// Progress toward a single locked achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Current measured value
    pub current: u64,
    /// Target value
    pub target: u64,
    /// Completion percentage, capped at 100
    pub percentage: f32,
    /// Whether the target is reached
    pub completed: bool,
}

/// A locked achievement ranked by how close it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingAchievement {
    /// Full catalog metadata
    pub achievement: Achievement,
    /// Progress toward the requirement
    pub progress: AchievementProgress,
}

/// Evaluate the catalog and return achievements that just became unlocked.
///
/// Results come back in catalog order, each stamped with `now`; ids already
/// in `already_unlocked` are never returned.
pub fn check_new_achievements(
    catalog: &AchievementCatalog,
    already_unlocked: &HashSet<String>,
    progress: &UserProgress,
    stats: &AggregateStats,
    now: DateTime<Utc>,
) -> Vec<UnlockedAchievement> {
    catalog
        .iter()
        .filter(|a| !already_unlocked.contains(&a.id))
        .filter(|a| a.requirement.is_satisfied(progress, stats))
        .map(|a| UnlockedAchievement {
            achievement: a.clone(),
            unlocked_at: now,
        })
        .collect()
}

/// Progress toward one achievement, or `None` when the id is unknown or the
/// requirement has no partial-progress metric.
pub fn achievement_progress(
    catalog: &AchievementCatalog,
    id: &str,
    progress: &UserProgress,
    stats: &AggregateStats,
) -> Option<AchievementProgress> {
    let achievement = catalog.get(id)?;
    let (current, target) = achievement.requirement.measure(progress, stats)?;

    let percentage = if target == 0 {
        100.0
    } else {
        ((current as f32 / target as f32) * 100.0).min(100.0)
    };

    Some(AchievementProgress {
        current,
        target,
        percentage,
        completed: current >= target,
    })
}

/// The `limit` closest locked achievements, strictly between 0% and 100%,
/// sorted descending by percentage with catalog order breaking ties.
pub fn upcoming_achievements(
    catalog: &AchievementCatalog,
    already_unlocked: &HashSet<String>,
    progress: &UserProgress,
    stats: &AggregateStats,
    limit: usize,
) -> Vec<UpcomingAchievement> {
    let mut upcoming: Vec<UpcomingAchievement> = catalog
        .iter()
        .filter(|a| !already_unlocked.contains(&a.id))
        .filter_map(|a| {
            achievement_progress(catalog, &a.id, progress, stats).map(|p| UpcomingAchievement {
                achievement: a.clone(),
                progress: p,
            })
        })
        .filter(|u| u.progress.percentage > 0.0 && u.progress.percentage < 100.0)
        .collect();

    // Stable sort keeps catalog order among equal percentages
    upcoming.sort_by(|a, b| {
        b.progress
            .percentage
            .partial_cmp(&a.progress.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    upcoming.truncate(limit);

    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn fresh_progress() -> UserProgress {
        UserProgress::new(Uuid::new_v4())
    }

    fn ids(unlocked: &[UnlockedAchievement]) -> Vec<&str> {
        unlocked
            .iter()
            .map(|u| u.achievement.id.as_str())
            .collect()
    }

    #[test]
    fn test_fresh_user_unlocks_first_entry_only_from_streak_group() {
        let catalog = AchievementCatalog::default();
        let mut progress = fresh_progress();
        progress.current_streak = 1;
        let stats = AggregateStats {
            total_entries: 1,
            ..Default::default()
        };

        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());

        let unlocked_ids = ids(&unlocked);
        assert!(unlocked_ids.contains(&"first-entry"));
        assert!(!unlocked_ids.contains(&"week-warrior"));
    }

    #[test]
    fn test_streak_boundary() {
        let catalog = AchievementCatalog::default();
        let stats = AggregateStats::default();

        let mut progress = fresh_progress();
        progress.current_streak = 6;
        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());
        assert!(!ids(&unlocked).contains(&"week-warrior"));

        progress.current_streak = 7;
        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());
        assert!(ids(&unlocked).contains(&"week-warrior"));
    }

    #[test]
    fn test_mood_count_requirement() {
        let catalog = AchievementCatalog::default();
        let progress = fresh_progress();
        let mut stats = AggregateStats::default();
        stats.mood_distribution.insert(Mood::Grateful, 10);

        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());

        assert!(ids(&unlocked).contains(&"gratitude-guru"));
    }

    #[test]
    fn test_already_unlocked_never_returned() {
        let catalog = AchievementCatalog::default();
        let mut progress = fresh_progress();
        progress.current_streak = 7;
        let stats = AggregateStats {
            total_entries: 7,
            ..Default::default()
        };

        let first_pass =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());
        assert!(!first_pass.is_empty());

        let unlocked_set: HashSet<String> = first_pass
            .iter()
            .map(|u| u.achievement.id.clone())
            .collect();
        let second_pass =
            check_new_achievements(&catalog, &unlocked_set, &progress, &stats, now());

        for u in &second_pass {
            assert!(!unlocked_set.contains(&u.achievement.id));
        }
        assert!(second_pass.is_empty());
    }

    #[test]
    fn test_results_in_catalog_order() {
        let catalog = AchievementCatalog::default();
        let mut progress = fresh_progress();
        progress.current_streak = 30;
        progress.companion_level = 5;
        let stats = AggregateStats {
            total_entries: 30,
            total_words: 2000,
            ..Default::default()
        };

        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());
        let positions: Vec<usize> = unlocked
            .iter()
            .map(|u| {
                catalog
                    .iter()
                    .position(|a| a.id == u.achievement.id)
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_time_of_day_satisfied_by_hour_flag() {
        let catalog = AchievementCatalog::default();
        let progress = fresh_progress();
        let mut stats = AggregateStats::default();
        stats.has_journaled_at[22] = true;

        let unlocked =
            check_new_achievements(&catalog, &HashSet::new(), &progress, &stats, now());

        assert!(ids(&unlocked).contains(&"night-owl"));
        assert!(!ids(&unlocked).contains(&"early-bird"));
    }

    #[test]
    fn test_progress_percentage_capped() {
        let catalog = AchievementCatalog::new(vec![Achievement::new(
            "ten-entries",
            "Ten Entries",
            "Write ten entries",
            "✒️",
            AchievementCategory::Milestone,
            Requirement::Entries { count: 10 },
        )]);
        let progress = fresh_progress();
        let stats = AggregateStats {
            total_entries: 15,
            ..Default::default()
        };

        let p = achievement_progress(&catalog, "ten-entries", &progress, &stats).unwrap();

        assert_eq!(p.current, 15);
        assert_eq!(p.target, 10);
        assert_eq!(p.percentage, 100.0);
        assert!(p.completed);
    }

    #[test]
    fn test_progress_unknown_id_and_time_of_day_absent() {
        let catalog = AchievementCatalog::default();
        let progress = fresh_progress();
        let stats = AggregateStats::default();

        assert!(achievement_progress(&catalog, "no-such-id", &progress, &stats).is_none());
        assert!(achievement_progress(&catalog, "night-owl", &progress, &stats).is_none());
    }

    #[test]
    fn test_upcoming_excludes_extremes_and_sorts_descending() {
        let catalog = AchievementCatalog::default();
        let mut progress = fresh_progress();
        progress.current_streak = 3; // week-warrior at 3/7
        let mut stats = AggregateStats {
            total_entries: 1,  // first-entry at 100%
            total_words: 900,  // wordsmith at 90%
            ..Default::default()
        };
        stats.unique_moods.insert(Mood::Happy); // emotion-explorer at 1/5

        let upcoming =
            upcoming_achievements(&catalog, &HashSet::new(), &progress, &stats, 3);

        assert!(upcoming.len() <= 3);
        for u in &upcoming {
            assert!(u.progress.percentage > 0.0);
            assert!(u.progress.percentage < 100.0);
            assert_ne!(u.achievement.id, "first-entry");
        }
        assert!(upcoming
            .windows(2)
            .all(|w| w[0].progress.percentage >= w[1].progress.percentage));
        assert_eq!(upcoming[0].achievement.id, "wordsmith");
    }

    #[test]
    fn test_upcoming_respects_limit() {
        let catalog = AchievementCatalog::default();
        let mut progress = fresh_progress();
        progress.current_streak = 2;
        progress.companion_level = 2;
        let stats = AggregateStats {
            total_entries: 5,
            total_words: 500,
            total_ai_suggestions: 3,
            ..Default::default()
        };

        let upcoming =
            upcoming_achievements(&catalog, &HashSet::new(), &progress, &stats, 2);

        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn test_requirement_serde_form() {
        let requirement = Requirement::MoodCount {
            mood: Mood::Grateful,
            count: 10,
        };
        let json = serde_json::to_string(&requirement).unwrap();
        assert_eq!(json, r#"{"type":"moodCount","mood":"grateful","count":10}"#);

        let back: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, requirement);

        let streak: Requirement =
            serde_json::from_str(r#"{"type":"streak","count":7}"#).unwrap();
        assert_eq!(streak, Requirement::Streak { count: 7 });
    }
}
