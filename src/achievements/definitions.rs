//! Achievement definitions.

use super::{Achievement, AchievementCategory, Requirement};
use crate::journal::Mood;

/// Get all achievement definitions, in catalog order.
pub fn default_achievements() -> Vec<Achievement> {
    let mut achievements = Vec::new();

    // Writing streaks
    achievements.extend(writing_achievements());

    // Word counts
    achievements.extend(word_count_achievements());

    // Mood tracking
    achievements.extend(mood_achievements());

    // Companion bond
    achievements.extend(companion_achievements());

    // Special achievements
    achievements.extend(special_achievements());

    achievements
}

fn writing_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first-entry",
            "First Steps",
            "Wrote your very first journal entry",
            "🌟",
            AchievementCategory::Milestone,
            Requirement::Entries { count: 1 },
        ),
        Achievement::new(
            "week-warrior",
            "Week Warrior",
            "Journaled for 7 days in a row",
            "🔥",
            AchievementCategory::Streak,
            Requirement::Streak { count: 7 },
        ),
        Achievement::new(
            "month-master",
            "Month Master",
            "Maintained a 30-day journaling streak",
            "👑",
            AchievementCategory::Streak,
            Requirement::Streak { count: 30 },
        ),
        Achievement::new(
            "century-scholar",
            "Century Scholar",
            "Incredible! 100 days of journaling",
            "💎",
            AchievementCategory::Streak,
            Requirement::Streak { count: 100 },
        ),
    ]
}

fn word_count_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "wordsmith",
            "Wordsmith",
            "Wrote over 1000 words in total",
            "📝",
            AchievementCategory::Milestone,
            Requirement::TotalWords { count: 1000 },
        ),
        Achievement::new(
            "novelist",
            "Novelist",
            "Reached 10,000 words across all entries",
            "📚",
            AchievementCategory::Milestone,
            Requirement::TotalWords { count: 10000 },
        ),
    ]
}

fn mood_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "emotion-explorer",
            "Emotion Explorer",
            "Logged 5 different moods",
            "🎭",
            AchievementCategory::Variety,
            Requirement::UniqueMoods { count: 5 },
        ),
        Achievement::new(
            "gratitude-guru",
            "Gratitude Guru",
            "Expressed gratitude in 10 entries",
            "🙏",
            AchievementCategory::Mood,
            Requirement::MoodCount {
                mood: Mood::Grateful,
                count: 10,
            },
        ),
        Achievement::new(
            "calm-collector",
            "Calm Collector",
            "Found calm in 15 journal sessions",
            "🧘",
            AchievementCategory::Mood,
            Requirement::MoodCount {
                mood: Mood::Calm,
                count: 15,
            },
        ),
    ]
}

fn companion_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "companion-bond",
            "Companion Bond",
            "Your companion reached level 3",
            "💕",
            AchievementCategory::Companion,
            Requirement::CompanionLevel { level: 3 },
        ),
        Achievement::new(
            "companion-master",
            "Companion Master",
            "Your companion reached maximum level",
            "🌈",
            AchievementCategory::Companion,
            Requirement::CompanionLevel { level: 10 },
        ),
    ]
}

fn special_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "night-owl",
            "Night Owl",
            "Journaled after 10 PM",
            "🦉",
            AchievementCategory::Special,
            Requirement::TimeOfDay { hour: 22 },
        ),
        Achievement::new(
            "early-bird",
            "Early Bird",
            "Journaled before 6 AM",
            "🐦",
            AchievementCategory::Special,
            Requirement::TimeOfDay { hour: 6 },
        ),
        Achievement::new(
            "reflection-master",
            "Reflection Master",
            "Used 50 AI suggestions",
            "🤖",
            AchievementCategory::Ai,
            Requirement::AiSuggestions { count: 50 },
        ),
    ]
}
