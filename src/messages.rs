//! Encouragement, celebration, and companion-reaction text.
//!
//! Selection is deterministic: where several phrasings exist, the pick is
//! keyed on a stable hash of the input so the same achievement always
//! celebrates the same way.

use crate::achievements::{Achievement, AchievementCategory};
use crate::journal::Mood;

/// Encouraging line for a streak and the just-logged mood.
///
/// Milestone streaks take precedence, then mood-specific lines, then a
/// generic fallback.
pub fn encouraging_message(streak: u32, mood: Mood) -> &'static str {
    match streak {
        1 => "Great start! You've begun your journaling journey.",
        3 => "Amazing! Three days of reflection in a row.",
        7 => "Incredible! A whole week of journaling!",
        14 => "Fantastic! Two weeks of consistent self-reflection.",
        30 => "Outstanding! A full month of journaling!",
        100 => "Legendary! 100 days of self-discovery!",
        _ => match mood {
            Mood::Happy => "Your positive energy is contagious!",
            Mood::Grateful => "Gratitude is a beautiful practice.",
            Mood::Calm => "Your inner peace is inspiring.",
            Mood::Hopeful => "Hope is a powerful force for healing.",
            _ => "Keep up the great work with your journaling!",
        },
    }
}

const CELEBRATION_TEMPLATES: [&str; 4] = [
    "Congratulations! You've unlocked the \"{}\" achievement!",
    "Amazing work! You earned the \"{}\" badge!",
    "Well done! The \"{}\" achievement is now yours!",
    "Fantastic! You've achieved \"{}\"!",
];

/// Celebration line for a newly unlocked achievement.
pub fn celebration_message(achievement: &Achievement) -> String {
    let template = CELEBRATION_TEMPLATES[stable_pick(&achievement.id, CELEBRATION_TEMPLATES.len())];
    template.replace("{}", &achievement.name)
}

/// What the companion says about an unlock in this category.
pub fn companion_reaction(category: AchievementCategory) -> &'static str {
    let reactions: &[&str] = match category {
        AchievementCategory::Streak => {
            &["so proud of you!", "you're on fire!", "amazing consistency!"]
        }
        AchievementCategory::Mood => &[
            "beautiful emotional growth!",
            "your feelings matter!",
            "such self-awareness!",
        ],
        AchievementCategory::Companion => &[
            "our bond grows stronger!",
            "we make a great team!",
            "level up together!",
        ],
        _ => &["what an achievement!", "you're incredible!", "so inspiring!"],
    };

    reactions[stable_pick(category.as_str(), reactions.len())]
}

/// Greeting for an hour of day (0-23).
pub fn time_greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Stable index in `0..len` derived from a string key.
fn stable_pick(key: &str, len: usize) -> usize {
    let hash = key
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    hash % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementCatalog;

    #[test]
    fn test_streak_milestones_beat_mood_lines() {
        assert_eq!(
            encouraging_message(7, Mood::Happy),
            "Incredible! A whole week of journaling!"
        );
        assert_eq!(
            encouraging_message(2, Mood::Happy),
            "Your positive energy is contagious!"
        );
        assert_eq!(
            encouraging_message(2, Mood::Angry),
            "Keep up the great work with your journaling!"
        );
    }

    #[test]
    fn test_celebration_message_is_deterministic() {
        let catalog = AchievementCatalog::default();
        let achievement = catalog.get("week-warrior").unwrap();

        let first = celebration_message(achievement);
        let second = celebration_message(achievement);

        assert_eq!(first, second);
        assert!(first.contains("Week Warrior"));
    }

    #[test]
    fn test_companion_reaction_per_category() {
        assert_eq!(
            companion_reaction(AchievementCategory::Streak),
            companion_reaction(AchievementCategory::Streak)
        );
        // Uncategorized kinds fall back to the milestone reactions
        let fallback = companion_reaction(AchievementCategory::Variety);
        assert_eq!(fallback, companion_reaction(AchievementCategory::Ai));
    }

    #[test]
    fn test_time_greeting() {
        assert_eq!(time_greeting(5), "Good morning");
        assert_eq!(time_greeting(11), "Good morning");
        assert_eq!(time_greeting(12), "Good afternoon");
        assert_eq!(time_greeting(16), "Good afternoon");
        assert_eq!(time_greeting(17), "Good evening");
        assert_eq!(time_greeting(23), "Good evening");
    }
}
