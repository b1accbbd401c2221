//! Mood, companion, and suggestion enums.

use serde::{Deserialize, Serialize};

/// Mood logged with a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Angry,
    Confused,
    Grateful,
    Hopeful,
    Neutral,
}

impl Mood {
    /// All moods, in canonical order.
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Calm,
        Mood::Excited,
        Mood::Angry,
        Mood::Confused,
        Mood::Grateful,
        Mood::Hopeful,
        Mood::Neutral,
    ];

    /// Get the stable string form (used in storage and serialization).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Angry => "angry",
            Mood::Confused => "confused",
            Mood::Grateful => "grateful",
            Mood::Hopeful => "hopeful",
            Mood::Neutral => "neutral",
        }
    }

    /// Parse from the stable string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "anxious" => Some(Mood::Anxious),
            "calm" => Some(Mood::Calm),
            "excited" => Some(Mood::Excited),
            "angry" => Some(Mood::Angry),
            "confused" => Some(Mood::Confused),
            "grateful" => Some(Mood::Grateful),
            "hopeful" => Some(Mood::Hopeful),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }

    /// Get the display emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
            Mood::Angry => "😠",
            Mood::Confused => "😕",
            Mood::Grateful => "🙏",
            Mood::Hopeful => "🌟",
            Mood::Neutral => "😐",
        }
    }

    /// Map onto the narrower companion mood palette.
    ///
    /// The companion only displays six moods; entry moods outside that set
    /// collapse onto the nearest companion expression.
    pub fn as_companion_mood(&self) -> CompanionMood {
        match self {
            Mood::Happy => CompanionMood::Happy,
            Mood::Sad => CompanionMood::Sad,
            Mood::Anxious => CompanionMood::Anxious,
            Mood::Calm => CompanionMood::Calm,
            Mood::Excited => CompanionMood::Excited,
            Mood::Angry => CompanionMood::Anxious,
            Mood::Confused => CompanionMood::Anxious,
            Mood::Grateful => CompanionMood::Happy,
            Mood::Hopeful => CompanionMood::Happy,
            Mood::Neutral => CompanionMood::Neutral,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mood displayed by the virtual companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionMood {
    Happy,
    Sad,
    Calm,
    Anxious,
    Excited,
    #[default]
    Neutral,
}

impl CompanionMood {
    /// Get the stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanionMood::Happy => "happy",
            CompanionMood::Sad => "sad",
            CompanionMood::Calm => "calm",
            CompanionMood::Anxious => "anxious",
            CompanionMood::Excited => "excited",
            CompanionMood::Neutral => "neutral",
        }
    }

    /// Parse from the stable string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(CompanionMood::Happy),
            "sad" => Some(CompanionMood::Sad),
            "calm" => Some(CompanionMood::Calm),
            "anxious" => Some(CompanionMood::Anxious),
            "excited" => Some(CompanionMood::Excited),
            "neutral" => Some(CompanionMood::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompanionMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of virtual companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionKind {
    #[default]
    Cat,
    Plant,
    Cloud,
    Bunny,
    Bird,
}

impl CompanionKind {
    /// Get the display emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            CompanionKind::Cat => "🐱",
            CompanionKind::Plant => "🌱",
            CompanionKind::Cloud => "☁️",
            CompanionKind::Bunny => "🐰",
            CompanionKind::Bird => "🐦",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CompanionKind::Cat => "Cat",
            CompanionKind::Plant => "Plant",
            CompanionKind::Cloud => "Cloud",
            CompanionKind::Bunny => "Bunny",
            CompanionKind::Bird => "Bird",
        }
    }
}

impl std::fmt::Display for CompanionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Kind of AI writing suggestion attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Prompt for deeper reflection
    Reflection,
    /// Coping strategy
    Coping,
    /// Motivational note
    Motivation,
    /// Pointer to an external resource
    Resource,
}

impl SuggestionKind {
    /// Get the stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Reflection => "reflection",
            SuggestionKind::Coping => "coping",
            SuggestionKind::Motivation => "motivation",
            SuggestionKind::Resource => "resource",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
