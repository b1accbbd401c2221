//! Journal entries, word counting, and keyword tag extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Mood, SuggestionKind};

/// Maximum entry length in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Only the most recent suggestions are kept per entry.
pub const MAX_AI_SUGGESTIONS: usize = 10;

/// Keyword table for automatic tag extraction.
const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("anxiety", &["anxious", "worry", "nervous", "stress", "panic"]),
    ("gratitude", &["grateful", "thankful", "appreciate", "blessed"]),
    ("family", &["family", "mom", "dad", "sibling", "parents"]),
    ("work", &["work", "job", "boss", "colleague", "meeting"]),
    ("school", &["school", "exam", "study", "homework", "class"]),
    ("friendship", &["friend", "friendship", "social", "hang out"]),
    ("health", &["health", "exercise", "tired", "energy", "sleep"]),
    ("relationship", &["relationship", "partner", "love", "date"]),
];

/// An AI writing suggestion attached to an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSuggestion {
    /// Kind of suggestion
    pub kind: SuggestionKind,
    /// Suggestion text
    pub content: String,
    /// When the suggestion was attached
    pub timestamp: DateTime<Utc>,
}

/// A single journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: Uuid,
    /// User who wrote the entry
    pub user_id: Uuid,
    /// Entry text
    pub text: String,
    /// Mood logged with the entry
    pub mood: Mood,
    /// Opaque doodle payload captured client-side, if any
    pub doodle: Option<String>,
    /// Tags, explicit plus extracted
    pub tags: Vec<String>,
    /// Whether the entry is private
    pub is_private: bool,
    /// Whitespace-token word count of the text
    pub word_count: u32,
    /// AI suggestions attached to the entry (most recent ten)
    pub ai_suggestions: Vec<AiSuggestion>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new entry, computing the word count and keyword tags.
    pub fn new(user_id: Uuid, text: String, mood: Mood, created_at: DateTime<Utc>) -> Self {
        let word_count = count_words(&text);
        let tags = keyword_tags(&text);

        Self {
            id: Uuid::new_v4(),
            user_id,
            text,
            mood,
            doodle: None,
            tags,
            is_private: true,
            word_count,
            ai_suggestions: Vec::new(),
            created_at,
        }
    }

    /// Merge keyword-extracted tags into the entry's tag list.
    ///
    /// Explicit tags keep their position; extracted tags are appended,
    /// duplicates dropped.
    pub fn extract_tags(&mut self) {
        for tag in keyword_tags(&self.text) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Recompute the word count after a text edit.
    pub fn refresh_word_count(&mut self) {
        self.word_count = count_words(&self.text);
    }

    /// Attach an AI suggestion, keeping only the most recent ten.
    pub fn add_ai_suggestion(
        &mut self,
        kind: SuggestionKind,
        content: String,
        timestamp: DateTime<Utc>,
    ) {
        self.ai_suggestions.push(AiSuggestion {
            kind,
            content,
            timestamp,
        });

        if self.ai_suggestions.len() > MAX_AI_SUGGESTIONS {
            let excess = self.ai_suggestions.len() - MAX_AI_SUGGESTIONS;
            self.ai_suggestions.drain(..excess);
        }
    }
}

/// Count whitespace-separated words in the trimmed text.
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Extract tags whose keywords occur in the lowercased text.
///
/// Tags come out in keyword-table order, each at most once.
pub fn keyword_tags(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    TAG_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(tag, _)| (*tag).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, 30, 0).unwrap()
    }

    #[test]
    fn test_word_count() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  felt calm   today  "), 3);
    }

    #[test]
    fn test_keyword_tags() {
        let tags = keyword_tags("Work was stressful and I could not sleep.");
        assert_eq!(tags, vec!["anxiety", "work", "health"]);

        assert!(keyword_tags("Nothing special happened.").is_empty());
    }

    #[test]
    fn test_new_entry_computes_words_and_tags() {
        let entry = JournalEntry::new(
            Uuid::new_v4(),
            "So grateful for my family today".to_string(),
            Mood::Grateful,
            at(9),
        );

        assert_eq!(entry.word_count, 6);
        assert_eq!(entry.tags, vec!["gratitude", "family"]);
        assert!(entry.is_private);
        assert!(entry.ai_suggestions.is_empty());
    }

    #[test]
    fn test_extract_tags_keeps_explicit_tags() {
        let mut entry = JournalEntry::new(
            Uuid::new_v4(),
            "Long day at work".to_string(),
            Mood::Neutral,
            at(20),
        );
        entry.tags = vec!["custom".to_string(), "work".to_string()];

        entry.extract_tags();

        assert_eq!(entry.tags, vec!["custom", "work"]);
    }

    #[test]
    fn test_ai_suggestions_capped_at_ten() {
        let mut entry = JournalEntry::new(
            Uuid::new_v4(),
            "hello".to_string(),
            Mood::Happy,
            at(8),
        );

        for i in 0..12 {
            entry.add_ai_suggestion(SuggestionKind::Reflection, format!("suggestion {i}"), at(8));
        }

        assert_eq!(entry.ai_suggestions.len(), MAX_AI_SUGGESTIONS);
        // Oldest two were dropped
        assert_eq!(entry.ai_suggestions[0].content, "suggestion 2");
        assert_eq!(entry.ai_suggestions[9].content, "suggestion 11");
    }
}
