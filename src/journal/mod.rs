//! Journal entry domain types.

pub mod entry;
pub mod types;

pub use entry::{count_words, keyword_tags, AiSuggestion, JournalEntry, MAX_AI_SUGGESTIONS, MAX_TEXT_CHARS};
pub use types::{CompanionKind, CompanionMood, Mood, SuggestionKind};
