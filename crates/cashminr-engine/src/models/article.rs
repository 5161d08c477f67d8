use serde::{Deserialize, Serialize};

use crate::rendering::{self, ContentBlock};

/// Reading speed assumed when no stored read time is available.
const WORDS_PER_MINUTE: usize = 200;

/// Maximum length of a derived excerpt, in characters.
const EXCERPT_CHARS: usize = 160;

/// One article record, matching the camelCase JSON the content pipeline
/// produces.
///
/// `read_time` and `excerpt` are optional because older records carry
/// only a word count; both are derivable from the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Stored read time in minutes, when the record carries one.
    #[serde(default)]
    pub read_time: Option<u32>,
    /// Stored teaser text, when the record carries one.
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl Article {
    /// Whitespace-separated word count of the raw content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Stored read time, or an estimate from the word count (min 1).
    pub fn read_time_minutes(&self) -> u32 {
        self.read_time
            .unwrap_or_else(|| self.word_count().div_ceil(WORDS_PER_MINUTE).max(1) as u32)
    }

    /// Teaser text for list views: the stored excerpt, or the first
    /// paragraph of the rendered content truncated to a display length.
    pub fn display_excerpt(&self) -> String {
        if let Some(excerpt) = &self.excerpt {
            return excerpt.clone();
        }
        let blocks = rendering::render(&self.content);
        let first_paragraph = blocks
            .iter()
            .find_map(|block| match block {
                ContentBlock::Paragraph { text } => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or("");
        truncate_chars(first_paragraph, EXCERPT_CHARS)
    }
}

/// Cut `text` at `max` characters on a char boundary, with an ellipsis
/// when anything was dropped.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", text[..idx].trim_end()),
        None => text.to_string(),
    }
}
