use serde::{Deserialize, Serialize};

use super::VerseKey;

/// A verse in Uthmani script, as returned by the verse endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub verse_key: VerseKey,
    #[serde(rename = "text_uthmani", default)]
    pub text: String,
}

impl Verse {
    pub fn new(verse_key: VerseKey, text: impl Into<String>) -> Self {
        Self {
            id: None,
            verse_key,
            text: text.into(),
        }
    }

    /// Chapter number taken from the verse key.
    pub const fn chapter(&self) -> u16 {
        self.verse_key.chapter
    }

    /// 1-based verse number within its chapter.
    pub const fn number(&self) -> u16 {
        self.verse_key.verse
    }
}

/// A single translation record.
///
/// The translation endpoints return these without the verse key when queried
/// per chapter, so callers pair them with verses by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u32>,
    #[serde(default)]
    pub text: String,
}
