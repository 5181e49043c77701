use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::strings;

/// Number of chapters (surahs).
pub const CHAPTER_COUNT: u16 = 114;

/// Validate a user-supplied chapter number.
pub fn chapter_number(n: u32) -> Result<u16> {
    match u16::try_from(n) {
        Ok(ch) if (1..=CHAPTER_COUNT).contains(&ch) => Ok(ch),
        _ => Err(Error::InvalidChapter(n)),
    }
}

/// Chapter record from the chapter listing.
///
/// Every display field is optional; the API omits fields for some languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revelation_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_simple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_arabic: Option<String>,
    #[serde(default)]
    pub verses_count: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_name: Option<TranslatedName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl Chapter {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_names(mut self, simple: impl Into<String>, arabic: impl Into<String>) -> Self {
        self.name_simple = Some(simple.into());
        self.name_arabic = Some(arabic.into());
        self
    }

    pub fn with_revelation_place(mut self, place: impl Into<String>) -> Self {
        self.revelation_place = Some(place.into());
        self
    }

    pub fn with_verses_count(mut self, count: u16) -> Self {
        self.verses_count = count;
        self
    }

    pub fn with_translated_name(mut self, name: impl Into<String>) -> Self {
        self.translated_name = Some(TranslatedName {
            language_name: None,
            name: name.into(),
        });
        self
    }

    /// Case-insensitive substring match against the simple name.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name_simple
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    }
}

/// Chapters whose simple name contains `term`, ignoring case.
pub fn filter_chapters<'a>(chapters: &'a [Chapter], term: &str) -> Vec<&'a Chapter> {
    chapters.iter().filter(|ch| ch.matches(term)).collect()
}

/// Display metadata for one chapter, as shown above a chapter group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterInfo {
    pub arabic_name: String,
    pub simple_name: String,
    pub revelation_place: String,
    pub verses_count: u16,
}

impl From<&Chapter> for ChapterInfo {
    fn from(chapter: &Chapter) -> Self {
        Self {
            arabic_name: chapter.name_arabic.clone().unwrap_or_default(),
            simple_name: chapter.name_simple.clone().unwrap_or_default(),
            revelation_place: chapter
                .revelation_place
                .as_deref()
                .unwrap_or_default()
                .to_uppercase(),
            verses_count: chapter.verses_count,
        }
    }
}

/// Chapter metadata keyed by chapter number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChapterDetails {
    by_id: HashMap<u16, ChapterInfo>,
}

impl ChapterDetails {
    pub fn from_chapters(chapters: &[Chapter]) -> Self {
        Self {
            by_id: chapters.iter().map(|ch| (ch.id, ChapterInfo::from(ch))).collect(),
        }
    }

    pub fn get(&self, chapter: u16) -> Option<&ChapterInfo> {
        self.by_id.get(&chapter)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Arabic name, or the loading marker while the listing is unavailable.
    pub fn arabic_name(&self, chapter: u16) -> &str {
        self.get(chapter)
            .map(|info| info.arabic_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(strings::LOADING)
    }

    /// Simple name, falling back to "Surah N".
    pub fn simple_name(&self, chapter: u16) -> Cow<'_, str> {
        match self.get(chapter).map(|info| info.simple_name.as_str()) {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Owned(format!("Surah {chapter}")),
        }
    }

    pub fn revelation_place(&self, chapter: u16) -> &str {
        self.get(chapter)
            .map_or("", |info| info.revelation_place.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<Chapter> {
        vec![
            Chapter::new(1)
                .with_names("Al-Fatihah", "الفاتحة")
                .with_revelation_place("makkah")
                .with_verses_count(7),
            Chapter::new(2)
                .with_names("Al-Baqarah", "البقرة")
                .with_revelation_place("madinah")
                .with_verses_count(286),
            Chapter::new(3),
        ]
    }

    #[test]
    fn test_chapter_number_bounds() {
        assert_eq!(chapter_number(1).unwrap(), 1);
        assert_eq!(chapter_number(114).unwrap(), 114);
        assert!(matches!(chapter_number(0), Err(Error::InvalidChapter(0))));
        assert!(matches!(chapter_number(115), Err(Error::InvalidChapter(115))));
        assert!(chapter_number(70_000).is_err());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let chapters = listing();
        let found = filter_chapters(&chapters, "baq");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let found = filter_chapters(&chapters, "AL-");
        assert_eq!(found.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filter_empty_term_keeps_everything() {
        let chapters = listing();
        assert_eq!(filter_chapters(&chapters, "").len(), 3);
    }

    #[test]
    fn test_filter_skips_chapters_without_name() {
        let chapters = listing();
        assert!(filter_chapters(&chapters, "a").iter().all(|c| c.id != 3));
    }

    #[test]
    fn test_details_uppercase_revelation_place() {
        let details = ChapterDetails::from_chapters(&listing());
        assert_eq!(details.len(), 3);
        assert_eq!(details.revelation_place(1), "MAKKAH");
        assert_eq!(details.revelation_place(2), "MADINAH");
        assert_eq!(details.get(2).unwrap().verses_count, 286);
    }

    #[test]
    fn test_details_fallbacks() {
        let details = ChapterDetails::from_chapters(&listing());
        assert_eq!(details.arabic_name(1), "الفاتحة");
        assert_eq!(details.arabic_name(3), "Memuat...");
        assert_eq!(details.arabic_name(99), "Memuat...");
        assert_eq!(details.simple_name(2), "Al-Baqarah");
        assert_eq!(details.simple_name(99), "Surah 99");
        assert_eq!(details.revelation_place(99), "");
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let chapter: Chapter = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(chapter, Chapter::new(5));

        let chapter: Chapter = serde_json::from_str(
            r#"{"id": 1, "name_simple": "Al-Fatihah", "verses_count": 7,
                "translated_name": {"language_name": "indonesian", "name": "Pembukaan"}}"#,
        )
        .unwrap();
        assert_eq!(chapter.translated_name.unwrap().name, "Pembukaan");
    }
}
