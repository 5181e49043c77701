//! Single-chapter (surah) reading view.
//!
//! Unlike a juz, a chapter's translations come back in one request as a list
//! in verse order with no verse keys, so verses and translations are paired
//! by position.

use serde::Serialize;
use tracing::warn;

use crate::api::QuranApi;
use crate::error::{Error, Result};
use crate::format::{strings, strip_footnotes};
use crate::model::{Chapter, TranslationRecord, Verse, VerseKey};

/// A verse with the translation shown beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingVerse {
    pub verse_key: VerseKey,
    pub text: String,
    pub translation: String,
}

/// Everything needed to display one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterReading {
    pub chapter: Chapter,
    pub verses: Vec<ReadingVerse>,
}

impl ChapterReading {
    /// Pair verse `i` with translation `i`.
    ///
    /// Footnote markers are removed from the translations; verses past the end
    /// of the translation list, or with blank translations, read as
    /// unavailable.
    pub fn new(chapter: Chapter, verses: Vec<Verse>, translations: Vec<TranslationRecord>) -> Self {
        let mut translations = translations.into_iter();
        let verses = verses
            .into_iter()
            .map(|verse| {
                let translation = translations
                    .next()
                    .map(|record| strip_footnotes(&record.text))
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| strings::TRANSLATION_UNAVAILABLE.to_string());
                ReadingVerse {
                    verse_key: verse.verse_key,
                    text: verse.text,
                    translation,
                }
            })
            .collect();

        Self { chapter, verses }
    }

    /// Fetch a chapter's metadata, verses and translations concurrently.
    ///
    /// A failed verse fetch is returned as an error. Missing metadata or
    /// translations are logged and degrade to the display fallbacks.
    pub async fn load<A: QuranApi>(api: &A, chapter: u16) -> Result<Self> {
        let (meta, verses, translations) = futures::join!(
            api.chapter(chapter),
            api.chapter_verses(chapter),
            api.chapter_translations(chapter),
        );

        let meta = meta.unwrap_or_else(|err| {
            warn!(chapter, error = %err, "failed to fetch chapter metadata");
            Chapter::new(chapter)
        });
        let translations = translations.unwrap_or_else(|err| {
            warn!(chapter, error = %err, "failed to fetch chapter translation");
            Vec::new()
        });

        Ok(Self::new(meta, verses?, translations))
    }

    /// `"<arabic name> - <simple name>"`.
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.chapter.name_arabic.as_deref().unwrap_or_default(),
            self.chapter.name_simple.as_deref().unwrap_or_default()
        )
    }

    /// Translated chapter name.
    pub fn meaning(&self) -> &str {
        self.chapter
            .translated_name
            .as_ref()
            .map(|name| name.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(strings::MEANING_UNAVAILABLE)
    }

    pub fn revelation_place(&self) -> &str {
        self.chapter
            .revelation_place
            .as_deref()
            .filter(|place| !place.is_empty())
            .unwrap_or(strings::PLACE_UNKNOWN)
    }
}

/// Audio URL of a full-chapter recitation by the chosen reciter.
///
/// Fails with [`Error::NoReciterSelected`] when no reciter is chosen; returns
/// `None` when the reciter has no audio for the chapter.
pub async fn chapter_audio_url<A: QuranApi>(
    api: &A,
    reciter: Option<u32>,
    chapter: u16,
) -> Result<Option<String>> {
    let reciter = reciter.ok_or(Error::NoReciterSelected)?;
    Ok(api
        .chapter_audio(reciter, chapter)
        .await?
        .map(|file| file.audio_url))
}
