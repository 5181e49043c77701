//! Response envelopes of the v4 endpoints.
//!
//! Missing list fields decode as empty lists.

use serde::Deserialize;

use crate::model::{AudioFile, Chapter, Juz, Reciter, TranslationRecord, Verse};

#[derive(Debug, Deserialize)]
pub(crate) struct VersesResponse {
    #[serde(default)]
    pub verses: Vec<Verse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChaptersResponse {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChapterResponse {
    pub chapter: Option<Chapter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JuzsResponse {
    #[serde(default)]
    pub juzs: Vec<Juz>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslationsResponse {
    #[serde(default)]
    pub translations: Vec<TranslationRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecitationsResponse {
    #[serde(default)]
    pub recitations: Vec<Reciter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChapterAudioResponse {
    pub audio_file: Option<AudioFile>,
}
