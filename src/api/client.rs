use serde::de::DeserializeOwned;
use tracing::debug;

use super::QuranApi;
use super::config::ClientConfig;
use super::responses::{
    ChapterAudioResponse, ChapterResponse, ChaptersResponse, JuzsResponse, RecitationsResponse,
    TranslationsResponse, VersesResponse,
};
use crate::error::{Error, Result};
use crate::model::{AudioFile, Chapter, Juz, JuzNumber, Reciter, TranslationRecord, Verse, VerseKey};

/// HTTP implementation of [`QuranApi`] for the quran.com v4 API.
#[derive(Debug, Clone)]
pub struct QuranClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl QuranClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("quranhub/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path relative to the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    fn language(&self) -> [(&'static str, String); 1] {
        [("language", self.config.language.clone())]
    }

    fn translation_path(&self) -> String {
        format!("quran/translations/{}", self.config.translation_id)
    }
}

impl QuranApi for QuranClient {
    async fn juz_verses(&self, juz: JuzNumber) -> Result<Vec<Verse>> {
        let response: VersesResponse = self
            .get("quran/verses/uthmani", &[("juz_number", juz.to_string())])
            .await?;
        Ok(response.verses)
    }

    async fn chapter_verses(&self, chapter: u16) -> Result<Vec<Verse>> {
        let response: VersesResponse = self
            .get("quran/verses/uthmani", &[("chapter_number", chapter.to_string())])
            .await?;
        Ok(response.verses)
    }

    async fn chapters(&self) -> Result<Vec<Chapter>> {
        let response: ChaptersResponse = self.get("chapters", &self.language()).await?;
        Ok(response.chapters)
    }

    async fn chapter(&self, chapter: u16) -> Result<Chapter> {
        let response: ChapterResponse = self
            .get(&format!("chapters/{chapter}"), &self.language())
            .await?;
        response.chapter.ok_or(Error::MissingField("chapter"))
    }

    async fn juzs(&self) -> Result<Vec<Juz>> {
        let response: JuzsResponse = self.get("juzs", &self.language()).await?;
        Ok(response.juzs)
    }

    async fn verse_translation(&self, key: VerseKey) -> Result<Option<String>> {
        let response: TranslationsResponse = self
            .get(&self.translation_path(), &[("verse_key", key.to_string())])
            .await?;
        Ok(response.translations.into_iter().next().map(|t| t.text))
    }

    async fn chapter_translations(&self, chapter: u16) -> Result<Vec<TranslationRecord>> {
        let response: TranslationsResponse = self
            .get(&self.translation_path(), &[("chapter_number", chapter.to_string())])
            .await?;
        Ok(response.translations)
    }

    async fn reciters(&self) -> Result<Vec<Reciter>> {
        let response: RecitationsResponse = self.get("resources/recitations", &[]).await?;
        Ok(response.recitations)
    }

    async fn chapter_audio(&self, reciter: u32, chapter: u16) -> Result<Option<AudioFile>> {
        let response: ChapterAudioResponse = self
            .get(&format!("chapter_recitations/{reciter}/{chapter}"), &[])
            .await?;
        Ok(response.audio_file.filter(|file| !file.audio_url.is_empty()))
    }
}
