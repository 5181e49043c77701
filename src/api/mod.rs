//! Access to the quran.com v4 REST API.
//!
//! [`QuranApi`] is the seam between the view-models and the network: the
//! section and chapter views only ever talk to this trait, and
//! [`QuranClient`] implements it over HTTP. Tests substitute an in-memory
//! implementation.

mod client;
mod config;
mod responses;

pub use client::QuranClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TRANSLATION_ID};

use std::future::Future;

use crate::error::Result;
use crate::model::{AudioFile, Chapter, Juz, JuzNumber, Reciter, TranslationRecord, Verse, VerseKey};

/// The remote collaborators used by the view-models.
pub trait QuranApi {
    /// Verses of a juz in reading order (`quran/verses/uthmani?juz_number=N`).
    fn juz_verses(&self, juz: JuzNumber) -> impl Future<Output = Result<Vec<Verse>>>;

    /// Verses of a chapter in reading order.
    fn chapter_verses(&self, chapter: u16) -> impl Future<Output = Result<Vec<Verse>>>;

    /// The full chapter listing.
    fn chapters(&self) -> impl Future<Output = Result<Vec<Chapter>>>;

    /// A single chapter's metadata.
    fn chapter(&self, chapter: u16) -> impl Future<Output = Result<Chapter>>;

    /// The juz listing, which may repeat entries (see [`crate::model::unique_juzs`]).
    fn juzs(&self) -> impl Future<Output = Result<Vec<Juz>>>;

    /// Translation text of one verse, or `None` when the resource has none.
    fn verse_translation(&self, key: VerseKey) -> impl Future<Output = Result<Option<String>>>;

    /// Translations of a whole chapter, in verse order.
    fn chapter_translations(
        &self,
        chapter: u16,
    ) -> impl Future<Output = Result<Vec<TranslationRecord>>>;

    /// All available reciters.
    fn reciters(&self) -> impl Future<Output = Result<Vec<Reciter>>>;

    /// Full-chapter audio for a reciter, or `None` when there is no usable URL.
    fn chapter_audio(
        &self,
        reciter: u32,
        chapter: u16,
    ) -> impl Future<Output = Result<Option<AudioFile>>>;
}
