//! # quranhub
//!
//! A Quran reader library and CLI for the quran.com v4 API.
//!
//! ## Features
//!
//! - Browse a juz with its verses regrouped by chapter, in reading order
//! - Per-verse translations fetched concurrently, with placeholders for
//!   lookups that fail or come back empty
//! - Whole-chapter reading with footnote-free translations
//! - Chapter search, juz listing, reciters grouped by recitation style, and
//!   chapter audio lookup
//!
//! ## Quick Start
//!
//! ```no_run
//! use quranhub::{ClientConfig, JuzNumber, QuranClient, SectionController};
//!
//! # async fn run() -> quranhub::Result<()> {
//! let client = QuranClient::new(ClientConfig::default())?;
//! let sections = SectionController::new(client);
//!
//! if let Some(section) = sections.open(JuzNumber::new(30)?).await {
//!     print!("{}", quranhub::render::render_section(&section));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Grouping Verses
//!
//! [`group_by_chapter`] is a pure function and works on any verse list:
//!
//! ```
//! use quranhub::{Verse, VerseKey, group_by_chapter};
//!
//! let groups = group_by_chapter(vec![
//!     Verse::new(VerseKey::new(1, 7), "..."),
//!     Verse::new(VerseKey::new(2, 1), "..."),
//!     Verse::new(VerseKey::new(2, 2), "..."),
//! ]);
//! assert_eq!(groups.chapters().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(groups.get(2).unwrap().range_label(), "Ayat 1 - 2");
//! ```

pub mod api;
pub mod error;
pub mod format;
pub mod model;
pub mod reading;
pub mod render;
pub mod section;

pub use api::{ClientConfig, QuranApi, QuranClient};
pub use error::{Error, Result};
pub use model::{
    AudioFile, Chapter, ChapterDetails, Juz, JuzNumber, Reciter, ReciterGroups, TranslationRecord,
    Verse, VerseKey,
};
pub use reading::{ChapterReading, ReadingVerse, chapter_audio_url};
pub use section::{
    ChapterGroup, ChapterGroups, SectionController, SectionSnapshot, SectionView, TranslationEntry,
    Translations, group_by_chapter, join_translations,
};
