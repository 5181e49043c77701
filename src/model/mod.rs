//! Core data model for Quran browsing.
//!
//! This module contains:
//! - Verse keys (`"chapter:verse"`) and verse records
//! - Chapter listing records and the chapter metadata lookup
//! - Juz records and validated juz numbers
//! - Reciters and chapter audio files

mod chapter;
mod juz;
mod reciter;
mod verse;
mod verse_key;

// Re-export chapter types
pub use chapter::{
    CHAPTER_COUNT, Chapter, ChapterDetails, ChapterInfo, TranslatedName, chapter_number,
    filter_chapters,
};

// Re-export juz types
pub use juz::{JUZ_COUNT, Juz, JuzNumber, unique_juzs};

// Re-export reciter types
pub use reciter::{AudioFile, RecitationStyle, Reciter, ReciterGroups};

// Re-export verse types
pub use verse::{TranslationRecord, Verse};
pub use verse_key::VerseKey;
