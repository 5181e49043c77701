//! Section (juz) browsing.
//!
//! A juz cuts across chapter boundaries, so the flat verse list returned for
//! it is regrouped by chapter before rendering:
//!
//! - [`group_by_chapter`]: single-pass partition of verses into chapter groups,
//!   in first-occurrence order
//! - [`join_translations`]: concurrent per-verse translation lookups joined by
//!   verse key, with per-verse failure placeholders
//! - [`SectionView`]: generation-guarded state for the currently selected juz
//! - [`SectionController`]: drives a [`SectionView`] against a [`QuranApi`]
//!
//! [`QuranApi`]: crate::api::QuranApi

mod controller;
mod join;
mod view;

pub use controller::SectionController;
pub use join::{TranslationEntry, Translations, join_translations};
pub use view::{Phase, SectionSnapshot, SectionView, Ticket};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::format::range_label;
use crate::model::{Verse, VerseKey};

// ============================================================================
// Public Types
// ============================================================================

/// The verses of one chapter that fall inside a section, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterGroup {
    pub chapter: u16,
    pub verses: Vec<Verse>,
}

impl ChapterGroup {
    /// First and last verse numbers as ordered.
    ///
    /// Groups are never empty when built by [`group_by_chapter`].
    pub fn range(&self) -> (u16, u16) {
        let first = self.verses.first().map_or(0, Verse::number);
        let last = self.verses.last().map_or(0, Verse::number);
        (first, last)
    }

    /// `"Ayat a - b"` for this group.
    pub fn range_label(&self) -> String {
        if self.verses.is_empty() {
            return String::new();
        }
        range_label(self.range())
    }
}

/// Chapter groups keyed by chapter number, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterGroups {
    groups: IndexMap<u16, ChapterGroup>,
}

impl ChapterGroups {
    pub fn get(&self, chapter: u16) -> Option<&ChapterGroup> {
        self.groups.get(&chapter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterGroup> {
        self.groups.values()
    }

    /// Chapter numbers in group order.
    pub fn chapters(&self) -> impl Iterator<Item = u16> {
        self.groups.keys().copied()
    }

    /// Every verse key across all groups, in group order.
    pub fn verse_keys(&self) -> impl Iterator<Item = VerseKey> {
        self.iter()
            .flat_map(|group| group.verses.iter().map(|v| v.verse_key))
    }

    pub fn contains_key(&self, key: &VerseKey) -> bool {
        self.get(key.chapter)
            .is_some_and(|group| group.verses.iter().any(|v| v.verse_key == *key))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn verse_count(&self) -> usize {
        self.iter().map(|group| group.verses.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ChapterGroups {
    type Item = &'a ChapterGroup;
    type IntoIter = indexmap::map::Values<'a, u16, ChapterGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.values()
    }
}

impl Serialize for ChapterGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.groups.values())
    }
}

// ============================================================================
// Grouping
// ============================================================================

/// Partition verses by chapter.
///
/// Walks the input once. Each verse is appended to its chapter's group, which
/// is created on first occurrence, so groups come out in the order their
/// chapters first appear (a juz usually starts mid-chapter) and verses keep
/// their source order inside each group.
///
/// # Examples
///
/// ```
/// use quranhub::{Verse, VerseKey};
/// use quranhub::section::group_by_chapter;
///
/// let verses = vec![
///     Verse::new(VerseKey::new(2, 5), ""),
///     Verse::new(VerseKey::new(1, 1), ""),
///     Verse::new(VerseKey::new(2, 6), ""),
/// ];
/// let groups = group_by_chapter(verses);
/// assert_eq!(groups.chapters().collect::<Vec<_>>(), vec![2, 1]);
/// assert_eq!(groups.get(2).unwrap().range(), (5, 6));
/// ```
pub fn group_by_chapter(verses: impl IntoIterator<Item = Verse>) -> ChapterGroups {
    let mut groups: IndexMap<u16, ChapterGroup> = IndexMap::new();
    for verse in verses {
        let chapter = verse.chapter();
        groups
            .entry(chapter)
            .or_insert_with(|| ChapterGroup {
                chapter,
                verses: Vec::new(),
            })
            .verses
            .push(verse);
    }
    ChapterGroups { groups }
}

// ============================================================================
// Tests
// ============================================================================
