//! Per-verse translation join.

use std::collections::{BTreeMap, HashSet};
use std::future::Future;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use super::ChapterGroups;
use crate::error::Result;
use crate::format::strings;
use crate::model::VerseKey;

/// Outcome of one verse's translation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum TranslationEntry {
    Text(String),
    /// The lookup succeeded with no translation for the verse.
    NotFound,
    /// The lookup itself failed.
    FailedToLoad,
}

impl TranslationEntry {
    /// Text to display, with placeholders for the failure cases.
    pub fn display_text(&self) -> &str {
        match self {
            TranslationEntry::Text(text) => text,
            TranslationEntry::NotFound => strings::TRANSLATION_NOT_FOUND,
            TranslationEntry::FailedToLoad => strings::TRANSLATION_FAILED,
        }
    }

    pub const fn is_text(&self) -> bool {
        matches!(self, TranslationEntry::Text(_))
    }
}

/// Translation entries keyed by verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<VerseKey, TranslationEntry>,
}

impl Translations {
    pub fn get(&self, key: &VerseKey) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// Display text for a verse; verses with no entry read as unavailable.
    pub fn text_for(&self, key: &VerseKey) -> &str {
        self.get(key)
            .map_or(strings::TRANSLATION_UNAVAILABLE, TranslationEntry::display_text)
    }

    pub fn insert(&mut self, key: VerseKey, entry: TranslationEntry) {
        self.entries.insert(key, entry);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&VerseKey) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    pub fn keys(&self) -> impl Iterator<Item = &VerseKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VerseKey, &TranslationEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(VerseKey, TranslationEntry)> for Translations {
    fn from_iter<I: IntoIterator<Item = (VerseKey, TranslationEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Fetch a translation for every verse in `groups` and join them by key.
///
/// One lookup is issued per unique verse key and all of them run at once.
/// The result is returned only after every lookup has settled. A lookup that
/// yields no text becomes [`TranslationEntry::NotFound`] and one that errors
/// becomes [`TranslationEntry::FailedToLoad`]; neither affects other verses,
/// so every verse key in `groups` ends up with exactly one entry.
pub async fn join_translations<F, Fut>(groups: &ChapterGroups, fetch_one: F) -> Translations
where
    F: Fn(VerseKey) -> Fut,
    Fut: Future<Output = Result<Option<String>>>,
{
    let mut seen = HashSet::new();
    let lookups = groups
        .verse_keys()
        .filter(|key| seen.insert(*key))
        .map(|key| {
            let lookup = fetch_one(key);
            async move {
                let entry = match lookup.await {
                    Ok(Some(text)) if !text.trim().is_empty() => TranslationEntry::Text(text),
                    Ok(_) => {
                        debug!(%key, "no translation for verse");
                        TranslationEntry::NotFound
                    }
                    Err(err) => {
                        warn!(%key, error = %err, "translation lookup failed");
                        TranslationEntry::FailedToLoad
                    }
                };
                (key, entry)
            }
        })
        .collect::<Vec<_>>();

    debug!(count = lookups.len(), "joining verse translations");
    join_all(lookups).await.into_iter().collect()
}
