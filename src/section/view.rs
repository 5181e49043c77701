//! Generation-guarded state for the selected juz.
//!
//! Every [`SectionView::select`] starts a new generation and hands out a
//! [`Ticket`]. Results are committed with the ticket they were requested
//! under; results carrying a ticket from an older generation are dropped, so
//! a slow response for a previous juz can never overwrite the current one.

use serde::Serialize;
use tracing::debug;

use super::{ChapterGroups, Translations, group_by_chapter};
use crate::model::{Chapter, ChapterDetails, JuzNumber, Verse};

/// Proof of which selection a pending result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    juz: JuzNumber,
}

impl Ticket {
    pub const fn juz(&self) -> JuzNumber {
        self.juz
    }
}

/// Loading progress of the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing selected yet.
    #[default]
    Idle,
    LoadingVerses,
    LoadingTranslations,
    Ready,
}

/// View-model state for one juz at a time.
#[derive(Debug, Default)]
pub struct SectionView {
    generation: u64,
    juz: Option<JuzNumber>,
    phase: Phase,
    groups: ChapterGroups,
    translations: Translations,
    details: ChapterDetails,
}

/// Owned copy of the view state, for rendering outside the lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSnapshot {
    pub juz: JuzNumber,
    pub phase: Phase,
    pub groups: ChapterGroups,
    pub translations: Translations,
    pub details: ChapterDetails,
}

impl SectionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Ready
    }
}

impl SectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `juz`, discarding everything from the previous selection.
    pub fn select(&mut self, juz: JuzNumber) -> Ticket {
        self.generation += 1;
        self.juz = Some(juz);
        self.phase = Phase::LoadingVerses;
        self.groups = ChapterGroups::default();
        self.translations = Translations::default();
        self.details = ChapterDetails::default();
        debug!(juz = %juz, generation = self.generation, "selected section");

        Ticket {
            generation: self.generation,
            juz,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.juz == Some(ticket.juz)
    }

    /// Commit the verses fetched for `ticket`, grouped by chapter.
    ///
    /// Returns `false` (and changes nothing) if the ticket is stale.
    pub fn apply_verses(&mut self, ticket: Ticket, verses: Vec<Verse>) -> bool {
        if !self.accept(ticket, "verses") {
            return false;
        }
        self.groups = group_by_chapter(verses);
        self.translations = Translations::default();
        self.phase = if self.groups.is_empty() {
            Phase::Ready
        } else {
            Phase::LoadingTranslations
        };
        true
    }

    /// Commit the chapter listing used to label groups.
    pub fn apply_chapters(&mut self, ticket: Ticket, chapters: &[Chapter]) -> bool {
        if !self.accept(ticket, "chapters") {
            return false;
        }
        self.details = ChapterDetails::from_chapters(chapters);
        true
    }

    /// Commit joined translations and finish loading.
    ///
    /// Entries for verses outside the current groups are dropped.
    pub fn apply_translations(&mut self, ticket: Ticket, mut translations: Translations) -> bool {
        if !self.accept(ticket, "translations") {
            return false;
        }
        translations.retain(|key| self.groups.contains_key(key));
        self.translations = translations;
        self.phase = Phase::Ready;
        true
    }

    fn accept(&self, ticket: Ticket, what: &str) -> bool {
        let current = self.is_current(ticket);
        if !current {
            debug!(
                juz = %ticket.juz,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale {what}"
            );
        }
        current
    }

    pub const fn juz(&self) -> Option<JuzNumber> {
        self.juz
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::LoadingVerses | Phase::LoadingTranslations)
    }

    pub const fn groups(&self) -> &ChapterGroups {
        &self.groups
    }

    pub const fn translations(&self) -> &Translations {
        &self.translations
    }

    pub const fn details(&self) -> &ChapterDetails {
        &self.details
    }

    /// Copy of the current state, or `None` before the first selection.
    pub fn snapshot(&self) -> Option<SectionSnapshot> {
        Some(SectionSnapshot {
            juz: self.juz?,
            phase: self.phase,
            groups: self.groups.clone(),
            translations: self.translations.clone(),
            details: self.details.clone(),
        })
    }
}
