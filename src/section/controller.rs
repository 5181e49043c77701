use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::view::{SectionSnapshot, SectionView};
use super::join_translations;
use crate::api::QuranApi;
use crate::model::JuzNumber;

/// Loads juz selections into a shared [`SectionView`].
///
/// Several [`open`](Self::open) calls may be in flight at once (the reader
/// moved on before the previous juz finished loading); only the most recent
/// selection is ever committed.
#[derive(Debug)]
pub struct SectionController<A> {
    api: A,
    view: Mutex<SectionView>,
}

impl<A: QuranApi> SectionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: Mutex::new(SectionView::new()),
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Select `juz` and load it.
    ///
    /// Verses and the chapter listing are fetched concurrently; a failure of
    /// either is logged and treated as an empty result. Once the verses are
    /// grouped, every verse's translation is fetched and joined.
    ///
    /// Returns the committed state, or `None` if another selection replaced
    /// this one before it finished.
    pub async fn open(&self, juz: JuzNumber) -> Option<SectionSnapshot> {
        let ticket = self.lock().select(juz);

        let (verses, chapters) = futures::join!(self.api.juz_verses(juz), self.api.chapters());
        let verses = verses.unwrap_or_else(|err| {
            warn!(%juz, error = %err, "failed to fetch juz verses");
            Vec::new()
        });
        let chapters = chapters.unwrap_or_else(|err| {
            warn!(error = %err, "failed to fetch chapter listing");
            Vec::new()
        });

        let groups = {
            let mut view = self.lock();
            if !view.apply_verses(ticket, verses) {
                return None;
            }
            view.apply_chapters(ticket, &chapters);
            if view.groups().is_empty() {
                debug!(%juz, "section has no verses");
                return view.snapshot();
            }
            view.groups().clone()
        };

        let api = &self.api;
        let translations = join_translations(&groups, move |key| api.verse_translation(key)).await;

        let mut view = self.lock();
        if !view.apply_translations(ticket, translations) {
            return None;
        }
        debug!(%juz, chapters = groups.len(), verses = groups.verse_count(), "section ready");
        view.snapshot()
    }

    /// Current state, or `None` before the first selection.
    pub fn snapshot(&self) -> Option<SectionSnapshot> {
        self.lock().snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    fn lock(&self) -> MutexGuard<'_, SectionView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
