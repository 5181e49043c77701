//! In-memory `QuranApi` shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::oneshot;

use quranhub::model::{AudioFile, Chapter, Juz, JuzNumber, Reciter, TranslationRecord, Verse, VerseKey};
use quranhub::{Error, QuranApi, Result};

/// Canned answer for one verse's translation lookup.
#[derive(Debug, Clone)]
pub enum Lookup {
    Text(&'static str),
    Empty,
    Fail,
}

fn offline() -> Error {
    Error::Io(std::io::Error::other("offline"))
}

#[derive(Debug, Default)]
pub struct MockApi {
    pub juz_verses: HashMap<u8, Vec<Verse>>,
    pub chapter_verses: HashMap<u16, Vec<Verse>>,
    pub chapters: Vec<Chapter>,
    pub juzs: Vec<Juz>,
    pub reciters: Vec<Reciter>,
    pub lookups: HashMap<VerseKey, Lookup>,
    pub chapter_translations: HashMap<u16, Vec<TranslationRecord>>,
    pub audio: HashMap<(u32, u16), AudioFile>,
    pub fail_chapters: bool,
    pub fail_verses: bool,
    pub fail_chapter_translations: bool,
    gates: Mutex<HashMap<u8, oneshot::Receiver<()>>>,
    translation_gates: Mutex<HashMap<VerseKey, oneshot::Receiver<()>>>,
    pub translation_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_juz(mut self, juz: u8, keys: &[(u16, u16)]) -> Self {
        let verses = keys
            .iter()
            .map(|&(c, v)| Verse::new(VerseKey::new(c, v), format!("arabic {c}:{v}")))
            .collect();
        self.juz_verses.insert(juz, verses);
        self
    }

    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    pub fn with_lookup(mut self, chapter: u16, verse: u16, lookup: Lookup) -> Self {
        self.lookups.insert(VerseKey::new(chapter, verse), lookup);
        self
    }

    /// Hold `juz`'s verse fetch until the returned sender fires.
    pub fn gate(&self, juz: u8) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(juz, rx);
        tx
    }

    /// Hold the translation lookup for one verse until the returned sender fires.
    pub fn gate_translation(&self, chapter: u16, verse: u16) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.translation_gates
            .lock()
            .unwrap()
            .insert(VerseKey::new(chapter, verse), rx);
        tx
    }

    pub fn translation_calls(&self) -> usize {
        self.translation_calls.load(Ordering::SeqCst)
    }
}

impl QuranApi for MockApi {
    async fn juz_verses(&self, juz: JuzNumber) -> Result<Vec<Verse>> {
        let gate = self.gates.lock().unwrap().remove(&juz.get());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail_verses {
            return Err(offline());
        }
        Ok(self.juz_verses.get(&juz.get()).cloned().unwrap_or_default())
    }

    async fn chapter_verses(&self, chapter: u16) -> Result<Vec<Verse>> {
        if self.fail_verses {
            return Err(offline());
        }
        Ok(self.chapter_verses.get(&chapter).cloned().unwrap_or_default())
    }

    async fn chapters(&self) -> Result<Vec<Chapter>> {
        if self.fail_chapters {
            return Err(offline());
        }
        Ok(self.chapters.clone())
    }

    async fn chapter(&self, chapter: u16) -> Result<Chapter> {
        if self.fail_chapters {
            return Err(offline());
        }
        self.chapters
            .iter()
            .find(|c| c.id == chapter)
            .cloned()
            .ok_or(Error::MissingField("chapter"))
    }

    async fn juzs(&self) -> Result<Vec<Juz>> {
        Ok(self.juzs.clone())
    }

    async fn verse_translation(&self, key: VerseKey) -> Result<Option<String>> {
        self.translation_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.translation_gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        match self.lookups.get(&key) {
            Some(Lookup::Text(text)) => Ok(Some(text.to_string())),
            Some(Lookup::Empty) | None => Ok(None),
            Some(Lookup::Fail) => Err(offline()),
        }
    }

    async fn chapter_translations(&self, chapter: u16) -> Result<Vec<TranslationRecord>> {
        if self.fail_chapter_translations {
            return Err(offline());
        }
        Ok(self.chapter_translations.get(&chapter).cloned().unwrap_or_default())
    }

    async fn reciters(&self) -> Result<Vec<Reciter>> {
        Ok(self.reciters.clone())
    }

    async fn chapter_audio(&self, reciter: u32, chapter: u16) -> Result<Option<AudioFile>> {
        Ok(self.audio.get(&(reciter, chapter)).cloned())
    }
}
