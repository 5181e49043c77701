//! Chapter reading and catalog tests.

mod common;

use common::MockApi;
use quranhub::model::{
    AudioFile, Chapter, Juz, Reciter, ReciterGroups, TranslationRecord, Verse, VerseKey,
    filter_chapters, unique_juzs,
};
use quranhub::{ChapterReading, Error, QuranApi, chapter_audio_url, render};

fn ikhlas() -> MockApi {
    let mut api = MockApi::new().with_chapter(
        Chapter::new(112)
            .with_names("Al-Ikhlas", "الإخلاص")
            .with_revelation_place("makkah")
            .with_verses_count(4)
            .with_translated_name("Ikhlas"),
    );
    api.chapter_verses.insert(
        112,
        (1..=4)
            .map(|v| Verse::new(VerseKey::new(112, v), format!("ayat {v}")))
            .collect(),
    );
    api.chapter_translations.insert(
        112,
        vec![
            TranslationRecord {
                resource_id: Some(33),
                text: "Katakanlah (Muhammad), “Dialah Allah, Yang Maha Esa.<sup foot_note=1>1</sup>"
                    .into(),
            },
            TranslationRecord {
                resource_id: Some(33),
                text: "Allah tempat meminta segala sesuatu.".into(),
            },
        ],
    );
    api
}

// ============================================================================
// Chapter Reading Tests
// ============================================================================

#[tokio::test]
async fn test_load_pairs_translations_in_order() {
    let reading = ChapterReading::load(&ikhlas(), 112).await.unwrap();

    assert_eq!(reading.title(), "الإخلاص - Al-Ikhlas");
    assert_eq!(reading.meaning(), "Ikhlas");
    assert_eq!(reading.revelation_place(), "makkah");
    assert_eq!(reading.verses.len(), 4);
    assert_eq!(
        reading.verses[0].translation,
        "Katakanlah (Muhammad), “Dialah Allah, Yang Maha Esa."
    );
    assert_eq!(reading.verses[1].translation, "Allah tempat meminta segala sesuatu.");
    assert_eq!(reading.verses[3].translation, "Terjemahan tidak tersedia.");
}

#[tokio::test]
async fn test_load_tolerates_translation_failure() {
    let mut api = ikhlas();
    api.fail_chapter_translations = true;

    let reading = ChapterReading::load(&api, 112).await.unwrap();
    assert_eq!(reading.verses.len(), 4);
    assert!(
        reading
            .verses
            .iter()
            .all(|v| v.translation == "Terjemahan tidak tersedia.")
    );
}

#[tokio::test]
async fn test_load_tolerates_missing_metadata() {
    let reading = ChapterReading::load(&ikhlas(), 113).await.unwrap();
    assert_eq!(reading.chapter.id, 113);
    assert_eq!(reading.meaning(), "Tidak tersedia");
    assert_eq!(reading.revelation_place(), "Tidak diketahui");
    assert!(reading.verses.is_empty());
}

#[tokio::test]
async fn test_load_propagates_verse_failure() {
    let mut api = ikhlas();
    api.fail_verses = true;
    assert!(matches!(
        ChapterReading::load(&api, 112).await,
        Err(Error::Io(_))
    ));
}

#[tokio::test]
async fn test_rendered_reading_has_no_footnotes() {
    let reading = ChapterReading::load(&ikhlas(), 112).await.unwrap();
    let out = render::render_reading(&reading);
    assert!(!out.contains("<sup"));
    assert!(out.contains("Jumlah ayat: 4"));
}

// ============================================================================
// Audio Tests
// ============================================================================

#[tokio::test]
async fn test_audio_requires_reciter() {
    let err = chapter_audio_url(&ikhlas(), None, 112).await.unwrap_err();
    assert!(matches!(err, Error::NoReciterSelected));
    assert_eq!(err.user_message(), "Silakan pilih qori terlebih dahulu.");
}

#[tokio::test]
async fn test_audio_url_for_reciter() {
    let mut api = ikhlas();
    api.audio.insert(
        (7, 112),
        AudioFile {
            id: Some(1),
            chapter_id: Some(112),
            file_size: None,
            format: Some("mp3".into()),
            audio_url: "https://download.quranicaudio.com/qdc/mishari/112.mp3".into(),
        },
    );

    assert_eq!(
        chapter_audio_url(&api, Some(7), 112).await.unwrap().as_deref(),
        Some("https://download.quranicaudio.com/qdc/mishari/112.mp3")
    );
    assert_eq!(chapter_audio_url(&api, Some(8), 112).await.unwrap(), None);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_search_chapter_listing() {
    let api = ikhlas()
        .with_chapter(Chapter::new(113).with_names("Al-Falaq", "الفلق"))
        .with_chapter(Chapter::new(114).with_names("An-Nas", "الناس"));
    let chapters = api.chapters().await.unwrap();

    let ids = |term| {
        filter_chapters(&chapters, term)
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids("AL-"), vec![112, 113]);
    assert_eq!(ids("nas"), vec![114]);
    assert!(ids("yasin").is_empty());
}

#[tokio::test]
async fn test_juz_listing_is_deduplicated() {
    let mut api = MockApi::new();
    api.juzs = [(1, 1), (2, 2), (31, 1), (32, 2), (3, 3)]
        .into_iter()
        .map(|(id, number)| Juz {
            id,
            juz_number: number,
            ..Default::default()
        })
        .collect();

    let juzs = unique_juzs(api.juzs().await.unwrap());
    assert_eq!(
        juzs.iter().map(|j| (j.juz_number, j.id)).collect::<Vec<_>>(),
        vec![(1, 31), (2, 32), (3, 3)]
    );
}

#[tokio::test]
async fn test_reciters_grouped_by_style() {
    let mut api = MockApi::new();
    api.reciters = vec![
        Reciter::new(1, "AbdulBaset AbdulSamad").with_style("Mujawwad"),
        Reciter::new(2, "AbdulBaset AbdulSamad").with_style("Murattal"),
        Reciter::new(7, "Mishari Rashid al-`Afasy"),
    ];

    let groups = ReciterGroups::partition(api.reciters().await.unwrap());
    let labels: Vec<_> = groups.sections().map(|(label, r)| (label, r.len())).collect();
    assert_eq!(
        labels,
        vec![("Pilih Qori yang anda inginkan", 1), ("Murattal", 1), ("Mujawwad", 1)]
    );
    assert_eq!(groups.find(2).unwrap().style.as_deref(), Some("Murattal"));
}
