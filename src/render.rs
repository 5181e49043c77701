//! Plain-text rendering of the view-models.
//!
//! Pure string building; the CLI decides where the output goes.

use std::fmt::Write;

use crate::format::{arabic_numerals, strings, strip_footnotes};
use crate::model::{Chapter, Juz, ReciterGroups};
use crate::reading::ChapterReading;
use crate::section::{Phase, SectionSnapshot};

/// Render a juz section: one block per chapter group, then navigation.
pub fn render_section(snapshot: &SectionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Juz {}", snapshot.juz);
    out.push('\n');

    if snapshot.phase == Phase::LoadingVerses {
        let _ = writeln!(out, "{}", strings::LOADING);
        push_navigation(&mut out, snapshot);
        return out;
    }

    let details = &snapshot.details;
    for group in &snapshot.groups {
        let chapter = group.chapter;
        let _ = write!(
            out,
            "{} - {}",
            details.arabic_name(chapter),
            details.simple_name(chapter)
        );
        match details.revelation_place(chapter) {
            "" => out.push('\n'),
            place => {
                let _ = writeln!(out, " ({place})");
            }
        }
        let _ = writeln!(out, "{}", group.range_label());
        out.push('\n');

        for verse in &group.verses {
            let translation = if snapshot.phase == Phase::LoadingTranslations {
                strings::LOADING_TRANSLATION.to_string()
            } else {
                strip_footnotes(snapshot.translations.text_for(&verse.verse_key))
            };
            push_verse(&mut out, verse.number(), &verse.text, &translation);
        }
    }

    push_navigation(&mut out, snapshot);
    out
}

fn push_navigation(out: &mut String, snapshot: &SectionSnapshot) {
    let mut links = Vec::with_capacity(2);
    if let Some(prev) = snapshot.juz.previous() {
        links.push(format!("< {} ({prev})", strings::PREVIOUS_JUZ));
    }
    if let Some(next) = snapshot.juz.next() {
        links.push(format!("{} ({next}) >", strings::NEXT_JUZ));
    }
    if !links.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}", links.join(" | "));
    }
}

fn push_verse(out: &mut String, number: u16, text: &str, translation: &str) {
    let _ = writeln!(out, "{:>4}  {text}", arabic_numerals(number));
    let _ = writeln!(out, "      {translation}");
    out.push('\n');
}

/// Render a whole chapter with its header.
pub fn render_reading(reading: &ChapterReading) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", reading.title());
    let _ = writeln!(out, "Arti: {}", reading.meaning());
    let _ = writeln!(out, "Tempat turun: {}", reading.revelation_place());
    if reading.chapter.verses_count > 0 {
        let _ = writeln!(out, "Jumlah ayat: {}", reading.chapter.verses_count);
    }
    out.push('\n');

    for verse in &reading.verses {
        push_verse(&mut out, verse.verse_key.verse, &verse.text, &verse.translation);
    }
    out
}

/// One line per chapter: number, simple name, Arabic name, verse count.
pub fn render_chapter_list<'a>(chapters: impl IntoIterator<Item = &'a Chapter>) -> String {
    let mut out = String::new();
    for chapter in chapters {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {:<12} {} ayat",
            chapter.id,
            chapter.name_simple.as_deref().unwrap_or_default(),
            chapter.name_arabic.as_deref().unwrap_or_default(),
            chapter.verses_count
        );
    }
    out
}

pub fn render_juz_list(juzs: &[Juz]) -> String {
    let mut out = String::new();
    for juz in juzs {
        let first = juz.verse_mapping.first();
        let last = juz.verse_mapping.last();
        let _ = write!(out, "Juz {:>2}: {} ayat", juz.juz_number, juz.verses_count);
        if let (Some((first_ch, first_range)), Some((last_ch, last_range))) = (first, last) {
            let start = first_range.split('-').next().unwrap_or(first_range);
            let end = last_range.rsplit('-').next().unwrap_or(last_range);
            let _ = write!(out, " ({first_ch}:{start} - {last_ch}:{end})");
        }
        out.push('\n');
    }
    out
}

/// Reciters under their group headings, in picker order.
pub fn render_reciters(groups: &ReciterGroups) -> String {
    let mut out = String::new();
    for (label, reciters) in groups.sections() {
        let _ = writeln!(out, "{label}");
        for reciter in reciters {
            let _ = writeln!(out, "  {:>4}  {}", reciter.id, reciter.reciter_name);
        }
    }
    out
}
