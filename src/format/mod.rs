//! Pure display helpers: numerals, verse ranges, footnote stripping.

pub mod strings;

use std::fmt;

use crate::model::Verse;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Write a number with Arabic-Indic digits.
///
/// Anything that is not an ASCII digit passes through unchanged.
///
/// # Examples
///
/// ```
/// use quranhub::format::arabic_numerals;
///
/// assert_eq!(arabic_numerals(7), "٧");
/// assert_eq!(arabic_numerals(286), "٢٨٦");
/// ```
pub fn arabic_numerals(n: impl fmt::Display) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ARABIC_INDIC_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// `"Ayat a - b"` for a first/last verse pair.
pub fn range_label((first, last): (u16, u16)) -> String {
    format!("Ayat {first} - {last}")
}

/// Range label for a run of verses, taken from the first and last as ordered.
///
/// Returns an empty string for an empty slice.
pub fn ayat_range(verses: &[Verse]) -> String {
    match (verses.first(), verses.last()) {
        (Some(first), Some(last)) => range_label((first.number(), last.number())),
        _ => String::new(),
    }
}

/// Remove `<sup …>…</sup>` footnote markers from translation text.
///
/// Each marker ends at the nearest closing tag. An opening tag without a
/// closing tag is left as is.
pub fn strip_footnotes(text: &str) -> String {
    const OPEN: &str = "<sup";
    const CLOSE: &str = "</sup>";

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let Some(len) = rest[start..].find(CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + len + CLOSE.len()..];
    }
    out.push_str(rest);
    out
}
