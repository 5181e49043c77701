//! Compound `"chapter:verse"` identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Address of a single verse, written `"<chapter>:<verse>"` on the wire.
///
/// # Examples
///
/// ```
/// use quranhub::VerseKey;
///
/// let key: VerseKey = "2:255".parse().unwrap();
/// assert_eq!(key.chapter, 2);
/// assert_eq!(key.verse, 255);
/// assert_eq!(key.to_string(), "2:255");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    pub const fn new(chapter: u16, verse: u16) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidVerseKey(s.to_string());

        let (chapter, verse) = s.split_once(':').ok_or_else(invalid)?;
        let chapter = parse_number(chapter).ok_or_else(invalid)?;
        let verse = parse_number(verse).ok_or_else(invalid)?;
        if chapter == 0 || verse == 0 {
            return Err(invalid());
        }

        Ok(Self { chapter, verse })
    }
}

/// Digits only; `u16::from_str` alone would also take a leading `+`.
fn parse_number(part: &str) -> Option<u16> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl Serialize for VerseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
