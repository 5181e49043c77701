use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of sections (juz).
pub const JUZ_COUNT: u8 = 30;

/// A validated juz number in `1..=30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JuzNumber(u8);

impl JuzNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(JUZ_COUNT);

    pub fn new(n: u32) -> Result<Self> {
        match u8::try_from(n) {
            Ok(n) if (1..=JUZ_COUNT).contains(&n) => Ok(Self(n)),
            _ => Err(Error::InvalidJuz(n)),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The preceding juz, or `None` at the first.
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The following juz, or `None` at the last.
    pub fn next(self) -> Option<Self> {
        (self.0 < JUZ_COUNT).then(|| Self(self.0 + 1))
    }
}

impl fmt::Display for JuzNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Juz record from the juz listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Juz {
    #[serde(default)]
    pub id: u32,
    pub juz_number: u8,
    #[serde(default)]
    pub verses_count: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_verse_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verse_id: Option<u32>,
    /// Chapter number to verse span, e.g. `"2" -> "142-252"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub verse_mapping: IndexMap<String, String>,
}

/// The juz listing repeats entries; keep one per juz number.
///
/// Later records replace earlier ones, and the result is in ascending juz order.
pub fn unique_juzs(juzs: Vec<Juz>) -> Vec<Juz> {
    let mut by_number = BTreeMap::new();
    for juz in juzs {
        by_number.insert(juz.juz_number, juz);
    }
    by_number.into_values().collect()
}
