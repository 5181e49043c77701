use serde::{Deserialize, Serialize};

use crate::format::strings;

/// A reciter (qori) from the recitations resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    pub id: u32,
    #[serde(default)]
    pub reciter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Reciter {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            reciter_name: name.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn style_kind(&self) -> RecitationStyle {
        match self.style.as_deref().map(str::to_lowercase).as_deref() {
            Some("murattal") => RecitationStyle::Murattal,
            Some("mujawwad") => RecitationStyle::Mujawwad,
            _ => RecitationStyle::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecitationStyle {
    Murattal,
    Mujawwad,
    Other,
}

/// Reciters split by recitation style, ready for a grouped picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReciterGroups {
    pub murattal: Vec<Reciter>,
    pub mujawwad: Vec<Reciter>,
    pub others: Vec<Reciter>,
}

impl ReciterGroups {
    pub fn partition(reciters: Vec<Reciter>) -> Self {
        let mut groups = Self::default();
        for reciter in reciters {
            match reciter.style_kind() {
                RecitationStyle::Murattal => groups.murattal.push(reciter),
                RecitationStyle::Mujawwad => groups.mujawwad.push(reciter),
                RecitationStyle::Other => groups.others.push(reciter),
            }
        }
        groups
    }

    /// Non-empty groups with their labels, in picker order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &[Reciter])> {
        [
            (strings::OTHER_RECITERS, self.others.as_slice()),
            ("Murattal", self.murattal.as_slice()),
            ("Mujawwad", self.mujawwad.as_slice()),
        ]
        .into_iter()
        .filter(|(_, reciters)| !reciters.is_empty())
    }

    pub fn find(&self, id: u32) -> Option<&Reciter> {
        self.others
            .iter()
            .chain(&self.murattal)
            .chain(&self.mujawwad)
            .find(|r| r.id == id)
    }
}

/// Audio file for a full chapter recitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub audio_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_by_style_ignoring_case() {
        let groups = ReciterGroups::partition(vec![
            Reciter::new(1, "AbdulBaset").with_style("Mujawwad"),
            Reciter::new(2, "AbdulBaset").with_style("murattal"),
            Reciter::new(3, "Al-Afasy"),
            Reciter::new(4, "Al-Husary").with_style("MURATTAL"),
            Reciter::new(5, "Minshawi").with_style("Muallim"),
        ]);

        let ids = |rs: &[Reciter]| rs.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(&groups.murattal), vec![2, 4]);
        assert_eq!(ids(&groups.mujawwad), vec![1]);
        assert_eq!(ids(&groups.others), vec![3, 5]);
    }

    #[test]
    fn test_sections_skip_empty_groups() {
        let groups = ReciterGroups::partition(vec![
            Reciter::new(2, "AbdulBaset").with_style("Murattal"),
            Reciter::new(3, "Al-Afasy"),
        ]);
        let labels: Vec<_> = groups.sections().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Pilih Qori yang anda inginkan", "Murattal"]);
    }

    #[test]
    fn test_find_by_id() {
        let groups = ReciterGroups::partition(vec![
            Reciter::new(7, "Al-Afasy").with_style("Murattal"),
        ]);
        assert_eq!(groups.find(7).map(|r| r.reciter_name.as_str()), Some("Al-Afasy"));
        assert!(groups.find(8).is_none());
    }
}
