//! The parse result and its merge engine.

use super::{Language, MediaType, Resolution, Source, TriState};

/// Structured metadata extracted from a release name.
///
/// Every field has an "unset" sentinel (empty string, `0`, `None` or
/// `Unknown`). The same type doubles as the caller's override set: any field
/// left at its sentinel is "not overridden".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Space-joined token prefix before the first year/season/episode marker
    pub title: String,
    pub media_type: MediaType,
    /// Release year, `0` when absent
    pub year: u16,
    /// Season number, `0` when absent (or the specials season)
    pub season: u16,
    pub episode1: u16,
    /// Second episode of a dual-episode file (`E01E02`)
    pub episode2: u16,
    pub special: TriState,
    pub resolution: Resolution,
    pub source: Source,
    pub language: Language,
    pub remux: TriState,
    pub proper: TriState,
    pub dual_language: TriState,
}

impl ParseResult {
    /// Create an empty result with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field of `self` for which `other` carries a value.
    ///
    /// Merging a result into itself leaves it unchanged.
    pub fn merge_in(&mut self, other: &ParseResult) {
        if !other.title.is_empty() {
            self.title.clone_from(&other.title);
        }
        if other.media_type != MediaType::Unknown {
            self.media_type = other.media_type;
        }
        if other.year != 0 {
            self.year = other.year;
        }
        if other.season != 0 {
            self.season = other.season;
        }
        if other.episode1 != 0 {
            self.episode1 = other.episode1;
        }
        if other.episode2 != 0 {
            self.episode2 = other.episode2;
        }
        if other.special.is_set() {
            self.special = other.special;
        }
        if other.resolution.is_set() {
            self.resolution = other.resolution;
        }
        if other.source.is_set() {
            self.source = other.source;
        }
        if other.language.is_set() {
            self.language = other.language;
        }
        if other.remux.is_set() {
            self.remux = other.remux;
        }
        if other.proper.is_set() {
            self.proper = other.proper;
        }
        if other.dual_language.is_set() {
            self.dual_language = other.dual_language;
        }
    }

    /// Number of populated fields.
    ///
    /// Only used to rank competing fallback season/episode candidates.
    pub fn score(&self) -> usize {
        [
            !self.title.is_empty(),
            self.media_type != MediaType::Unknown,
            self.year != 0,
            self.season != 0,
            self.episode1 != 0,
            self.resolution.is_set(),
            self.source.is_set(),
            self.language.is_set(),
            self.remux.is_set(),
            self.proper.is_set(),
            self.dual_language.is_set(),
            self.special.is_set(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }

    /// Technical attribute suffix, e.g. `German.1080p.DL.Blu-ray.Remux`.
    ///
    /// Unset attributes are skipped; an empty string means nothing is known.
    pub fn version_info(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);
        if self.language.is_set() {
            parts.push(self.language.to_string());
        }
        if self.resolution.is_set() {
            parts.push(self.resolution.to_string());
        }
        if self.dual_language.is_true() {
            parts.push("DL".to_string());
        }
        if self.source.is_set() {
            parts.push(self.source.to_string());
        }
        if self.remux.is_true() {
            parts.push("Remux".to_string());
        }
        parts.join(".")
    }

    /// A real season number contradicts a specials marker.
    pub(crate) fn apply_plausibility(&mut self) {
        if self.season > 0 && self.special.is_true() {
            self.special = TriState::False;
        }
    }

    pub fn is_movie(&self) -> bool {
        self.media_type == MediaType::Movie
    }

    pub fn is_tv(&self) -> bool {
        self.media_type == MediaType::Tv
    }
}
