//! Choosing the most frequent words and giving each a font-size tier.
//!
//! Selection and display use two different orders.  Words are *selected* by
//! descending count, with ties going to the alphabetically **greater** word,
//! and then *displayed* in ascending alphabetical order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::count::FrequencyMap;
use crate::error::{CloudError, TooFewWords};

/// Tier of the least frequent selected words.
pub const MIN_TIER: u32 = 11;
/// Tier of the most frequent selected words.
pub const MAX_TIER: u32 = 47;

const TIER_SPAN: usize = 37;
const TIER_OFFSET: usize = 10;

/// One word of the finished cloud.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CloudEntry {
    /// The lowercased word.
    pub word: String,
    /// Occurrences in the document.
    pub count: usize,
    /// Font-size class in `MIN_TIER..=MAX_TIER`.
    pub tier: u32,
}

/// The selected words, alphabetised, with their tiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cloud {
    /// Selected entries in ascending word order.
    pub entries: Vec<CloudEntry>,
    /// Number of words asked for.
    pub requested: usize,
    /// Number of distinct words the document contained.
    pub available: usize,
    /// Total word occurrences in the document.
    pub occurrences: usize,
}

impl Cloud {
    /// Returns `true` if no word was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selected words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Smallest count among the selected words.
    #[must_use]
    pub fn min_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).min()
    }

    /// Largest count among the selected words.
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).max()
    }

    /// A warning when the document had some words, but fewer than requested.
    #[must_use]
    pub fn shortfall(&self) -> Option<TooFewWords> {
        (self.available > 0 && self.available < self.requested).then_some(TooFewWords {
            requested: self.requested,
            available: self.available,
        })
    }
}

/// Selection priority of two `(word, count)` pairs: higher count first, and
/// for equal counts the alphabetically greater word first.
///
/// Existing clouds depend on the tie rule; flipping it changes which words
/// fill the last slots.
#[must_use]
pub fn by_priority(a: (&str, usize), b: (&str, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0))
}

/// Every word of `freqs` in selection priority order.
#[must_use]
pub fn rank(freqs: &FrequencyMap) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = freqs.iter().collect();
    ranked.sort_by(|&a, &b| by_priority(a, b));
    ranked
}

/// Font-size tier for `count` given the selected range `min..=max`.
///
/// Words at the bottom of the range, or in a range where every count is the
/// same, get [`MIN_TIER`].  Otherwise the tier is
/// `ceil(37 * (count - min) / (max - min)) + 10`.
#[must_use]
pub fn tier(count: usize, min: usize, max: usize) -> u32 {
    if count > min && max > min {
        let scaled = (TIER_SPAN * (count - min)).div_ceil(max - min);
        (scaled + TIER_OFFSET) as u32
    } else {
        MIN_TIER
    }
}

/// Select up to `n` words from `freqs` and size them.
///
/// `freqs` is left untouched; the returned [`Cloud`] owns its own copy of the
/// selected words.
#[must_use]
pub fn build_cloud(freqs: &FrequencyMap, n: usize) -> Cloud {
    let selected: Vec<(&str, usize)> = rank(freqs).into_iter().take(n).collect();

    let mut entries: Vec<CloudEntry> = match (selected.first(), selected.last()) {
        (Some(&(_, max)), Some(&(_, min))) => selected
            .iter()
            .map(|&(word, count)| CloudEntry {
                word: word.to_owned(),
                count,
                tier: tier(count, min, max),
            })
            .collect(),
        _ => Vec::new(),
    };
    entries.sort_by(|a, b| a.word.cmp(&b.word));

    Cloud {
        entries,
        requested: n,
        available: freqs.len(),
        occurrences: freqs.total(),
    }
}

/// Parse the requested cloud size.
pub fn parse_word_count(value: &str) -> Result<usize, CloudError> {
    value
        .trim()
        .parse()
        .map_err(|_| CloudError::InvalidCount {
            value: value.to_owned(),
        })
}
