// file: src/models/outcome.rs
// description: successful outcomes of a search-driven scan
// reference: failures are carried separately as DetectorError

use crate::models::RankedMatch;
use serde::Serialize;

/// What a completed scan found. A scan that could not search at all is an
/// `Err`, never one of these variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The search ran and returned no candidate sources.
    NoSources,

    /// Sources were found but none scored above the threshold.
    NoMatches { checked: usize, skipped: usize },

    /// Sources scoring above the threshold, best first.
    Matches {
        checked: usize,
        skipped: usize,
        matches: Vec<RankedMatch>,
    },
}

impl ScanOutcome {
    pub fn matches(&self) -> &[RankedMatch] {
        match self {
            ScanOutcome::Matches { matches, .. } => matches,
            _ => &[],
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches().is_empty()
    }
}
