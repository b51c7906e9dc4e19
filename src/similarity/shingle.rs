// file: src/similarity/shingle.rs
// description: k-shingle sets built from token sequences
// reference: w-shingling over word tokens

use crate::error::{DetectorError, Result};
use std::collections::HashSet;
use std::fmt;

/// Validated shingle width. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShingleSize(usize);

impl ShingleSize {
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(DetectorError::InvalidParameter(
                "shingle size must be at least 1".to_string(),
            ));
        }
        Ok(Self(k))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ShingleSize {
    fn default() -> Self {
        Self(super::DEFAULT_SHINGLE_SIZE)
    }
}

impl fmt::Display for ShingleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of contiguous token tuples borrowed from a token sequence.
///
/// A sequence shorter than `k` (but not empty) yields a single shingle
/// holding every token, so short texts can still match each other.
#[derive(Debug, Clone)]
pub struct ShingleSet<'a> {
    size: ShingleSize,
    shingles: HashSet<&'a [String]>,
}

impl<'a> ShingleSet<'a> {
    pub fn build(tokens: &'a [String], size: ShingleSize) -> Self {
        let k = size.get();
        let shingles = if tokens.is_empty() {
            HashSet::new()
        } else if tokens.len() < k {
            HashSet::from([tokens])
        } else {
            tokens.windows(k).collect()
        };

        Self { size, shingles }
    }

    pub fn size(&self) -> ShingleSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    pub fn contains(&self, shingle: &[String]) -> bool {
        self.shingles.contains(shingle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [String]> + '_ {
        self.shingles.iter().copied()
    }

    /// Number of shingles present in both sets.
    pub fn intersection_len(&self, other: &ShingleSet<'_>) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|s| large.contains(s)).count()
    }

    /// Number of distinct shingles present in either set.
    pub fn union_len(&self, other: &ShingleSet<'_>) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}
