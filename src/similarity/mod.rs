// file: src/similarity/mod.rs
// description: shingle-based similarity engine module exports
// reference: internal module structure

pub mod jaccard;
pub mod matrix;
pub mod normalizer;
pub mod ranking;
pub mod shingle;

pub use jaccard::{similarity, similarity_of_sets};
pub use matrix::{pairwise_matrix, sort_by_score};
pub use normalizer::tokenize;
pub use ranking::{excerpt, ranked_matches, ranked_matches_with_excerpt, validate_threshold};
pub use shingle::{ShingleSet, ShingleSize};

/// Shingle width used when the caller does not choose one.
pub const DEFAULT_SHINGLE_SIZE: usize = 7;

/// Candidates must score strictly above this to be reported.
pub const DEFAULT_THRESHOLD: f64 = 0.02;

/// Length of the candidate excerpt carried by a ranked match, in characters.
pub const EXCERPT_CHARS: usize = 200;
