// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod outcome;
pub mod search_result;

pub use document::Document;
pub use outcome::ScanOutcome;
pub use search_result::{PairScore, RankedMatch};
