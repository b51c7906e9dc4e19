// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod search;
pub mod similarity;
pub mod utils;

pub use config::{Config, DetectionConfig, FetchConfig, ScanConfig, SearchConfig};
pub use error::{DetectorError, Result};
pub use exporter::json::{JsonExporter, ScanReport};
pub use models::{Document, PairScore, RankedMatch, ScanOutcome};
pub use parser::{MarkdownParser, SourceFormat, TextExtractor};
pub use pipeline::{DetectionParams, DetectionPipeline, ProgressTracker, ScanStats};
pub use repository::{FileScanner, ScannedFile};
pub use search::{GoogleSearch, LocalCorpus, PageFetcher, SearchProvider, TextFetcher};
pub use similarity::{
    DEFAULT_SHINGLE_SIZE, DEFAULT_THRESHOLD, ShingleSet, ShingleSize, pairwise_matrix,
    ranked_matches, similarity, sort_by_score, tokenize,
};
pub use utils::Validator;
