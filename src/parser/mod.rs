// file: src/parser/mod.rs
// description: file-format text extraction module exports
// reference: internal module structure

pub mod extract;
pub mod markdown;

pub use extract::{ExtractedBatch, SourceFormat, TextExtractor};
pub use markdown::MarkdownParser;
