// file: src/parser/extract.rs
// description: reads supported document formats into plain text
// reference: unreadable or unsupported files produce empty text

use crate::parser::markdown::MarkdownParser;
use crate::search::html::html_to_text;
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Markdown,
    Html,
    Unsupported,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") | Some("text") => SourceFormat::PlainText,
            Some("md") | Some("markdown") => SourceFormat::Markdown,
            Some("html") | Some("htm") => SourceFormat::Html,
            _ => SourceFormat::Unsupported,
        }
    }
}

/// Result of extracting a batch of files: `(name, text)` for every file that
/// produced text, and `(path, reason)` for every file that was skipped.
#[derive(Debug, Default)]
pub struct ExtractedBatch {
    pub documents: Vec<(String, String)>,
    pub skipped: Vec<(PathBuf, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the text of `path`. Failures are logged and reported as an
    /// empty string, the same signal as a file with no text.
    pub fn extract(&self, path: &Path) -> String {
        let format = SourceFormat::from_path(path);
        if format == SourceFormat::Unsupported {
            warn!("Unsupported file format, skipping: {}", path.display());
            return String::new();
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return String::new();
            }
        };
        let raw = String::from_utf8_lossy(&bytes);

        let text = match format {
            SourceFormat::PlainText => raw.into_owned(),
            SourceFormat::Markdown => MarkdownParser::new().plain_text(&raw),
            SourceFormat::Html => html_to_text(&raw),
            SourceFormat::Unsupported => String::new(),
        };

        debug!("Extracted {} chars from {}", text.len(), path.display());
        text
    }

    /// Extracts every path in order. Missing paths and files without text
    /// are skipped rather than failing the batch.
    pub fn extract_all(&self, paths: &[PathBuf]) -> ExtractedBatch {
        let mut batch = ExtractedBatch::default();

        for path in paths {
            if let Err(e) = Validator::validate_file_path(path) {
                warn!("Skipping {}: {}", path.display(), e);
                batch.skipped.push((path.clone(), e.to_string()));
                continue;
            }

            let text = self.extract(path);
            if text.is_empty() {
                batch
                    .skipped
                    .push((path.clone(), "could not extract text".to_string()));
                continue;
            }

            batch.documents.push((path.display().to_string(), text));
        }

        batch
    }
}
