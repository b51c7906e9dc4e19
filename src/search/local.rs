// file: src/search/local.rs
// description: serves a fixed list of local files as scan candidates
// reference: lets the search-driven pipeline run without network access

use crate::error::{DetectorError, Result};
use crate::parser::TextExtractor;
use crate::search::{SearchProvider, TextFetcher};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct LocalCorpus {
    files: Vec<PathBuf>,
    extractor: TextExtractor,
}

impl LocalCorpus {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            extractor: TextExtractor::new(),
        }
    }
}

impl SearchProvider for LocalCorpus {
    /// Every listed file is a candidate; the query and limit do not narrow
    /// a corpus the user picked by hand.
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<String>> {
        let missing: Vec<String> = self
            .files
            .iter()
            .filter(|p| !p.is_file())
            .map(|p| p.display().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DetectorError::Search(format!(
                "candidate files not found: {}",
                missing.join(", ")
            )));
        }

        Ok(self.files.iter().map(|p| p.display().to_string()).collect())
    }
}

impl TextFetcher for LocalCorpus {
    async fn fetch_text(&self, source: &str) -> String {
        let extractor = self.extractor.clone();
        let path = PathBuf::from(source);

        match tokio::task::spawn_blocking(move || extractor.extract(&path)).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Extraction task for {} failed: {}", Path::new(source).display(), e);
                String::new()
            }
        }
    }
}
