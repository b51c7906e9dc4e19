// file: src/search/mod.rs
// description: candidate retrieval collaborators and their contracts
// reference: internal module structure

pub mod fetcher;
pub mod google;
pub mod html;
pub mod local;

pub use fetcher::PageFetcher;
pub use google::GoogleSearch;
pub use html::html_to_text;
pub use local::LocalCorpus;

use crate::error::Result;
use std::future::Future;

/// Finds candidate sources for a subject text.
///
/// `Ok(vec![])` means the search ran and found nothing; an `Err` means the
/// search itself could not be performed.
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Retrieves the text behind a source. Any retrieval failure yields an
/// empty string, which the scorer treats as "skip this candidate".
pub trait TextFetcher: Send + Sync {
    fn fetch_text(&self, source: &str) -> impl Future<Output = String> + Send;
}
