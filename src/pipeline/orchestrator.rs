// file: src/pipeline/orchestrator.rs
// description: coordinates source search, retrieval, and ranked scoring
// reference: orchestrates the asynchronous check workflow

use crate::config::Config;
use crate::error::{DetectorError, Result};
use crate::models::ScanOutcome;
use crate::pipeline::progress::{ProgressTracker, ScanStats};
use crate::search::{SearchProvider, TextFetcher};
use crate::similarity::{ShingleSize, ranked_matches_with_excerpt, validate_threshold};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

/// Explicit scan parameters. The scoring engine never reads `Config`
/// directly; callers resolve these first.
#[derive(Debug, Clone)]
pub struct DetectionParams {
    pub shingle_size: usize,
    pub threshold: f64,
    pub num_results: usize,
    pub concurrency: usize,
    pub excerpt_chars: usize,
    pub show_progress: bool,
}

impl DetectionParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            shingle_size: config.detection.shingle_size,
            threshold: config.detection.threshold,
            num_results: config.search.num_results,
            concurrency: config.fetch.concurrency,
            excerpt_chars: config.detection.excerpt_chars,
            show_progress: true,
        }
    }

    fn validate(&self) -> Result<()> {
        ShingleSize::new(self.shingle_size)?;
        validate_threshold(self.threshold)?;
        if self.concurrency == 0 {
            return Err(DetectorError::InvalidParameter(
                "concurrency must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct DetectionPipeline<S, F> {
    search: S,
    fetcher: F,
    params: DetectionParams,
}

impl<S, F> DetectionPipeline<S, F>
where
    S: SearchProvider,
    F: TextFetcher,
{
    pub fn new(search: S, fetcher: F, params: DetectionParams) -> Self {
        Self {
            search,
            fetcher,
            params,
        }
    }

    /// Searches for sources of `subject` and ranks them.
    ///
    /// A search failure is returned as `Err`; a search that finds nothing is
    /// `Ok(ScanOutcome::NoSources)`.
    pub async fn run(&self, subject: &str) -> Result<(ScanOutcome, ScanStats)> {
        self.params.validate()?;

        if subject.trim().is_empty() {
            return Err(DetectorError::Validation(
                "no input text provided".to_string(),
            ));
        }

        info!("Searching for potential sources");
        let sources = self.search.search(subject, self.params.num_results).await?;

        if sources.is_empty() {
            info!("Search returned no candidate sources");
            return Ok((ScanOutcome::NoSources, ScanStats::new()));
        }

        info!(
            "Found {} potential source(s), fetching with {} concurrent tasks",
            sources.len(),
            self.params.concurrency
        );
        let progress = if self.params.show_progress {
            ProgressTracker::new(sources.len())
        } else {
            ProgressTracker::hidden(sources.len())
        };

        let candidates = self.fetch_all(sources, &progress).await;

        progress.set_message("Comparing content".to_string());
        let matches = ranked_matches_with_excerpt(
            subject,
            &candidates,
            self.params.shingle_size,
            self.params.threshold,
            self.params.excerpt_chars,
        )?;

        let mut stats = progress.get_stats();
        stats.matches = matches.len();
        progress.finish();
        self.log_final_stats(&stats);

        let checked = stats.sources_fetched;
        let skipped = stats.sources_skipped;
        let outcome = if matches.is_empty() {
            ScanOutcome::NoMatches { checked, skipped }
        } else {
            ScanOutcome::Matches {
                checked,
                skipped,
                matches,
            }
        };

        Ok((outcome, stats))
    }

    /// Fetches every source, returning `(source, text)` in search order.
    /// Empty texts are kept so the scorer can skip them.
    async fn fetch_all(
        &self,
        sources: Vec<String>,
        progress: &ProgressTracker,
    ) -> Vec<(String, String)> {
        let fetcher = &self.fetcher;

        let mut fetched: Vec<(usize, String, String)> =
            stream::iter(sources.into_iter().enumerate().map(|(idx, source)| async move {
                let text = fetcher.fetch_text(&source).await;
                (idx, source, text)
            }))
            .buffer_unordered(self.params.concurrency)
            .inspect(|(_, source, text)| {
                if text.is_empty() {
                    warn!("No usable text from {}, skipping", source);
                    progress.inc_skipped();
                } else {
                    progress.inc_fetched();
                }
            })
            .collect()
            .await;

        fetched.sort_by_key(|(idx, _, _)| *idx);
        fetched
            .into_iter()
            .map(|(_, source, text)| (source, text))
            .collect()
    }

    fn log_final_stats(&self, stats: &ScanStats) {
        info!("=== Scan Summary ===");
        info!("Duration: {} ms", stats.duration_ms);
        info!("Sources found: {}", stats.sources_found);
        info!("Sources compared: {}", stats.sources_fetched);
        info!("Sources skipped: {}", stats.sources_skipped);
        info!("Fetch success rate: {:.2}%", stats.fetch_success_rate());
        info!("Matches above threshold: {}", stats.matches);
        info!("====================");
    }
}
