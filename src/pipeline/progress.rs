// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for source retrieval
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub sources_found: usize,
    pub sources_fetched: usize,
    pub sources_skipped: usize,
    pub matches: usize,
    pub duration_ms: u128,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_success_rate(&self) -> f64 {
        let total = self.sources_fetched + self.sources_skipped;
        if total == 0 {
            return 0.0;
        }
        (self.sources_fetched as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    total: usize,
    sources_fetched: Arc<AtomicUsize>,
    sources_skipped: Arc<AtomicUsize>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_sources: usize) -> Self {
        Self::with_target(total_sources, ProgressDrawTarget::stderr())
    }

    pub fn hidden(total_sources: usize) -> Self {
        Self::with_target(total_sources, ProgressDrawTarget::hidden())
    }

    fn with_target(total_sources: usize, target: ProgressDrawTarget) -> Self {
        let multi_progress = MultiProgress::with_draw_target(target);

        let main_bar = create_progress_bar(&multi_progress, total_sources as u64);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            total: total_sources,
            sources_fetched: Arc::new(AtomicUsize::new(0)),
            sources_skipped: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_fetched(&self) {
        self.sources_fetched.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_skipped(&self) {
        self.sources_skipped.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn set_message(&self, message: String) {
        self.detail_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_and_clear();
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> ScanStats {
        ScanStats {
            sources_found: self.total,
            sources_fetched: self.sources_fetched.load(Ordering::SeqCst),
            sources_skipped: self.sources_skipped.load(Ordering::SeqCst),
            matches: 0,
            duration_ms: self.start_time.elapsed().as_millis(),
        }
    }

    fn update_detail_bar(&self) {
        let fetched = self.sources_fetched.load(Ordering::SeqCst);
        let skipped = self.sources_skipped.load(Ordering::SeqCst);

        let message = format!("Fetched: {} | Skipped: {}", fetched, skipped);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sources {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
