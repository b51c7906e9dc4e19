// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use plagiscan::utils::logging::{
    format_error, format_info, format_score, format_success, format_warning,
};
use plagiscan::{
    Config, DetectionParams, DetectionPipeline, FileScanner, GoogleSearch, JsonExporter,
    LocalCorpus, PageFetcher, PairScore, RankedMatch, ScanOutcome, SearchProvider, TextExtractor,
    TextFetcher, Validator, pairwise_matrix, similarity, sort_by_score,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "plagiscan")]
#[command(version)]
#[command(about = "Shingle-based plagiarism and similarity detection", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity between two files
    Score {
        first: PathBuf,

        second: PathBuf,

        #[arg(short = 'k', long, value_name = "K")]
        shingle_size: Option<usize>,
    },

    /// Compare every pair among several files
    Compare {
        files: Vec<PathBuf>,

        /// Also compare every supported file under this directory
        #[arg(long)]
        dir: Option<PathBuf>,

        #[arg(short = 'k', long, value_name = "K")]
        shingle_size: Option<usize>,

        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Check a text against web search results or local candidate files
    Check {
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Compare against these files instead of searching the web
        #[arg(long, num_args = 1..)]
        against: Vec<PathBuf>,

        #[arg(short = 'k', long, value_name = "K")]
        shingle_size: Option<usize>,

        #[arg(short, long)]
        threshold: Option<f64>,

        #[arg(short = 'n', long)]
        num_results: Option<usize>,

        #[arg(long, env = "PLAGISCAN_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, env = "PLAGISCAN_CSE_ID", hide_env_values = true)]
        cse_id: Option<String>,

        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,

        #[arg(long)]
        no_progress: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    plagiscan::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Score {
            first,
            second,
            shingle_size,
        } => {
            cmd_score(&config, &first, &second, shingle_size)?;
        }
        Commands::Compare {
            files,
            dir,
            shingle_size,
            export,
            pretty,
        } => {
            cmd_compare(&config, files, dir, shingle_size, export, pretty)?;
        }
        Commands::Check {
            text,
            file,
            against,
            shingle_size,
            threshold,
            num_results,
            api_key,
            cse_id,
            export,
            pretty,
            no_progress,
        } => {
            let mut config = config;
            if let Some(k) = shingle_size {
                config.detection.shingle_size = k;
            }
            if let Some(threshold) = threshold {
                config.detection.threshold = threshold;
            }
            if let Some(num_results) = num_results {
                config.search.num_results = num_results;
            }
            if api_key.is_some() {
                config.search.api_key = api_key;
            }
            if cse_id.is_some() {
                config.search.cse_id = cse_id;
            }

            let options = CheckOptions {
                against,
                export,
                pretty,
                show_progress: !no_progress,
            };
            cmd_check(&config, text, file, options).await?;
        }
    }

    Ok(())
}

fn read_document(extractor: &TextExtractor, path: &Path) -> Result<String> {
    Validator::validate_file_path(path)?;
    Ok(extractor.extract(path))
}

fn cmd_score(config: &Config, first: &Path, second: &Path, k: Option<usize>) -> Result<()> {
    let k = k.unwrap_or(config.detection.shingle_size);
    let extractor = TextExtractor::new();

    let first_text = read_document(&extractor, first)?;
    let second_text = read_document(&extractor, second)?;

    for (path, text) in [(first, &first_text), (second, &second_text)] {
        if text.is_empty() {
            println!(
                "{}",
                format_warning(&format!("Could not extract text from {}", path.display()))
            );
        }
    }

    let score = similarity(&first_text, &second_text, k).context("Similarity failed")?;

    println!(
        "{} {} <-> {} (k={})",
        format_score(score),
        first.display(),
        second.display(),
        k
    );

    Ok(())
}

fn cmd_compare(
    config: &Config,
    mut files: Vec<PathBuf>,
    dir: Option<PathBuf>,
    k: Option<usize>,
    export: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let k = k.unwrap_or(config.detection.shingle_size);

    if let Some(dir) = dir {
        Validator::validate_directory(&dir)?;
        let scanner = FileScanner::new(config.scan.clone());
        let scanned = scanner
            .scan_directory(&dir)
            .context("Failed to scan directory")?;
        files.extend(scanned.into_iter().map(|f| f.path));
    }

    if files.len() < 2 {
        println!("{}", format_info("Please provide at least 2 files for comparison."));
        return Ok(());
    }

    let batch = TextExtractor::new().extract_all(&files);
    for (path, reason) in &batch.skipped {
        println!(
            "{}",
            format_warning(&format!(
                "Could not read {} ({}). It will be skipped.",
                path.display(),
                reason
            ))
        );
    }
    let (names, texts): (Vec<String>, Vec<String>) = batch.documents.into_iter().unzip();

    if texts.len() < 2 {
        println!(
            "{}",
            format_warning("Please provide at least two valid files to compare.")
        );
        return Ok(());
    }

    info!("Comparing {} files (k={})", texts.len(), k);
    let mut pairs = pairwise_matrix(&texts, Some(names.as_slice()), k).context("Comparison failed")?;
    sort_by_score(&mut pairs);

    println!("{}", format_success("Similarity analysis completed!"));
    print_pairs(&pairs);

    if let Some(output) = export {
        let exporter = JsonExporter::new(output)?;
        let path = exporter.export_pairs(&pairs, k, pretty)?;
        println!("{}", format_info(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

struct CheckOptions {
    against: Vec<PathBuf>,
    export: Option<PathBuf>,
    pretty: bool,
    show_progress: bool,
}

async fn cmd_check(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
    options: CheckOptions,
) -> Result<()> {
    let subject = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            let text = read_document(&TextExtractor::new(), &path)?;
            if text.is_empty() {
                println!("{}", format_warning("Could not extract text from the file."));
                return Ok(());
            }
            text
        }
        (None, None) => String::new(),
    };

    if Validator::validate_content_not_empty(&subject).is_err() {
        println!(
            "{}",
            format_warning("No input text provided. Please pass --text or --file.")
        );
        return Ok(());
    }

    let mut params = DetectionParams::from_config(config);
    params.show_progress = options.show_progress;

    let outcome = if options.against.is_empty() {
        info!("Searching for potential online sources");
        let search = GoogleSearch::new(&config.search)
            .context("Search failed. Check your API key and search engine id")?;
        let fetcher = PageFetcher::new(&config.fetch)?;
        run_check(search, fetcher, params, &subject).await?
    } else {
        info!("Comparing against {} local file(s)", options.against.len());
        let corpus = LocalCorpus::new(options.against.clone());
        run_check(corpus.clone(), corpus, params, &subject).await?
    };

    render_outcome(&outcome);

    if let Some(output) = options.export {
        let exporter = JsonExporter::new(output)?;
        let path = exporter.export_outcome(
            &outcome,
            config.detection.shingle_size,
            config.detection.threshold,
            options.pretty,
        )?;
        println!("{}", format_info(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

async fn run_check<S, F>(
    search: S,
    fetcher: F,
    params: DetectionParams,
    subject: &str,
) -> Result<ScanOutcome>
where
    S: SearchProvider,
    F: TextFetcher,
{
    let pipeline = DetectionPipeline::new(search, fetcher, params);

    match pipeline.run(subject).await {
        Ok((outcome, _stats)) => Ok(outcome),
        Err(e) if e.is_upstream_failure() => {
            println!("{}", format_error("Search failed."));
            Err(e).context("Check your API key and search engine id")
        }
        Err(e) => Err(e).context("Check failed"),
    }
}

fn render_outcome(outcome: &ScanOutcome) {
    match outcome {
        ScanOutcome::NoSources => {
            println!(
                "{}",
                format_success("No potential sources found! The content appears to be original.")
            );
        }
        ScanOutcome::NoMatches { checked, skipped } => {
            println!(
                "{}",
                format_success("Search complete. No significant plagiarism detected!")
            );
            println!(
                "{}",
                format_info(&format!(
                    "{} source(s) compared, {} could not be retrieved; none significantly match the text.",
                    checked, skipped
                ))
            );
        }
        ScanOutcome::Matches {
            checked,
            skipped,
            matches,
        } => {
            println!("{}", format_success("Plagiarism check completed!"));
            println!(
                "{}",
                format_info(&format!(
                    "{} source(s) compared, {} could not be retrieved.",
                    checked, skipped
                ))
            );
            print_matches(matches);
        }
    }
}

fn print_matches(matches: &[RankedMatch]) {
    println!("\nPotential Matches Found: {}\n", matches.len());
    println!("{}", "=".repeat(80));

    for (idx, m) in matches.iter().enumerate() {
        println!("\n{}. {} {}", idx + 1, format_score(m.score), m.source);
        println!("   Excerpt:");
        let preview = m.display_excerpt();
        for line in preview.lines().take(5) {
            println!("     {}", line);
        }
    }

    println!("\n{}", "=".repeat(80));
}

fn print_pairs(pairs: &[PairScore]) {
    println!("\n{}", "=".repeat(80));
    println!("{:>8}  {:<34}  {:<34}", "Score", "File 1", "File 2");
    println!("{}", "-".repeat(80));

    for pair in pairs {
        println!(
            "{}  {:<34}  {:<34}",
            format_score(pair.score),
            Validator::truncate_text(&pair.first, 31),
            Validator::truncate_text(&pair.second, 31)
        );
    }

    println!("{}", "=".repeat(80));
}
