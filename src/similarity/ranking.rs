// file: src/similarity/ranking.rs
// description: one-vs-many ranked matching with a similarity threshold
// reference: candidate filtering and stable descending sort

use crate::error::{DetectorError, Result};
use crate::models::RankedMatch;
use crate::similarity::EXCERPT_CHARS;
use crate::similarity::jaccard::similarity_of_sets;
use crate::similarity::normalizer::tokenize;
use crate::similarity::shingle::{ShingleSet, ShingleSize};
use rayon::prelude::*;
use tracing::debug;

pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(DetectorError::InvalidParameter(format!(
            "threshold must be within [0, 1], got {}",
            threshold
        )));
    }
    Ok(())
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Compares `subject` against every `(source, text)` candidate and returns
/// the candidates scoring strictly above `threshold`, best first.
///
/// Candidates with empty text are skipped without being scored. Ties keep
/// the candidates' input order. Excerpts are `EXCERPT_CHARS` long.
pub fn ranked_matches<I, T>(
    subject: &str,
    candidates: &[(I, T)],
    k: usize,
    threshold: f64,
) -> Result<Vec<RankedMatch>>
where
    I: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    ranked_matches_with_excerpt(subject, candidates, k, threshold, EXCERPT_CHARS)
}

/// [`ranked_matches`] with a caller-chosen excerpt length in characters.
pub fn ranked_matches_with_excerpt<I, T>(
    subject: &str,
    candidates: &[(I, T)],
    k: usize,
    threshold: f64,
    excerpt_chars: usize,
) -> Result<Vec<RankedMatch>>
where
    I: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    let size = ShingleSize::new(k)?;
    validate_threshold(threshold)?;

    if subject.is_empty() || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let subject_tokens = tokenize(subject);
    let subject_set = ShingleSet::build(&subject_tokens, size);

    let scored: Vec<Option<RankedMatch>> = candidates
        .par_iter()
        .map(|(source, text)| -> Result<Option<RankedMatch>> {
            let (source, text) = (source.as_ref(), text.as_ref());
            if text.is_empty() {
                debug!("Skipping {}: no text", source);
                return Ok(None);
            }

            let tokens = tokenize(text);
            let set = ShingleSet::build(&tokens, size);
            let score = similarity_of_sets(&subject_set, &set)?;
            debug!("Scored {} at {:.4}", source, score);

            Ok((score > threshold).then(|| {
                RankedMatch::from_text(source.to_string(), score, text, excerpt_chars)
            }))
        })
        .collect::<Result<_>>()?;

    let mut matches: Vec<RankedMatch> = scored.into_iter().flatten().collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(matches)
}
