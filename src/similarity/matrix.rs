// file: src/similarity/matrix.rs
// description: all-pairs similarity between n texts
// reference: symmetric upper-triangle comparison

use crate::error::{DetectorError, Result};
use crate::models::{Document, PairScore};
use crate::similarity::jaccard::similarity_of_sets;
use crate::similarity::normalizer::tokenize;
use crate::similarity::shingle::{ShingleSet, ShingleSize};
use rayon::prelude::*;
use tracing::debug;

/// Scores every unordered pair `(i, j)` with `i < j`, in row-major order.
///
/// Missing names default to `File {i}` (1-based). Fewer than two texts yield
/// an empty list. `names`, when given, must be as long as `texts`.
pub fn pairwise_matrix<S>(texts: &[S], names: Option<&[String]>, k: usize) -> Result<Vec<PairScore>>
where
    S: AsRef<str> + Sync,
{
    let size = ShingleSize::new(k)?;

    if let Some(names) = names
        && names.len() != texts.len()
    {
        return Err(DetectorError::InvalidParameter(format!(
            "got {} names for {} texts",
            names.len(),
            texts.len()
        )));
    }

    if texts.len() < 2 {
        return Ok(Vec::new());
    }

    let documents: Vec<Document> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let name = names.map(|n| n[i].clone());
            Document::new(name, text.as_ref().to_string(), i)
        })
        .collect();

    let tokens: Vec<Vec<String>> = documents.par_iter().map(|d| tokenize(&d.text)).collect();
    let sets: Vec<ShingleSet<'_>> = tokens
        .iter()
        .map(|t| ShingleSet::build(t, size))
        .collect();

    let pairs: Vec<(usize, usize)> = (0..documents.len())
        .flat_map(|i| (i + 1..documents.len()).map(move |j| (i, j)))
        .collect();

    debug!(
        "Scoring {} pairs across {} documents (k={})",
        pairs.len(),
        documents.len(),
        size
    );

    pairs
        .par_iter()
        .map(|&(i, j)| -> Result<PairScore> {
            let score = if documents[i].is_empty() || documents[j].is_empty() {
                0.0
            } else {
                similarity_of_sets(&sets[i], &sets[j])?
            };
            Ok(PairScore::new(
                documents[i].name.clone(),
                documents[j].name.clone(),
                score,
            ))
        })
        .collect()
}

/// Sorts pair scores by descending similarity, keeping input order for ties.
pub fn sort_by_score(pairs: &mut [PairScore]) {
    pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
}
