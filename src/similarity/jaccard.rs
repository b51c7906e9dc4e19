// file: src/similarity/jaccard.rs
// description: pairwise Jaccard scoring over shingle sets
// reference: J(A, B) = |A ∩ B| / |A ∪ B|

use crate::error::{DetectorError, Result};
use crate::similarity::normalizer::tokenize;
use crate::similarity::shingle::{ShingleSet, ShingleSize};

/// Jaccard similarity of the `k`-shingle sets of two texts.
///
/// An empty text scores 0.0 against anything, including another empty text.
/// `k == 0` is rejected before any text is inspected.
pub fn similarity(text_a: &str, text_b: &str, k: usize) -> Result<f64> {
    let size = ShingleSize::new(k)?;

    if text_a.is_empty() || text_b.is_empty() {
        return Ok(0.0);
    }

    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);
    let a = ShingleSet::build(&tokens_a, size);
    let b = ShingleSet::build(&tokens_b, size);

    similarity_of_sets(&a, &b)
}

/// Jaccard similarity of two precomputed shingle sets built with the same k.
pub fn similarity_of_sets(a: &ShingleSet<'_>, b: &ShingleSet<'_>) -> Result<f64> {
    if a.size() != b.size() {
        return Err(DetectorError::InvalidParameter(format!(
            "cannot compare shingle sets built with k={} and k={}",
            a.size(),
            b.size()
        )));
    }

    let union = a.union_len(b);
    if union == 0 {
        return Ok(0.0);
    }

    Ok(a.intersection_len(b) as f64 / union as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "the quick brown fox jumps over the lazy dog";
    const LEAPING_FOX: &str = "the quick brown fox leaps over the lazy dog";

    const SAMPLES: [&str; 6] = [
        "",
        "   ",
        "!!! ???",
        "the quick brown fox jumps over the lazy dog",
        "A completely unrelated sentence about rivers and mountains and the sea.",
        "the quick brown fox. The lazy dog sleeps while the quick brown fox jumps.",
    ];

    #[test]
    fn test_identical_texts_score_one() {
        assert_eq!(similarity(FOX, FOX, 3).unwrap(), 1.0);
        assert_eq!(similarity("short", "short", 7).unwrap(), 1.0);
    }

    #[test]
    fn test_near_duplicate_scores_between_zero_and_one() {
        let score = similarity(FOX, LEAPING_FOX, 3).unwrap();
        assert!(score > 0.0 && score < 1.0, "score was {}", score);
        // 7 shingles each, "the quick brown", "quick brown fox", "over the lazy",
        // "the lazy dog" shared: 4 / 10
        assert!((score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(similarity("", FOX, 7).unwrap(), 0.0);
        assert_eq!(similarity(FOX, "", 7).unwrap(), 0.0);
        assert_eq!(similarity("", "", 7).unwrap(), 0.0);
    }

    #[test]
    fn test_filtered_out_texts_score_zero() {
        assert_eq!(similarity("___ !!!", "--- ???", 3).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_k_rejected_even_for_empty_text() {
        assert!(matches!(
            similarity("", "", 0),
            Err(DetectorError::InvalidParameter(_))
        ));
        assert!(similarity(FOX, FOX, 0).is_err());
    }

    #[test]
    fn test_symmetry_and_bounds() {
        for k in 1..=8 {
            for a in SAMPLES {
                for b in SAMPLES {
                    let ab = similarity(a, b, k).unwrap();
                    let ba = similarity(b, a, k).unwrap();
                    assert_eq!(ab, ba, "asymmetric for {:?} / {:?} at k={}", a, b, k);
                    assert!((0.0..=1.0).contains(&ab));
                }
            }
        }
    }

    #[test]
    fn test_identity_for_non_empty_samples() {
        for k in 1..=8 {
            for text in SAMPLES.iter().filter(|t| !tokenize(t).is_empty()) {
                assert_eq!(similarity(text, text, k).unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn test_identity_for_marked_scripts() {
        for text in ["नमस्ते हिन्दी", "nai\u{308}ve re\u{301}sume\u{301}"] {
            assert_eq!(similarity(text, text, 7).unwrap(), 1.0);
            assert_eq!(similarity(text, text, 1).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_mismatched_sizes_rejected() {
        let tokens = tokenize(FOX);
        let a = ShingleSet::build(&tokens, ShingleSize::new(3).unwrap());
        let b = ShingleSet::build(&tokens, ShingleSize::new(4).unwrap());
        assert!(similarity_of_sets(&a, &b).is_err());
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        let score = similarity("The Quick Brown Fox!", "the quick, brown fox", 2).unwrap();
        assert_eq!(score, 1.0);
    }
}
