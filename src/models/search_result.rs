// file: src/models/search_result.rs
// description: scored comparison results produced by the similarity engine
// reference: consumed by the CLI renderer and the JSON exporter

use crate::similarity::excerpt;
use serde::{Deserialize, Serialize};

/// Similarity between two named documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub first: String,
    pub second: String,
    /// Jaccard similarity in [0, 1]
    pub score: f64,
}

impl PairScore {
    pub fn new(first: String, second: String, score: f64) -> Self {
        Self {
            first,
            second,
            score,
        }
    }
}

/// A candidate source that scored above the reporting threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Where the candidate text came from (URL or file path)
    pub source: String,

    /// Jaccard similarity against the subject, in [0, 1]
    pub score: f64,

    /// Leading characters of the candidate text
    pub excerpt: String,

    /// The candidate text continues past the excerpt
    #[serde(default)]
    pub truncated: bool,
}

impl RankedMatch {
    pub fn new(source: String, score: f64, excerpt: String) -> Self {
        Self {
            source,
            score,
            excerpt,
            truncated: false,
        }
    }

    /// Builds a match whose excerpt is the first `excerpt_chars` characters
    /// of `text`.
    pub fn from_text(source: String, score: f64, text: &str, excerpt_chars: usize) -> Self {
        Self {
            source,
            score,
            excerpt: excerpt(text, excerpt_chars),
            truncated: text.chars().nth(excerpt_chars).is_some(),
        }
    }

    /// Excerpt as shown to users, with `...` when the text was cut.
    pub fn display_excerpt(&self) -> String {
        if self.truncated {
            format!("{}...", self.excerpt)
        } else {
            self.excerpt.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_score_creation() {
        let pair = PairScore::new("a.txt".to_string(), "b.txt".to_string(), 0.25);
        assert_eq!(pair.first, "a.txt");
        assert_eq!(pair.score, 0.25);
    }

    #[test]
    fn test_long_text_excerpt_marked_truncated() {
        let text = "This is a very long excerpt that will be truncated";
        let result = RankedMatch::from_text("https://example.com/essay".to_string(), 0.43, text, 20);

        assert_eq!(result.excerpt, "This is a very long ");
        assert!(result.truncated);
        assert_eq!(result.display_excerpt(), "This is a very long ...");
    }

    #[test]
    fn test_short_text_excerpt_shown_whole() {
        let result = RankedMatch::from_text("src".to_string(), 0.5, "short text", 20);

        assert!(!result.truncated);
        assert_eq!(result.display_excerpt(), "short text");

        let exact = RankedMatch::from_text("src".to_string(), 0.5, "abcd", 4);
        assert!(!exact.truncated);
    }

    #[test]
    fn test_serializes_to_json() {
        let result = RankedMatch::new("src".to_string(), 0.5, "text".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"source":"src","score":0.5,"excerpt":"text","truncated":false}"#);
    }
}
