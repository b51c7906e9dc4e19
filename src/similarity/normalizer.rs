// file: src/similarity/normalizer.rs
// description: text normalization into lowercase alphanumeric tokens
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex =
        Regex::new(r"[\p{Alphabetic}\p{N}_]+").expect("WORD regex is valid");
}

/// Lowercases `text` and returns its maximal runs of letters, digits and
/// underscores, keeping only the runs made purely of alphanumeric characters.
///
/// Combining marks and connector punctuation end a run. Runs containing an
/// underscore are dropped whole rather than split.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().all(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(
            tokenize("The Quick, brown FOX!"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        assert!(tokenize("... !!! --- ???").is_empty());
    }

    #[test]
    fn test_underscore_runs_dropped() {
        assert_eq!(tokenize("snake_case ___ word"), vec!["word"]);
    }

    #[test]
    fn test_digits_and_unicode() {
        assert_eq!(tokenize("Chapter 42: Über naïve"), vec!["chapter", "42", "über", "naïve"]);
    }

    #[test]
    fn test_combining_marks_split_runs() {
        assert_eq!(tokenize("nai\u{308}ve text"), vec!["nai", "ve", "text"]);
    }

    #[test]
    fn test_connector_punctuation_splits_runs() {
        assert_eq!(tokenize("foo\u{203F}bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_devanagari_words_survive() {
        let tokens = tokenize("नमस्ते हिन्दी");
        assert!(tokens.len() >= 2);
        assert!(tokens.iter().all(|t| !t.contains('\u{94D}')));
        assert!(tokens.iter().all(|t| t.chars().all(char::is_alphanumeric)));
    }

    #[test]
    fn test_apostrophes_split_words() {
        assert_eq!(tokenize("don't stop"), vec!["don", "t", "stop"]);
    }
}
