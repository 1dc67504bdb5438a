//! Word-punct tokenizer used by the frequency counter.
//!
//! Splits text into word-like segments (runs of word characters, possibly
//! joined by interior punctuation such as `well-known` or `don't`) and
//! punctuation-like segments (`,`, `--`, `?!`). Whitespace separates segments
//! and never belongs to one. Only segments made entirely of word characters
//! qualify as words.

use once_cell::sync::Lazy;
use regex::Regex;

// Word characters are letters, decimal digits and `_`. Unicode `\w` is not
// used: it also admits connector punctuation, joiners and combining marks.
const WORD_CLASS: &str = r"\p{Alphabetic}\p{Nd}_";

static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"[{w}]+(?:[^{w}\s]+[{w}]+)*|[^{w}\s]+",
        w = WORD_CLASS
    ))
    .expect("segment pattern is valid")
});

// Anything that is not a word character: hyphens, commas, full stops...
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^{}]", WORD_CLASS)).expect("non-word pattern is valid")
});

/// Iterate over every segment of `text`, words and punctuation alike.
pub fn segments(text: &str) -> impl Iterator<Item = &str> {
    SEGMENT_RE.find_iter(text).map(|m| m.as_str())
}

/// True if `segment` is non-empty and made only of letters, digits or `_`.
pub fn is_word(segment: &str) -> bool {
    !segment.is_empty() && !NON_WORD_RE.is_match(segment)
}

/// Tokenize text into lowercase word tokens, dropping every segment that
/// contains a non-word character.
///
/// A word whose lowercase form is no longer word-only (`İ` folds to `i` plus
/// a combining dot) is dropped too.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    segments(text).filter_map(fold)
}

/// Count the number of qualifying word tokens in text.
pub fn word_count(text: &str) -> usize {
    segments(text).filter_map(fold).count()
}

fn fold(segment: &str) -> Option<String> {
    if !is_word(segment) {
        return None;
    }
    let lower = segment.to_lowercase();
    is_word(&lower).then_some(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segments() {
        let segs: Vec<&str> = segments("Hello, World! This is a test.").collect();
        assert_eq!(
            segs,
            vec!["Hello", ",", "World", "!", "This", "is", "a", "test", "."]
        );
    }

    #[test]
    fn test_interior_punctuation_stays_attached() {
        let segs: Vec<&str> = segments("well-known, don't stop -- 3.14").collect();
        assert_eq!(segs, vec!["well-known", ",", "don't", "stop", "--", "3.14"]);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("hello"));
        assert!(is_word("snake_case"));
        assert!(is_word("42"));
        assert!(is_word("café"));
        assert!(!is_word("well-known"));
        assert!(!is_word("don't"));
        assert!(!is_word(","));
        assert!(!is_word(""));
        assert!(!is_word("foo\u{203F}bar"));
        assert!(!is_word("a\u{FF3F}b"));
        assert!(!is_word("e\u{301}"));
    }

    #[test]
    fn test_connector_punctuation_is_not_a_word_character() {
        let segs: Vec<&str> = segments("foo\u{203F}bar baz\u{200D}").collect();
        assert_eq!(segs, vec!["foo\u{203F}bar", "baz", "\u{200D}"]);
        let tokens: Vec<String> = words("foo\u{203F}bar baz\u{200D}").collect();
        assert_eq!(tokens, vec!["baz"]);
    }

    #[test]
    fn test_words_are_lowercased() {
        let tokens: Vec<String> = words("The QUICK brown Fox").collect();
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_hyphenated_words_dropped_whole() {
        let tokens: Vec<String> = words("state-of-the-art design").collect();
        assert_eq!(tokens, vec!["design"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segments("").count(), 0);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  \n\t "), 0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Hello World"), 2);
        assert_eq!(word_count("one, two; three-four!"), 2);
        assert_eq!(word_count("a b c d e"), 5);
    }
}
