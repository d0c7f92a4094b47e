//! Line tokenization shared by the vocabulary builder.

use crate::constants::tokenizer::PUNCTUATION;

/// Split one line into tokens: whitespace-delimited pieces with the fixed
/// ASCII punctuation set stripped from both ends.
///
/// The iterator is lazy and finite. Pieces that strip down to the empty
/// string are still emitted; callers that want them filtered must do so
/// themselves. Case and interior characters are preserved as-is.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .map(|piece| piece.trim_matches(|ch| PUNCTUATION.contains(ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(collect("hello   world\tagain"), vec!["hello", "world", "again"]);
    }

    #[test]
    fn strips_leading_and_trailing_punctuation_only() {
        assert_eq!(collect("\"hello,\" (world)!"), vec!["hello", "world"]);
        assert_eq!(collect("don't you-and-me"), vec!["don't", "you-and-me"]);
    }

    #[test]
    fn preserves_case() {
        assert_eq!(collect("Hello HELLO hello"), vec!["Hello", "HELLO", "hello"]);
    }

    #[test]
    fn punctuation_only_pieces_become_empty_tokens() {
        assert_eq!(collect("oh --- yeah"), vec!["oh", "", "yeah"]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(collect("").is_empty());
        assert!(collect("   \t ").is_empty());
    }
}
