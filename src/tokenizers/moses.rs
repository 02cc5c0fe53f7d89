//! Moses-like tokenizer, used for non-Indic languages.
//!
//! Tokenization follows Unicode word boundaries (UAX #29),
//! which keeps decimal numbers (`3.14`) together.
//! Contractions are then split before the apostrophe, like Moses does for English:
//! `don't` becomes `don 't`.
use unicode_segmentation::UnicodeSegmentation;

use super::{is_closing, is_opening, join_with, Attach, Tokenizer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Moses;

impl Tokenizer for Moses {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .flat_map(split_contractions)
            .map(String::from)
            .collect()
    }

    fn detokenize(&self, tokens: &[&str]) -> String {
        join_with(tokens, |tok| {
            if is_closing(tok) || tok.starts_with('\'') || tok.eq_ignore_ascii_case("n't") {
                Attach::Left
            } else if is_opening(tok) || matches!(tok, "$" | "£" | "€" | "¥" | "#") {
                Attach::Right
            } else {
                Attach::None
            }
        })
    }
}

/// Splits `word` before each apostrophe found between two letters.
fn split_contractions(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = word.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        let between_letters = prev.map_or(false, char::is_alphabetic)
            && chars.peek().map_or(false, |(_, next)| next.is_alphabetic());
        if c == '\'' && idx > start && between_letters {
            parts.push(&word[start..idx]);
            start = idx;
        }
        prev = Some(c);
    }
    parts.push(&word[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::{split_contractions, Moses, Tokenizer};

    #[test]
    fn english() {
        let tokens = Moses.tokenize("I don't go to school, it costs $3.50!");
        assert_eq!(
            tokens,
            vec!["I", "don", "'t", "go", "to", "school", ",", "it", "costs", "$", "3.50", "!"]
        );
    }

    #[test]
    fn contractions() {
        assert_eq!(split_contractions("it's"), vec!["it", "'s"]);
        assert_eq!(split_contractions("rock'n'roll"), vec!["rock", "'n", "'roll"]);
        // not between two letters
        assert_eq!(split_contractions("'90s"), vec!["'90s"]);
        assert_eq!(split_contractions("dogs'"), vec!["dogs'"]);
        assert_eq!(split_contractions("school"), vec!["school"]);
    }

    #[test]
    fn contraction_roundtrip() {
        let text = "I don't know, it's fine.";
        let line = Moses.tokenize_line(text);
        assert_eq!(line, "I don 't know , it 's fine .");
        assert_eq!(Moses.detokenize_line(&line), text);
    }

    #[test]
    fn whitespace_dropped() {
        let tokens = Moses.tokenize("  a \t b  ");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn detokenize() {
        let tokens = [
            "I", "go", "to", "school", "(", "every", "day", ")", ",", "it", "costs", "$", "3",
            "'s", "\"", "fine", "\"", ".",
        ];
        assert_eq!(
            Moses.detokenize(&tokens),
            "I go to school (every day), it costs $3's \"fine\"."
        );
    }

    #[test]
    fn roundtrip_line() {
        let text = "I go to school, every day!";
        let line = Moses.tokenize_line(text);
        assert_eq!(line, "I go to school , every day !");
        assert_eq!(Moses.detokenize_line(&line), text);
    }
}
