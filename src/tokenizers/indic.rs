//! Trivial tokenizer for Indic languages.
//!
//! Tokens are whitespace-separated, and every punctuation character
//! (ASCII, danda, double danda and common typographic marks) is a token on its own.
use super::{is_closing, is_opening, join_with, Attach, Tokenizer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indic;

/// Punctuation that is split apart from words.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '।' | '॥' | '“' | '”' | '‘' | '’' | '…' | '«' | '»')
}

impl Tokenizer for Indic {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let mut word = String::new();
            for c in chunk.chars() {
                if is_punctuation(c) {
                    if !word.is_empty() {
                        tokens.push(std::mem::take(&mut word));
                    }
                    tokens.push(c.to_string());
                } else {
                    word.push(c);
                }
            }
            if !word.is_empty() {
                tokens.push(word);
            }
        }
        tokens
    }

    fn detokenize(&self, tokens: &[&str]) -> String {
        join_with(tokens, |tok| match tok {
            "।" | "॥" => Attach::Left,
            t if is_closing(t) => Attach::Left,
            t if is_opening(t) => Attach::Right,
            _ => Attach::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Indic, Tokenizer};

    #[test]
    fn danda() {
        let tokens = Indic.tokenize("मैं स्कूल जाता हूँ।");
        assert_eq!(tokens, vec!["मैं", "स्कूल", "जाता", "हूँ", "।"]);
    }

    #[test]
    fn punctuation() {
        let tokens = Indic.tokenize("(नमस्ते), \"दुनिया\"!");
        assert_eq!(
            tokens,
            vec!["(", "नमस्ते", ")", ",", "\"", "दुनिया", "\"", "!"]
        );
    }

    #[test]
    fn combining_marks_kept() {
        // virama and vowel signs are not punctuation
        let tokens = Indic.tokenize("क्षत्रिय");
        assert_eq!(tokens, vec!["क्षत्रिय"]);
    }

    #[test]
    fn detokenize() {
        let line = Indic.detokenize(&["(", "नमस्ते", ")", ",", "\"", "दुनिया", "\"", "।"]);
        assert_eq!(line, "(नमस्ते), \"दुनिया\"।");
    }

    #[test]
    fn roundtrip_line() {
        let text = "मैं स्कूल जाता हूँ।";
        let line = Indic.tokenize_line(text);
        assert_eq!(line, "मैं स्कूल जाता हूँ ।");
        assert_eq!(Indic.detokenize_line(&line), text);
    }
}
