//! Language codes and tokenizer selection.
//!
//! Languages written in Indic scripts use the [Indic] tokenizer.
//! Every other language code falls back to [Moses].
use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::tokenizers::{Indic, Moses, Tokenizer};

/// Tokenization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Indic,
    Moses,
}

lazy_static! {
    /// Language codes that do not use the default [Strategy::Moses].
    pub static ref STRATEGIES: HashMap<&'static str, Strategy> = {
        let mut m = HashMap::new();
        m.insert("as", Strategy::Indic);
        m.insert("bn", Strategy::Indic);
        m.insert("gu", Strategy::Indic);
        m.insert("hi", Strategy::Indic);
        m.insert("kn", Strategy::Indic);
        m.insert("mai", Strategy::Indic);
        m.insert("ml", Strategy::Indic);
        m.insert("mr", Strategy::Indic);
        m.insert("or", Strategy::Indic);
        m.insert("pa", Strategy::Indic);
        m.insert("ta", Strategy::Indic);
        m.insert("te", Strategy::Indic);

        m
    };
}

/// Get the tokenization strategy of a language code.
pub fn strategy(lang: &str) -> Strategy {
    STRATEGIES.get(lang).copied().unwrap_or(Strategy::Moses)
}

impl Tokenizer for Strategy {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Strategy::Indic => Indic.tokenize(text),
            Strategy::Moses => Moses.tokenize(text),
        }
    }

    fn detokenize(&self, tokens: &[&str]) -> String {
        match self {
            Strategy::Indic => Indic.detokenize(tokens),
            Strategy::Moses => Moses.detokenize(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{strategy, Strategy};
    use crate::tokenizers::Tokenizer;

    #[test]
    fn lookup() {
        assert_eq!(strategy("hi"), Strategy::Indic);
        assert_eq!(strategy("mai"), Strategy::Indic);
        assert_eq!(strategy("en"), Strategy::Moses);
        assert_eq!(strategy("fr"), Strategy::Moses);
        assert_eq!(strategy(""), Strategy::Moses);
    }

    #[test]
    fn dispatch() {
        let hi = strategy("hi").tokenize("जाता हूँ।");
        assert_eq!(hi.last().map(String::as_str), Some("।"));
        let en = strategy("en").tokenize("I go.");
        assert_eq!(en, vec!["I", "go", "."]);
    }
}
