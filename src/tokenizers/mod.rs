/*! Tokenizers

Text is tokenized before alignment and detokenized once mixed sentences are generated.

Two strategies are available:

- [Indic]: trivial tokenization of Indic scripts (whitespace + punctuation split),
- [Moses]: Unicode word boundaries, with Moses-like detokenization.

[crate::lang::strategy] picks the right one for a language code.
!*/
mod indic;
mod moses;

pub use indic::Indic;
pub use moses::Moses;

/// Tokenization capability.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn detokenize(&self, tokens: &[&str]) -> String;

    /// Tokenize into a space-joined line.
    fn tokenize_line(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    /// Detokenize a space-joined line.
    fn detokenize_line(&self, line: &str) -> String {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        self.detokenize(&tokens)
    }
}

/// How a token sticks to its neighbours when detokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attach {
    /// No space before (closing punctuation)
    Left,
    /// No space after (opening brackets)
    Right,
    /// Space on both sides
    None,
}

/// Joins tokens back, using `attach` to decide where spaces go.
///
/// Straight double quotes alternate between opening and closing.
fn join_with<F>(tokens: &[&str], attach: F) -> String
where
    F: Fn(&str) -> Attach,
{
    let mut out = String::new();
    let mut glue_next = true;
    let mut open_quote = false;

    for tok in tokens {
        let kind = if *tok == "\"" {
            open_quote = !open_quote;
            if open_quote {
                Attach::Right
            } else {
                Attach::Left
            }
        } else {
            attach(tok)
        };

        if !glue_next && kind != Attach::Left {
            out.push(' ');
        }
        out.push_str(tok);
        glue_next = kind == Attach::Right;
    }

    out
}

/// Characters that are closing punctuation in every script.
fn is_closing(tok: &str) -> bool {
    matches!(
        tok,
        "." | "," | ";" | ":" | "!" | "?" | "%" | ")" | "]" | "}" | "…" | "”" | "’" | "»"
    )
}

/// Opening brackets and quotes.
fn is_opening(tok: &str) -> bool {
    matches!(tok, "(" | "[" | "{" | "“" | "‘" | "«" | "¿" | "¡")
}

#[cfg(test)]
mod tests {
    use super::{join_with, Attach};

    #[test]
    fn join_plain() {
        assert_eq!(join_with(&["a", "b", "c"], |_| Attach::None), "a b c");
    }

    #[test]
    fn join_quotes() {
        let tokens = ["he", "said", "\"", "hi", "\"", "."];
        let joined = join_with(&tokens, |t| {
            if t == "." {
                Attach::Left
            } else {
                Attach::None
            }
        });
        assert_eq!(joined, "he said \"hi\".");
    }

    #[test]
    fn join_empty() {
        assert_eq!(join_with(&[], |_| Attach::None), "");
    }
}
