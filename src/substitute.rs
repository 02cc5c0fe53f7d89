/*! Alignment-driven token substitution

Builds a code-mixed sentence by replacing source tokens with their one-to-one aligned target tokens.

For each source token at position `i`:

- source stopwords are kept,
- if `i` is aligned to `j` and `target[j]` is not a target stopword, it is replaced by `target[j]`,
- otherwise it is kept.

Lookups are done by position: repeated source tokens are each replaced (or not) according to their own alignment.

The mixed sentence always has as many tokens as the source sentence.
!*/
use itertools::Itertools;

use crate::{alignment::OneToOne, error::Error, stopwords::Stopwords};

#[derive(Debug, Clone, Default)]
pub struct Substitutor {
    src_stopwords: Stopwords,
    tgt_stopwords: Stopwords,
}

impl Substitutor {
    pub fn new(src_stopwords: Stopwords, tgt_stopwords: Stopwords) -> Self {
        Self {
            src_stopwords,
            tgt_stopwords,
        }
    }

    /// Get the mixed token sequence.
    ///
    /// Target positions that are out of `tgt` are ignored (the source token is kept).
    /// Use [OneToOne::check_bounds] beforehand to reject such alignments.
    pub fn substitute<'a, S, T>(
        &self,
        src: &'a [S],
        tgt: &'a [T],
        alignment: &OneToOne,
    ) -> Vec<&'a str>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        src.iter()
            .enumerate()
            .map(|(i, src_tok)| {
                let src_tok = src_tok.as_ref();
                if self.src_stopwords.contains(src_tok) {
                    return src_tok;
                }

                alignment
                    .get(i)
                    .and_then(|j| tgt.get(j))
                    .map(AsRef::as_ref)
                    .filter(|tgt_tok| !self.tgt_stopwords.contains(tgt_tok))
                    .unwrap_or(src_tok)
            })
            .collect()
    }

    /// Generate a mixed sentence from whitespace-tokenized lines and their alignment line.
    ///
    /// Errors carry line number 0, use [Error::at_line] to fix it.
    pub fn substitute_line(
        &self,
        src_line: &str,
        tgt_line: &str,
        alignment_line: &str,
    ) -> Result<String, Error> {
        let src: Vec<&str> = src_line.split_whitespace().collect();
        let tgt: Vec<&str> = tgt_line.split_whitespace().collect();

        let alignment = OneToOne::from_line(alignment_line)?;
        alignment.check_bounds(src.len(), tgt.len())?;

        Ok(self.substitute(&src, &tgt, &alignment).iter().join(" "))
    }
}
