//! Synthetic code-mixed corpus generation
//!
//! Takes the tokenized source and target corpora along with the word aligner output,
//! and replaces source tokens with their one-to-one aligned target tokens.
//! Stopwords are never replaced, and never inserted: replacing them leads to less fluent sentences.
//!
//! Mixed sentences are detokenized with the source language tokenizer.
use std::path::{Path, PathBuf};

use log::{info, warn};
use rayon::prelude::*;

use crate::{
    error::Error,
    io, lang,
    stopwords::Stopwords,
    substitute::Substitutor,
    tokenizers::Tokenizer,
};

use super::{Pipeline, CM_DETOK, CM_TOK, SRC_DETOK, TGT_DETOK};

pub struct Generate {
    src: PathBuf,
    tgt: PathBuf,
    alignment: PathBuf,
    dst: PathBuf,
    src_lang: String,
    tgt_lang: String,
    src_stopwords: Option<PathBuf>,
    tgt_stopwords: Option<PathBuf>,
}

impl Generate {
    pub fn new(
        src: PathBuf,
        tgt: PathBuf,
        alignment: PathBuf,
        dst: PathBuf,
        src_lang: String,
        tgt_lang: String,
    ) -> Self {
        Self {
            src,
            tgt,
            alignment,
            dst,
            src_lang,
            tgt_lang,
            src_stopwords: None,
            tgt_stopwords: None,
        }
    }

    /// Set stopword lists. Tokens are not replaced if they, or their aligned token, are stopwords.
    pub fn with_stopwords(mut self, src: Option<PathBuf>, tgt: Option<PathBuf>) -> Self {
        self.src_stopwords = src;
        self.tgt_stopwords = tgt;
        self
    }

    /// Generate mixed sentences, in corpus order.
    ///
    /// Fails on the first malformed or out of range alignment.
    pub fn generate(
        substitutor: &Substitutor,
        src: &[String],
        tgt: &[String],
        alignments: &[String],
    ) -> Result<Vec<String>, Error> {
        io::check_lengths("target corpus", src.len(), tgt.len())?;
        io::check_lengths("alignment file", src.len(), alignments.len())?;

        src.par_iter()
            .zip(tgt.par_iter())
            .zip(alignments.par_iter())
            .enumerate()
            .map(|(line_no, ((s, t), a))| {
                substitutor
                    .substitute_line(s, t, a)
                    .map_err(|e| e.at_line(line_no))
            })
            .collect()
    }

    fn detokenize(lines: &[String], lang: &str) -> Vec<String> {
        let tokenizer = lang::strategy(lang);
        lines
            .par_iter()
            .map(|line| tokenizer.detokenize_line(line))
            .collect()
    }
}

impl Pipeline<usize> for Generate {
    /// Returns the number of generated sentences.
    fn run(&self) -> Result<usize, Error> {
        info!("reading source, target and alignment files");
        let src = io::read_lines(&self.src)?;
        let tgt = io::read_lines(&self.tgt)?;
        let alignments = io::read_lines(&self.alignment)?;
        info!(
            "source: {} lines, target: {} lines, alignments: {} lines",
            src.len(),
            tgt.len(),
            alignments.len()
        );

        let src_stopwords = Stopwords::from_optional_path(self.src_stopwords.as_deref())?;
        let tgt_stopwords = Stopwords::from_optional_path(self.tgt_stopwords.as_deref())?;
        if src_stopwords.is_empty() && tgt_stopwords.is_empty() {
            warn!("no stopwords provided, every aligned token may be replaced");
        }
        let substitutor = Substitutor::new(src_stopwords, tgt_stopwords);

        info!("generating code-mixed sentences");
        let mixed = Self::generate(&substitutor, &src, &tgt, &alignments)?;

        info!("detokenizing");
        let src_detok = Self::detokenize(&src, &self.src_lang);
        let tgt_detok = Self::detokenize(&tgt, &self.tgt_lang);
        let mixed_detok = Self::detokenize(&mixed, &self.src_lang);

        std::fs::create_dir_all(&self.dst)?;
        let dst: &Path = &self.dst;
        io::write_lines(&dst.join(SRC_DETOK), &src_detok)?;
        io::write_lines(&dst.join(TGT_DETOK), &tgt_detok)?;
        io::write_lines(&dst.join(CM_TOK), &mixed)?;
        io::write_lines(&dst.join(CM_DETOK), &mixed_detok)?;

        info!(
            "wrote {}, {}, {} and {} in {:?}",
            SRC_DETOK, TGT_DETOK, CM_TOK, CM_DETOK, self.dst
        );
        Ok(mixed.len())
    }
}
