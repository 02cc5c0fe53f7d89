//! Parallel corpus preparation
//!
//! 1. Source and target corpora are read and checked for having the same number of lines,
//! 1. pairs where a side is empty are removed,
//! 1. each side is tokenized with its language tokenizer,
//! 1. tokenized corpora and the word aligner input (`src ||| tgt`) are written in the destination folder.
use std::path::{Path, PathBuf};

use log::info;
use rayon::prelude::*;

use crate::{
    error::Error,
    io,
    lang::{self, Strategy},
    tokenizers::Tokenizer,
};

use super::{Pipeline, ALIGN_IN, SRC_TOK, TGT_TOK};

pub struct Prepare {
    src: PathBuf,
    tgt: PathBuf,
    dst: PathBuf,
    src_lang: String,
    tgt_lang: String,
}

impl Prepare {
    pub fn new(src: PathBuf, tgt: PathBuf, dst: PathBuf, src_lang: String, tgt_lang: String) -> Self {
        Self {
            src,
            tgt,
            dst,
            src_lang,
            tgt_lang,
        }
    }

    fn tokenize(lines: &[String], tokenizer: Strategy) -> Vec<String> {
        lines
            .par_iter()
            .map(|line| tokenizer.tokenize_line(line))
            .collect()
    }
}

/// Remove pairs where the source or the target sentence has no token.
///
/// Fails if both sides do not have the same length.
pub fn remove_empty_lines(
    src: Vec<String>,
    tgt: Vec<String>,
) -> Result<(Vec<String>, Vec<String>), Error> {
    io::check_lengths("target corpus", src.len(), tgt.len())?;

    let nb_lines = src.len();
    let (src, tgt): (Vec<String>, Vec<String>) = src
        .into_iter()
        .zip(tgt)
        .filter(|(s, t)| s.split_whitespace().next().is_some() && t.split_whitespace().next().is_some())
        .unzip();

    info!("removed {} empty lines", nb_lines - src.len());
    Ok((src, tgt))
}

impl Pipeline<usize> for Prepare {
    /// Returns the number of kept sentence pairs.
    fn run(&self) -> Result<usize, Error> {
        info!("reading source and target corpora");
        let src = io::read_lines(&self.src)?;
        let tgt = io::read_lines(&self.tgt)?;
        info!("source: {} lines, target: {} lines", src.len(), tgt.len());

        let (src, tgt) = remove_empty_lines(src, tgt)?;

        info!("tokenizing ({}, {})", self.src_lang, self.tgt_lang);
        let src = Self::tokenize(&src, lang::strategy(&self.src_lang));
        let tgt = Self::tokenize(&tgt, lang::strategy(&self.tgt_lang));

        let align_in = src
            .iter()
            .zip(tgt.iter())
            .map(|(s, t)| format!("{} ||| {}", s, t));

        std::fs::create_dir_all(&self.dst)?;
        let dst: &Path = &self.dst;
        io::write_lines(&dst.join(SRC_TOK), &src)?;
        io::write_lines(&dst.join(TGT_TOK), &tgt)?;
        io::write_lines(&dst.join(ALIGN_IN), align_in)?;

        info!(
            "wrote {}, {} and {} in {:?}",
            SRC_TOK, TGT_TOK, ALIGN_IN, self.dst
        );
        Ok(src.len())
    }
}
