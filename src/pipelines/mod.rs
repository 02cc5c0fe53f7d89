//! Pipelines.
//!
//! Each step of code-mixed corpus creation is a pipeline:
//!
//! 1. [Prepare]: cleaning and tokenization of a parallel corpus, creation of the word aligner input.
//! 1. [Generate]: code-mixed sentence generation from the tokenized corpus and the word aligner output.
//! 1. [Evaluate]: code-mixing metrics of a generated corpus.
//!
//! The light [pipeline::Pipeline] trait is shared by them.
mod evaluate;
mod generate;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod prepare;

pub use evaluate::Evaluate;
pub use generate::Generate;
pub use pipeline::Pipeline;
pub use prepare::{remove_empty_lines, Prepare};

/// Tokenized source corpus
pub const SRC_TOK: &str = "src.tok";
/// Tokenized target corpus
pub const TGT_TOK: &str = "tgt.tok";
/// Word aligner input (`src ||| tgt`)
pub const ALIGN_IN: &str = "src-tgt.align.in";
/// Detokenized source corpus
pub const SRC_DETOK: &str = "src.detok";
/// Detokenized target corpus
pub const TGT_DETOK: &str = "tgt.detok";
/// Tokenized code-mixed corpus
pub const CM_TOK: &str = "src-tgt.cm.tok";
/// Detokenized code-mixed corpus
pub const CM_DETOK: &str = "src-tgt.cm.detok";
