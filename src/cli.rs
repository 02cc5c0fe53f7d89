//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "codemix", about = "synthetic code-mixed corpus generation tool.")]
/// Holds every command that is callable by the `codemix` command.
pub enum Codemix {
    #[structopt(about = "Clean and tokenize a parallel corpus, prepare word aligner input")]
    Prepare(Prepare),
    #[structopt(about = "Generate code-mixed sentences from an aligned corpus")]
    Generate(Generate),
    #[structopt(about = "Compute code-mixing metrics (CMI, entropy, SPF)")]
    Metrics(Metrics),
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
///
/// ```sh
/// USAGE:
///     codemix prepare <src> <tgt> <dst> --src-lang <src-lang> --tgt-lang <tgt-lang>
/// ```
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "source corpus (one sentence per line)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "target corpus (one sentence per line)")]
    pub tgt: PathBuf,
    #[structopt(parse(from_os_str), help = "output folder")]
    pub dst: PathBuf,
    #[structopt(long = "src-lang", help = "source language code (ex. hi)")]
    pub src_lang: String,
    #[structopt(long = "tgt-lang", help = "target language code (ex. en)")]
    pub tgt_lang: String,
}

#[derive(Debug, StructOpt)]
/// Generate command and parameters.
///
/// ```sh
/// USAGE:
///     codemix generate [OPTIONS] <src> <tgt> <alignment> <dst> --src-lang <src-lang> --tgt-lang <tgt-lang>
///
/// OPTIONS:
///         --src-stopwords <src-stopwords>    source language stopwords list
///         --tgt-stopwords <tgt-stopwords>    target language stopwords list
/// ```
pub struct Generate {
    #[structopt(parse(from_os_str), help = "tokenized source corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized target corpus")]
    pub tgt: PathBuf,
    #[structopt(parse(from_os_str), help = "word aligner output (i-j pairs)")]
    pub alignment: PathBuf,
    #[structopt(parse(from_os_str), help = "output folder")]
    pub dst: PathBuf,
    #[structopt(long = "src-lang", help = "source language code (ex. hi)")]
    pub src_lang: String,
    #[structopt(long = "tgt-lang", help = "target language code (ex. en)")]
    pub tgt_lang: String,
    #[structopt(
        parse(from_os_str),
        long = "src-stopwords",
        help = "source language stopwords list (one per line)"
    )]
    pub src_stopwords: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "tgt-stopwords",
        help = "target language stopwords list (one per line)"
    )]
    pub tgt_stopwords: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Metrics command and parameters.
pub struct Metrics {
    #[structopt(parse(from_os_str), help = "tokenized source corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized target corpus")]
    pub tgt: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized code-mixed corpus")]
    pub mixed: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "report",
        help = "write per-sentence metrics in a csv file"
    )]
    pub report: Option<PathBuf>,
    #[structopt(long = "json", help = "print metrics as json")]
    pub json: bool,
}
