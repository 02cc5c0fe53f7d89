//! # Codemix
//!
//! Synthetic code-mixed corpus generation from parallel corpora and word alignments.
//!
//! ## Getting started
//!
//! ```sh
//! codemix 0.1.0
//! synthetic code-mixed corpus generation tool.
//!
//! USAGE:
//!     codemix <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     generate    Generate code-mixed sentences from an aligned corpus
//!     help        Prints this message or the help of the given subcommand(s)
//!     metrics     Compute code-mixing metrics (CMI, entropy, SPF)
//!     prepare     Clean and tokenize a parallel corpus, prepare word aligner input
//! ```
//!
//! A typical run is `prepare`, then an external word aligner on `src-tgt.align.in`,
//! then `generate` and `metrics`.
use codemix::error;
use codemix::pipelines::{self, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Codemix::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Codemix::Prepare(p) => {
            let p = pipelines::Prepare::new(p.src, p.tgt, p.dst, p.src_lang, p.tgt_lang);
            let nb_pairs = p.run()?;
            info!("{} sentence pairs prepared", nb_pairs);
        }

        cli::Codemix::Generate(g) => {
            let p = pipelines::Generate::new(
                g.src,
                g.tgt,
                g.alignment,
                g.dst,
                g.src_lang,
                g.tgt_lang,
            )
            .with_stopwords(g.src_stopwords, g.tgt_stopwords);
            let nb_sentences = p.run()?;
            info!("{} code-mixed sentences generated", nb_sentences);
        }

        cli::Codemix::Metrics(m) => {
            let json = m.json;
            let p = pipelines::Evaluate::new(m.src, m.tgt, m.mixed, m.report);
            let metrics = p.run()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                println!("{}", metrics);
            }
        }
    };
    Ok(())
}
