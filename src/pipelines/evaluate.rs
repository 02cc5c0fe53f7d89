//! Quantifying the amount of code-mixing in a generated corpus
//!
//! Computes CMI, entropy and SPF (see [crate::metrics]) of each mixed sentence,
//! and averages them over the corpus.
//! An optional CSV report holds the metrics of every included sentence.
use std::path::PathBuf;

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    classify::classify,
    error::Error,
    io,
    metrics::{CorpusMetrics, SentenceMetrics},
};

use super::Pipeline;

pub struct Evaluate {
    src: PathBuf,
    tgt: PathBuf,
    mixed: PathBuf,
    report: Option<PathBuf>,
}

/// A CSV report row.
#[derive(Debug, Serialize)]
struct ReportEntry {
    line: usize,
    tokens: usize,
    cmi: f64,
    entropy: f64,
    spf: f64,
    switch_points: usize,
}

impl ReportEntry {
    fn new(line: usize, m: &SentenceMetrics) -> Self {
        Self {
            line,
            tokens: m.nb_tokens,
            cmi: m.cmi,
            entropy: m.entropy,
            spf: m.spf,
            switch_points: m.switch_points,
        }
    }
}

impl Evaluate {
    pub fn new(src: PathBuf, tgt: PathBuf, mixed: PathBuf, report: Option<PathBuf>) -> Self {
        Self {
            src,
            tgt,
            mixed,
            report,
        }
    }

    /// Metrics of each mixed sentence, in corpus order.
    /// Sentences with less than two tokens are `None`.
    pub fn sentence_metrics(
        src: &[String],
        tgt: &[String],
        mixed: &[String],
    ) -> Result<Vec<Option<SentenceMetrics>>, Error> {
        io::check_lengths("target corpus", src.len(), tgt.len())?;
        io::check_lengths("code-mixed corpus", src.len(), mixed.len())?;

        let metrics = src
            .par_iter()
            .zip(tgt.par_iter())
            .zip(mixed.par_iter())
            .map(|((s, t), m)| {
                let s: Vec<&str> = s.split_whitespace().collect();
                let t: Vec<&str> = t.split_whitespace().collect();
                let m: Vec<&str> = m.split_whitespace().collect();

                let classification = classify(&s, &t, &m);
                SentenceMetrics::from_classification(&classification)
            })
            .collect();

        Ok(metrics)
    }

    fn write_report(&self, metrics: &[Option<SentenceMetrics>]) -> Result<(), Error> {
        if let Some(dst) = &self.report {
            let mut out = csv::WriterBuilder::new().from_path(dst)?;
            for (line, m) in metrics.iter().enumerate() {
                if let Some(m) = m {
                    out.serialize(ReportEntry::new(line, m))?;
                }
            }
            out.flush()?;
            info!("report written to {:?}", dst);
        }
        Ok(())
    }
}

impl Pipeline<CorpusMetrics> for Evaluate {
    fn run(&self) -> Result<CorpusMetrics, Error> {
        info!("reading source, target and code-mixed corpora");
        let src = io::read_lines(&self.src)?;
        let tgt = io::read_lines(&self.tgt)?;
        let mixed = io::read_lines(&self.mixed)?;

        info!("computing metrics on {} sentences", mixed.len());
        let metrics = Self::sentence_metrics(&src, &tgt, &mixed)?;
        self.write_report(&metrics)?;

        let agg = CorpusMetrics::aggregate(metrics);
        if agg.skipped > 0 {
            warn!(
                "{} sentences of less than two tokens were not evaluated",
                agg.skipped
            );
        }
        Ok(agg)
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluate;
    use crate::{error::Error, metrics::CorpusMetrics};

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn corpus() {
        let src = owned(&["मैं स्कूल जाता हूँ", "नमस्ते", "मैं स्कूल जाता हूँ"]);
        let tgt = owned(&["I go to school", "hello", "I go to school"]);
        let mixed = owned(&["I स्कूल जाता हूँ", "hello", "मैं स्कूल जाता हूँ"]);

        let metrics = Evaluate::sentence_metrics(&src, &tgt, &mixed).unwrap();
        assert!(metrics[1].is_none());

        let agg = CorpusMetrics::aggregate(metrics);
        assert_eq!(agg.sentences, 2);
        assert_eq!(agg.skipped, 1);
        assert!((agg.cmi - 12.5).abs() < 1e-9);
        assert!((agg.spf - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn mismatch() {
        let err = Evaluate::sentence_metrics(&owned(&["a"]), &owned(&["x"]), &owned(&[]))
            .unwrap_err();
        assert!(matches!(err, Error::InputMismatch { got: 0, .. }));
    }
}
