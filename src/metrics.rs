/*! Code-mixing metrics

Per sentence:

- **CMI** (Code-Mixing Index, <https://aclanthology.org/L16-1292/>): `(1 - dominant / n) * 100`,
  where `dominant` is the largest of the source-only and target-only token counts,
  and `n` the number of mixed tokens.
- **Entropy**: `-(p log2(p) + q log2(q))`, with `p`/`q` the source-only/target-only counts divided by `n`.
  Common tokens are not part of `p` nor `q`, so `p + q` may be lower than 1.
- **SPF** (Switch-Point Fraction, <https://aclanthology.org/P18-1143/>): `switch_points / (n - 1)`.

Sentences with less than two mixed tokens have no SPF and are excluded from the corpus averages.
!*/
use log::debug;
use serde::Serialize;

use crate::classify::Classification;

/// Metrics of a single mixed sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentenceMetrics {
    pub cmi: f64,
    pub entropy: f64,
    pub spf: f64,
    pub switch_points: usize,
    pub nb_tokens: usize,
}

/// `-p log2(p)`, with `0 log2(0) = 0`.
#[inline]
fn neg_p_log_p(p: f64) -> f64 {
    if p > 0.0 {
        -p * p.log2()
    } else {
        0.0
    }
}

impl SentenceMetrics {
    /// Compute metrics from a classification.
    ///
    /// Returns `None` if the mixed sentence has less than two tokens.
    pub fn from_classification(c: &Classification<'_>) -> Option<Self> {
        let n = c.nb_tokens();
        if n < 2 {
            debug!("skipping sentence of {} token(s)", n);
            return None;
        }

        let dominant = c.src_cm_count().max(c.tgt_cm_count());
        let cmi = (1.0 - dominant as f64 / n as f64) * 100.0;

        let entropy = neg_p_log_p(c.src_cm_percent()) + neg_p_log_p(c.tgt_cm_percent());

        let spf = c.switch_points() as f64 / (n - 1) as f64;

        Some(Self {
            cmi,
            entropy,
            spf,
            switch_points: c.switch_points(),
            nb_tokens: n,
        })
    }
}

/// Corpus-level averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CorpusMetrics {
    pub cmi: f64,
    pub entropy: f64,
    pub spf: f64,
    /// Number of sentences the averages are computed on.
    pub sentences: usize,
    /// Number of excluded sentences.
    pub skipped: usize,
}

impl CorpusMetrics {
    /// Average per-sentence metrics. `None`s are excluded sentences.
    ///
    /// With no included sentence, averages are 0.
    pub fn aggregate<I>(metrics: I) -> Self
    where
        I: IntoIterator<Item = Option<SentenceMetrics>>,
    {
        let mut agg = Self::default();
        for m in metrics {
            match m {
                Some(m) => {
                    agg.cmi += m.cmi;
                    agg.entropy += m.entropy;
                    agg.spf += m.spf;
                    agg.sentences += 1;
                }
                None => agg.skipped += 1,
            }
        }

        if agg.sentences > 0 {
            let n = agg.sentences as f64;
            agg.cmi /= n;
            agg.entropy /= n;
            agg.spf /= n;
        }

        agg
    }
}

impl std::fmt::Display for CorpusMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CMI: {:.2}", self.cmi)?;
        writeln!(f, "Entropy: {:.2}", self.entropy)?;
        write!(f, "SPF: {:.2}", self.spf)
    }
}
