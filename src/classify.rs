/*! Token classification

Classifies the tokens of a code-mixed sentence by comparing it to its source and target sentences.

Classification is done on *sets* of distinct token strings, not on positions:

- common tokens are found in the source, target and mixed sentences,
- source tokens are found in the source and mixed sentences only,
- target tokens are found in the target and mixed sentences only.

A mixed token found in neither the source nor the target sentence has no origin.
It is ignored when counting switch points.

This is independent from [crate::substitute], which works on positions.
!*/
use std::collections::HashSet;

use log::debug;

/// Language of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }
}

/// Where a mixed token comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Common,
    Source,
    Target,
}

impl Origin {
    /// Language carried by this origin. Common tokens carry none.
    pub fn side(self) -> Option<Side> {
        match self {
            Origin::Common => None,
            Origin::Source => Some(Side::Source),
            Origin::Target => Some(Side::Target),
        }
    }
}

/// Classification of a mixed sentence.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    src: HashSet<&'a str>,
    tgt: HashSet<&'a str>,
    common: HashSet<&'a str>,
    src_cm_count: usize,
    tgt_cm_count: usize,
    nb_tokens: usize,
    switch_points: usize,
    languages: Vec<Side>,
    unknown: usize,
}

/// Classify `mixed` against `src` and `tgt`.
pub fn classify<'a, S, T, M>(src: &'a [S], tgt: &'a [T], mixed: &'a [M]) -> Classification<'a>
where
    S: AsRef<str>,
    T: AsRef<str>,
    M: AsRef<str>,
{
    let src: HashSet<&str> = src.iter().map(|t| t.as_ref()).collect();
    let tgt: HashSet<&str> = tgt.iter().map(|t| t.as_ref()).collect();
    let mixed_tokens: Vec<&str> = mixed.iter().map(|t| t.as_ref()).collect();
    let mixed_set: HashSet<&str> = mixed_tokens.iter().copied().collect();

    let common: HashSet<&str> = mixed_set
        .iter()
        .filter(|tok| src.contains(*tok) && tgt.contains(*tok))
        .copied()
        .collect();

    let src_cm_count = mixed_set.iter().filter(|tok| src.contains(*tok)).count() - common.len();
    let tgt_cm_count = mixed_set.iter().filter(|tok| tgt.contains(*tok)).count() - common.len();

    // identical sentences: everything is attributed to the source language
    let src_cm_count = if src_cm_count == 0 && tgt_cm_count == 0 {
        common.len()
    } else {
        src_cm_count
    };

    let mut classification = Classification {
        src,
        tgt,
        common,
        src_cm_count,
        tgt_cm_count,
        nb_tokens: mixed_tokens.len(),
        switch_points: 0,
        languages: Vec::with_capacity(mixed_tokens.len()),
        unknown: 0,
    };
    classification.scan(&mixed_tokens);
    classification
}

impl<'a> Classification<'a> {
    /// Walks through the mixed tokens, tracking the current language and counting switches.
    ///
    /// The language is seeded to the source one. The first token only sets it,
    /// any later source or target token of the other language counts a switch.
    fn scan(&mut self, mixed: &[&'a str]) {
        let mut current = Side::Source;
        for (i, tok) in mixed.iter().enumerate() {
            match self.origin(tok).and_then(Origin::side) {
                Some(side) => {
                    if i > 0 && side != current {
                        self.switch_points += 1;
                    }
                    current = side;
                }
                None => {
                    if !self.common.contains(tok) {
                        debug!("token {:?} found in neither source nor target", tok);
                        self.unknown += 1;
                    }
                }
            }
            self.languages.push(current);
        }
    }

    /// Origin of a token, or `None` if it is in neither the source nor the target sentence.
    pub fn origin(&self, tok: &str) -> Option<Origin> {
        if self.common.contains(tok) {
            Some(Origin::Common)
        } else if self.src.contains(tok) {
            Some(Origin::Source)
        } else if self.tgt.contains(tok) {
            Some(Origin::Target)
        } else {
            None
        }
    }

    /// Distinct tokens found in the three sentences.
    pub fn common(&self) -> &HashSet<&'a str> {
        &self.common
    }

    /// Number of distinct source-only tokens of the mixed sentence.
    pub fn src_cm_count(&self) -> usize {
        self.src_cm_count
    }

    /// Number of distinct target-only tokens of the mixed sentence.
    pub fn tgt_cm_count(&self) -> usize {
        self.tgt_cm_count
    }

    pub fn src_cm_percent(&self) -> f64 {
        self.ratio(self.src_cm_count)
    }

    pub fn tgt_cm_percent(&self) -> f64 {
        self.ratio(self.tgt_cm_count)
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.nb_tokens == 0 {
            0.0
        } else {
            count as f64 / self.nb_tokens as f64
        }
    }

    /// Number of tokens of the mixed sentence.
    pub fn nb_tokens(&self) -> usize {
        self.nb_tokens
    }

    pub fn switch_points(&self) -> usize {
        self.switch_points
    }

    /// Current language after each mixed token.
    pub fn languages(&self) -> &[Side] {
        &self.languages
    }

    /// Number of mixed tokens found in neither the source nor the target sentence.
    pub fn unknown(&self) -> usize {
        self.unknown
    }
}
