/*! Alignment filtering

Word aligners (fast_align, awesome-align, eflomal...) output one line per sentence pair,
made of space-separated `<src_pos>-<tgt_pos>` tokens (Pharaoh format), 0-based.

These alignments are many-to-many and noisy. [OneToOne] keeps only the unambiguous part of them:

1. edges are grouped by source position,
1. source positions aligned to more than one target position are removed (one-to-many),
1. among the remaining ones, target positions that are the image of more than one source position are removed (many-to-one).

What's left is a bijection between a subset of source positions and a subset of target positions.

```
use codemix::alignment::OneToOne;

// 1 and 3 both point to target 1.
let alignment = OneToOne::from_line("0-0 1-1 2-2 3-1").unwrap();
assert_eq!(alignment.get(0), Some(0));
assert_eq!(alignment.get(1), None);
assert_eq!(alignment.get(2), Some(2));
assert_eq!(alignment.get(3), None);
```
!*/
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    str::FromStr,
};

use crate::error::Error;

/// A single `src-tgt` alignment edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub src: usize,
    pub tgt: usize,
}

impl Edge {
    pub fn new(src: usize, tgt: usize) -> Self {
        Self { src, tgt }
    }
}

impl FromStr for Edge {
    type Err = Error;

    /// Parses a `<int>-<int>` token.
    ///
    /// The line number of the error is set to 0, use [Error::at_line] to fix it.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedAlignment {
            line: 0,
            token: token.to_string(),
        };

        let (src, tgt) = token.split_once('-').ok_or_else(malformed)?;
        let src = src.parse::<usize>().map_err(|_| malformed())?;
        let tgt = tgt.parse::<usize>().map_err(|_| malformed())?;

        Ok(Edge { src, tgt })
    }
}

/// Parse an alignment line into its edges, in line order.
///
/// An empty (or whitespace-only) line yields no edges.
pub fn parse_line(line: &str) -> Result<Vec<Edge>, Error> {
    line.split_whitespace().map(Edge::from_str).collect()
}

/// One-to-one source→target position mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneToOne {
    inner: BTreeMap<usize, usize>,
}

impl OneToOne {
    /// Parse and filter an alignment line.
    pub fn from_line(line: &str) -> Result<Self, Error> {
        Ok(Self::from_edges(parse_line(line)?))
    }

    /// Filter raw edges. Duplicated edges count once.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges: BTreeSet<Edge> = edges.into_iter().collect();

        // source position -> target positions
        let mut by_src: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for edge in edges {
            by_src.entry(edge.src).or_default().push(edge.tgt);
        }

        // drop one-to-many
        let candidates: Vec<(usize, usize)> = by_src
            .into_iter()
            .filter_map(|(src, tgts)| match tgts.as_slice() {
                [tgt] => Some((src, *tgt)),
                _ => None,
            })
            .collect();

        // drop many-to-one
        let mut tgt_counts: HashMap<usize, usize> = HashMap::with_capacity(candidates.len());
        for (_, tgt) in &candidates {
            *tgt_counts.entry(*tgt).or_insert(0) += 1;
        }

        let inner = candidates
            .into_iter()
            .filter(|(_, tgt)| tgt_counts.get(tgt) == Some(&1))
            .collect();

        Self { inner }
    }

    /// Get the target position aligned to `src_pos`, if any.
    #[inline]
    pub fn get(&self, src_pos: usize) -> Option<usize> {
        self.inner.get(&src_pos).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(src_pos, tgt_pos)` pairs, by increasing source position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.inner.iter().map(|(src, tgt)| (*src, *tgt))
    }

    /// Ensure that every kept edge points inside a target sentence of length `tgt_len`.
    ///
    /// Source positions past the end of the source sentence are never looked up,
    /// so they are tolerated.
    ///
    /// The line number of the error is set to 0, use [Error::at_line] to fix it.
    pub fn check_bounds(&self, src_len: usize, tgt_len: usize) -> Result<(), Error> {
        match self.iter().find(|(_, tgt)| *tgt >= tgt_len) {
            Some((src_pos, tgt_pos)) => Err(Error::AlignmentOutOfRange {
                line: 0,
                src_pos,
                tgt_pos,
                src_len,
                tgt_len,
            }),
            None => Ok(()),
        }
    }
}
