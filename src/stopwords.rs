//! Stopword lists.
//!
//! A stopword list is a file containing one word per line.
//! Words are matched exactly (no case folding or normalization).
use std::{collections::HashSet, path::Path};

use log::info;

use crate::{error::Error, io};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Load a stopword list. Lines are trimmed and blank lines are ignored.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let stopwords: Self = io::read_lines(path)?.into_iter().collect();
        info!("loaded {} stopwords from {:?}", stopwords.len(), path);
        Ok(stopwords)
    }

    /// Load a stopword list if a path is provided, or get an empty one.
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::default()), Self::from_path)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for Stopwords
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}
