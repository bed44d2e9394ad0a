use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable set of known Indonesian root words (kata dasar).
///
/// Loaded once at startup and shared read-only by every stemming call.
/// A missing or unreadable word list is a fatal startup error; nothing
/// can be stemmed without it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited UTF-8 word list: one root word per
    /// line, blank lines ignored, duplicates collapse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary {}", path.display()))?;
        let dict = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        tracing::info!(words = dict.len(), path = %path.display(), "dictionary loaded");
        Ok(dict)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.context("dictionary line is not valid UTF-8")?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Build a dictionary from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

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
