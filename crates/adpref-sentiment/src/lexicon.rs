//! Static word → polarity table.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::SentimentError;

/// Word polarities loaded once and read-only afterwards.
///
/// A polarity of `0` is a neutral match and is distinct from a word that is
/// not in the lexicon at all (`lookup` returns `None`).
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, i32>,
}

#[derive(Deserialize)]
struct RawEntry {
    word: String,
    polarity: RawPolarity,
}

/// KNU files store polarity as a numeric string; hand-made files use integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPolarity {
    Int(i32),
    Text(String),
}

impl Lexicon {
    /// Build a lexicon from `(word, polarity)` pairs. Later duplicates win.
    pub fn from_entries<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, i32)>,
        W: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(w, p)| (w.into(), p)).collect(),
        }
    }

    /// Parse a KNU-style JSON array of `{"word": .., "polarity": ..}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Json`] for malformed JSON and
    /// [`SentimentError::InvalidPolarity`] for a non-numeric polarity string.
    pub fn from_json_str(json: &str) -> Result<Self, SentimentError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());

        for entry in raw {
            let polarity = match entry.polarity {
                RawPolarity::Int(p) => p,
                RawPolarity::Text(ref s) => {
                    s.trim()
                        .parse::<i32>()
                        .map_err(|_| SentimentError::InvalidPolarity {
                            word: entry.word.clone(),
                            value: s.clone(),
                        })?
                }
            };
            entries.insert(entry.word, polarity);
        }

        Ok(Self { entries })
    }

    /// Load a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if the file cannot be read, or a parse
    /// error from [`Lexicon::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let content = std::fs::read_to_string(path).map_err(|e| SentimentError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let lexicon = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "sentiment lexicon loaded");
        Ok(lexicon)
    }

    /// Load a lexicon file, treating a missing file as "sentiment disabled".
    ///
    /// A missing file yields an empty lexicon, which makes
    /// [`crate::SentimentScorer::analyze`] return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_disabled(path: &Path) -> Result<Self, SentimentError> {
        match Self::load(path) {
            Err(SentimentError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "sentiment lexicon not found; sentiment analysis disabled"
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
