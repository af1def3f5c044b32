//! Quote list loading and random selection
//!
//! The quote list is read once at startup from a JSON array of strings and
//! never mutated afterwards. Handlers share it behind an `Arc` without
//! locking since there are no writers.

use rand::Rng;
use std::path::Path;
use thiserror::Error;

/// Quote list error types
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Failed to read quote file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse quote file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Quote file {path} contains no quotes")]
    Empty { path: String },
}

/// Immutable, ordered collection of quotes
///
/// Guaranteed non-empty by construction, so [`QuoteList::random`] always
/// has a valid result.
#[derive(Debug, Clone)]
pub struct QuoteList {
    quotes: Vec<String>,
}

impl QuoteList {
    /// Load the quote list from a JSON array of strings.
    ///
    /// Fails when the file is missing, unreadable, malformed, or empty.
    /// Rejecting an empty list here means request handlers never have to
    /// deal with one.
    pub fn load(path: &Path) -> Result<Self, QuoteError> {
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|source| QuoteError::Read {
            path: display.clone(),
            source,
        })?;

        let quotes: Vec<String> =
            serde_json::from_str(&content).map_err(|source| QuoteError::Parse {
                path: display.clone(),
                source,
            })?;

        Self::from_vec(quotes).ok_or(QuoteError::Empty { path: display })
    }

    /// Build a quote list from an in-memory vector.
    ///
    /// Returns `None` when the vector is empty.
    pub fn from_vec(quotes: Vec<String>) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self { quotes })
        }
    }

    /// Number of quotes in the list
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false; emptiness is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Draw one quote uniformly at random over `[0, len)`
    pub fn random(&self) -> &str {
        let index = rand::thread_rng().gen_range(0..self.quotes.len());
        &self.quotes[index]
    }

    /// Whether the given text is a member of the list
    pub fn contains(&self, quote: &str) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }
}
