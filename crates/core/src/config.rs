//! Configuration for the diff engine

/// Tuning parameters for word-level alignment.
///
/// The defaults are the contract values the engine's documented behavior is
/// stated against; changing any of them changes observable diff output.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    /// How many tokens past the cursor to scan for a re-synchronization
    /// point when neither an exact match nor a fuzzy substitution applies
    pub max_lookahead: usize,

    /// Minimum similarity ratio (exclusive) for treating a token pair as a
    /// correction of the same word
    pub similarity_threshold: f64,

    /// Maximum codepoint-length difference for the fuzzy substitution gate
    pub max_length_delta: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lookahead: 5,
            similarity_threshold: 0.5,
            max_length_delta: 2,
        }
    }
}

impl DiffConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookahead window.
    pub fn with_max_lookahead(mut self, max_lookahead: usize) -> Self {
        self.max_lookahead = max_lookahead;
        self
    }

    /// Set the similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the maximum length difference for the fuzzy gate.
    pub fn with_max_length_delta(mut self, delta: usize) -> Self {
        self.max_length_delta = delta;
        self
    }
}
