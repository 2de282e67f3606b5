//! Main diff engine that orchestrates the diff process

use tracing::{debug, trace};

use crate::align::align;
use crate::config::DiffConfig;
use crate::diff::{merge, DiffPart};
use crate::tokenizer::tokenize;

/// The word-level diff engine.
///
/// A thin, stateless orchestrator: it owns a [`DiffConfig`] and composes
/// tokenization, alignment, and the merge pass. Calls are pure functions of
/// the two input strings; an engine can be shared freely across threads and
/// concurrent calls need no coordination.
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the word-level diff between an original text and its
    /// corrected form.
    ///
    /// Orchestrates the full process:
    /// 1. Tokenize both inputs into word/whitespace tokens
    /// 2. Align the token streams into classified parts
    /// 3. Merge adjacent same-kind parts
    ///
    /// # Example
    ///
    /// ```rust
    /// use redpen_core::{DiffConfig, DiffEngine};
    ///
    /// let engine = DiffEngine::new(DiffConfig::default());
    /// let parts = engine.diff("hello world", "hello rust");
    ///
    /// // Unchanged "hello " followed by the world → rust substitution.
    /// assert_eq!(parts.len(), 2);
    /// ```
    pub fn diff(&self, original: &str, fixed: &str) -> Vec<DiffPart> {
        let original_tokens = tokenize(original);
        let fixed_tokens = tokenize(fixed);

        trace!(
            original_tokens = original_tokens.len(),
            fixed_tokens = fixed_tokens.len(),
            "aligning token streams"
        );

        let parts = merge(align(&original_tokens, &fixed_tokens, &self.config));

        debug!(parts = parts.len(), "diff computed");

        parts
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{reconstruct_fixed, reconstruct_original, DiffKind};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn diff(original: &str, fixed: &str) -> Vec<DiffPart> {
        DiffEngine::default().diff(original, fixed)
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(diff("", ""), vec![]);
    }

    #[test]
    fn test_pure_addition() {
        assert_eq!(diff("", "hello"), vec![DiffPart::added("hello")]);
    }

    #[test]
    fn test_pure_removal() {
        assert_eq!(diff("hello", ""), vec![DiffPart::removed("hello")]);
    }

    #[test]
    fn test_identical_inputs_merge_to_one_part() {
        let text = "no change at all";
        assert_eq!(diff(text, text), vec![DiffPart::unchanged(text)]);
    }

    #[test]
    fn test_grammar_correction_scenario() {
        let parts = diff("I has a apple.", "I have an apple.");

        assert_eq!(
            parts,
            vec![
                DiffPart::unchanged("I "),
                DiffPart::changed("have", "has"),
                DiffPart::unchanged(" "),
                DiffPart::changed("an", "a"),
                DiffPart::unchanged(" apple."),
            ]
        );

        assert_eq!(reconstruct_fixed(&parts), "I have an apple.");
        assert_eq!(reconstruct_original(&parts), "I has a apple.");
    }

    #[test]
    fn test_word_dropped_mid_sentence() {
        let parts = diff("the quick brown fox", "the brown fox");

        assert_eq!(
            parts,
            vec![
                DiffPart::unchanged("the "),
                DiffPart::removed("quick "),
                DiffPart::unchanged("brown fox"),
            ]
        );
    }

    #[test]
    fn test_word_inserted_mid_sentence() {
        let parts = diff("the brown fox", "the quick brown fox");

        assert_eq!(
            parts,
            vec![
                DiffPart::unchanged("the "),
                DiffPart::added("quick "),
                DiffPart::unchanged("brown fox"),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_inputs() {
        let parts = diff("   ", " ");

        assert_eq!(reconstruct_fixed(&parts), " ");
        assert_eq!(reconstruct_original(&parts), "   ");
    }

    #[test]
    fn test_no_adjacent_mergeable_kinds_in_output() {
        let parts = diff(
            "one two three four five six seven",
            "one 2 three five six altogether different",
        );

        for pair in parts.windows(2) {
            assert!(
                pair[0].kind() != pair[1].kind() || pair[0].kind() == DiffKind::Changed,
                "adjacent parts share kind {:?}: {:?}",
                pair[0].kind(),
                parts
            );
        }
    }

    #[test]
    fn test_multibyte_text() {
        let parts = diff("der grüne Baum", "der große Baum");

        assert_eq!(reconstruct_fixed(&parts), "der große Baum");
        assert_eq!(reconstruct_original(&parts), "der grüne Baum");
    }

    #[test]
    fn test_threshold_gates_inplace_correction() {
        // The default threshold treats bat → bit (ratio 2/3) as an
        // in-place correction; a stricter engine fails the gate and
        // re-synchronizes on the later "bat" instead.
        let parts = diff("bat", "bit x bat");
        assert_eq!(
            parts,
            vec![DiffPart::changed("bit", "bat"), DiffPart::added(" x bat")]
        );

        let strict = DiffEngine::new(DiffConfig::new().with_similarity_threshold(0.7));
        let parts = strict.diff("bat", "bit x bat");
        assert_eq!(
            parts,
            vec![DiffPart::added("bit x "), DiffPart::unchanged("bat")]
        );
    }

    proptest! {
        #[test]
        fn prop_fixed_reconstruction(
            original in "[a-z .,]{0,60}",
            fixed in "[a-z .,]{0,60}",
        ) {
            let parts = diff(&original, &fixed);
            prop_assert_eq!(reconstruct_fixed(&parts), fixed);
        }

        #[test]
        fn prop_original_reconstruction(
            original in "[a-z .,]{0,60}",
            fixed in "[a-z .,]{0,60}",
        ) {
            let parts = diff(&original, &fixed);
            prop_assert_eq!(reconstruct_original(&parts), original);
        }

        #[test]
        fn prop_merge_invariant(
            original in "[a-z ]{0,60}",
            fixed in "[a-z ]{0,60}",
        ) {
            let parts = diff(&original, &fixed);
            for pair in parts.windows(2) {
                prop_assert!(
                    pair[0].kind() != pair[1].kind()
                        || pair[0].kind() == DiffKind::Changed
                );
            }
        }

        #[test]
        fn prop_identity(s in "\\PC{0,80}") {
            let parts = diff(&s, &s);
            if s.is_empty() {
                prop_assert!(parts.is_empty());
            } else {
                prop_assert_eq!(parts, vec![DiffPart::unchanged(s.clone())]);
            }
        }
    }
}
