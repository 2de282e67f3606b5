//! Token stream alignment
//!
//! The core algorithm: walks the original and fixed token sequences with two
//! cursors, classifying each step as unchanged, a fuzzy in-place correction,
//! or a run of removals/additions found through bounded lookahead
//! re-synchronization. Trades perfect minimal-edit alignment for linear-time,
//! good-enough alignment of prose corrections.

use crate::config::DiffConfig;
use crate::diff::DiffPart;
use crate::similarity::similarity;

/// Align two token sequences into a flat, ordered list of classified parts.
///
/// Both cursors advance monotonically and every iteration advances at least
/// one of them, so the walk always terminates in O(n + m) iterations
/// exclusive of the bounded lookahead scans.
///
/// Per-iteration decision, evaluated in order:
///
/// 1. One side exhausted: emit the remainder of the other side as a run of
///    `Added` / `Removed` parts.
/// 2. Tokens equal: emit `Unchanged`, advance both.
/// 3. Tokens within the length/similarity gate: emit `Changed`, advance
///    both. Catches single-word corrections (typo fixes, tense changes)
///    without over-triggering on unrelated short words.
/// 4. Scan up to `max_lookahead` tokens past each cursor for the other
///    side's current token. A hit on the original side emits the skipped
///    originals as `Removed`; a hit on the fixed side emits the skipped
///    fixed tokens as `Added`; the cursors then realign on a later
///    iteration. When both sides hit, the earlier index wins and ties go to
///    the removal branch. When neither hits, the pair is an unrelated
///    direct substitution and is emitted as `Changed`.
///
/// The returned list is pre-merge; adjacent same-kind parts are coalesced
/// by [`crate::diff::merge`].
pub fn align(original: &[&str], fixed: &[&str], config: &DiffConfig) -> Vec<DiffPart> {
    let mut parts = Vec::new();
    let mut oi = 0;
    let mut fi = 0;

    while oi < original.len() || fi < fixed.len() {
        if oi >= original.len() {
            for token in &fixed[fi..] {
                parts.push(DiffPart::added(*token));
            }
            fi = fixed.len();
            continue;
        }

        if fi >= fixed.len() {
            for token in &original[oi..] {
                parts.push(DiffPart::removed(*token));
            }
            oi = original.len();
            continue;
        }

        let ot = original[oi];
        let ft = fixed[fi];

        if ot == ft {
            parts.push(DiffPart::unchanged(ot));
            oi += 1;
            fi += 1;
            continue;
        }

        if is_correction(ot, ft, config) {
            parts.push(DiffPart::changed(ft, ot));
            oi += 1;
            fi += 1;
            continue;
        }

        let found_in_original = find_ahead(original, ft, oi, config.max_lookahead);
        let found_in_fixed = find_ahead(fixed, ot, fi, config.max_lookahead);

        match (found_in_original, found_in_fixed) {
            (None, None) => {
                // No realignment point nearby; unrelated direct substitution.
                parts.push(DiffPart::changed(ft, ot));
                oi += 1;
                fi += 1;
            }
            (Some(resync_o), None) => {
                for token in &original[oi..resync_o] {
                    parts.push(DiffPart::removed(*token));
                }
                oi = resync_o;
            }
            (None, Some(resync_f)) => {
                for token in &fixed[fi..resync_f] {
                    parts.push(DiffPart::added(*token));
                }
                fi = resync_f;
            }
            (Some(resync_o), Some(resync_f)) => {
                // Ties favor realigning the original side first.
                if resync_o <= resync_f {
                    for token in &original[oi..resync_o] {
                        parts.push(DiffPart::removed(*token));
                    }
                    oi = resync_o;
                } else {
                    for token in &fixed[fi..resync_f] {
                        parts.push(DiffPart::added(*token));
                    }
                    fi = resync_f;
                }
            }
        }
    }

    parts
}

/// Whether a token pair passes the fuzzy substitution gate: close in length
/// and similar enough to be a correction of the same underlying word.
fn is_correction(ot: &str, ft: &str, config: &DiffConfig) -> bool {
    let o_len = ot.chars().count();
    let f_len = ft.chars().count();

    o_len.abs_diff(f_len) <= config.max_length_delta
        && similarity(ot, ft) > config.similarity_threshold
}

/// Search for `needle` at positions `from + 1 ..= from + window`, returning
/// its index if found within the window.
fn find_ahead(tokens: &[&str], needle: &str, from: usize, window: usize) -> Option<usize> {
    let end = tokens.len().min(from + window + 1);
    (from + 1..end).find(|&i| tokens[i] == needle)
}
