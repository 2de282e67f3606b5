//! Diff part types and post-processing
//!
//! The output unit of the engine is [`DiffPart`], a closed set of variants
//! where only `Changed` carries the pre-correction text. Also provides the
//! merge pass that coalesces adjacent same-kind parts, reconstruction
//! helpers for both input strings, and summary statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a diff part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Token run present in both texts
    Unchanged,
    /// Token run present only in the fixed text
    Added,
    /// Token run present only in the original text
    Removed,
    /// One token replaced by a corrected form
    Changed,
}

/// One classified, contiguous unit of diff output.
///
/// `text` is the string to display: the literal run content for
/// `Unchanged`/`Added`/`Removed`, and the fixed-side replacement for
/// `Changed`. Only `Changed` carries the original-side text it replaced, so
/// the provenance invariant is enforced by the type rather than by
/// convention.
///
/// Serializes externally tagged by `kind`, e.g.
/// `{"kind": "changed", "text": "have", "originalText": "has"}`, which is
/// the shape the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffPart {
    /// Token run present in both texts
    Unchanged { text: String },
    /// Token run present only in the fixed text
    Added { text: String },
    /// Token run present only in the original text
    Removed { text: String },
    /// A single-token substitution, with the replaced original text
    Changed {
        text: String,
        #[serde(rename = "originalText")]
        original_text: String,
    },
}

impl DiffPart {
    /// Build an `Unchanged` part from a token.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::Unchanged { text: text.into() }
    }

    /// Build an `Added` part from a token.
    pub fn added(text: impl Into<String>) -> Self {
        Self::Added { text: text.into() }
    }

    /// Build a `Removed` part from a token.
    pub fn removed(text: impl Into<String>) -> Self {
        Self::Removed { text: text.into() }
    }

    /// Build a `Changed` part from a fixed-side token and the original
    /// token it replaced.
    pub fn changed(text: impl Into<String>, original_text: impl Into<String>) -> Self {
        Self::Changed {
            text: text.into(),
            original_text: original_text.into(),
        }
    }

    /// The classification of this part.
    pub fn kind(&self) -> DiffKind {
        match self {
            Self::Unchanged { .. } => DiffKind::Unchanged,
            Self::Added { .. } => DiffKind::Added,
            Self::Removed { .. } => DiffKind::Removed,
            Self::Changed { .. } => DiffKind::Changed,
        }
    }

    /// The display text of this part (fixed-side text for `Changed`).
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged { text }
            | Self::Added { text }
            | Self::Removed { text }
            | Self::Changed { text, .. } => text,
        }
    }

    /// The replaced original text; present only on `Changed`.
    pub fn original_text(&self) -> Option<&str> {
        match self {
            Self::Changed { original_text, .. } => Some(original_text),
            _ => None,
        }
    }

    /// Append more token text onto a mergeable part. `Changed` parts keep
    /// their one-to-one text pairing and are never extended.
    fn append_text(&mut self, more: &str) {
        match self {
            Self::Unchanged { text } | Self::Added { text } | Self::Removed { text } => {
                text.push_str(more)
            }
            Self::Changed { .. } => {}
        }
    }
}

impl fmt::Display for DiffPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged { text } => write!(f, "  {:?}", text),
            Self::Added { text } => write!(f, "+ {:?}", text),
            Self::Removed { text } => write!(f, "- {:?}", text),
            Self::Changed {
                text,
                original_text,
            } => write!(f, "~ {:?} → {:?}", original_text, text),
        }
    }
}

/// Coalesce adjacent parts of the same kind into single parts.
///
/// Single left-to-right pass. `Changed` parts never merge, with one another
/// or with anything else; each keeps its own `original_text` pairing. After
/// merging, no two adjacent parts share a mergeable kind.
pub fn merge(parts: Vec<DiffPart>) -> Vec<DiffPart> {
    let mut merged: Vec<DiffPart> = Vec::with_capacity(parts.len());

    for part in parts {
        if part.kind() != DiffKind::Changed {
            if let Some(last) = merged.last_mut() {
                if last.kind() == part.kind() {
                    last.append_text(part.text());
                    continue;
                }
            }
        }
        merged.push(part);
    }

    merged
}

/// Reconstruct the fixed text from a complete diff: the `text` of every
/// part except `Removed`, concatenated in order.
pub fn reconstruct_fixed(parts: &[DiffPart]) -> String {
    parts
        .iter()
        .filter(|p| p.kind() != DiffKind::Removed)
        .map(DiffPart::text)
        .collect()
}

/// Reconstruct the original text from a complete diff: `text` for
/// `Unchanged` and `Removed`, `original_text` for `Changed`, skipping
/// `Added`, concatenated in order.
pub fn reconstruct_original(parts: &[DiffPart]) -> String {
    parts
        .iter()
        .filter_map(|p| match p {
            DiffPart::Unchanged { text } | DiffPart::Removed { text } => Some(text.as_str()),
            DiffPart::Changed { original_text, .. } => Some(original_text.as_str()),
            DiffPart::Added { .. } => None,
        })
        .collect()
}

/// Per-kind counts over a finished diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStatistics {
    /// Number of `Unchanged` parts
    pub unchanged: usize,
    /// Number of `Added` parts
    pub added: usize,
    /// Number of `Removed` parts
    pub removed: usize,
    /// Number of `Changed` parts
    pub changed: usize,
}

impl DiffStatistics {
    /// Count parts per kind.
    pub fn from_parts(parts: &[DiffPart]) -> Self {
        let mut stats = Self::default();
        for part in parts {
            match part.kind() {
                DiffKind::Unchanged => stats.unchanged += 1,
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Changed => stats.changed += 1,
            }
        }
        stats
    }

    /// Total number of parts.
    pub fn total(&self) -> usize {
        self.unchanged + self.added + self.removed + self.changed
    }

    /// Fraction of parts that carry a change, in `[0.0, 1.0]`.
    pub fn change_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.added + self.removed + self.changed) as f64 / total as f64
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} additions, {} removals, {} corrections ({:.0}% of {} parts changed)",
            self.added,
            self.removed,
            self.changed,
            self.change_ratio() * 100.0,
            self.total()
        )
    }
}
