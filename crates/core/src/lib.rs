//! # redpen-core
//!
//! A word-level text-difference engine for reviewing automated corrections.
//! Compares an original text against its corrected form and produces an
//! ordered sequence of unchanged / added / removed / changed parts suitable
//! for highlighted rendering, plus an HTML-safe renderer for inline display.
//!
//! ## Core Concepts
//!
//! - **Tokenizer**: splits text into round-trip-safe word and
//!   whitespace-run tokens
//! - **Aligner**: walks both token streams with two cursors, using a fuzzy
//!   similarity gate and bounded lookahead to classify each step
//! - **Merger**: coalesces adjacent same-kind parts for clean rendering
//! - **Renderer**: escapes everything and wraps changes in highlight spans
//!
//! The engine is a pure function of its two string inputs: no shared state,
//! no I/O, total over every string including empty and whitespace-only
//! input.
//!
//! ## Example
//!
//! ```rust
//! use redpen_core::{generate_diff, render_diff_html, DiffPart};
//!
//! let parts = generate_diff("I has a apple.", "I have an apple.");
//! assert_eq!(parts[1], DiffPart::changed("have", "has"));
//!
//! let html = render_diff_html(&parts);
//! assert!(html.contains(r#"title="has""#));
//! ```

pub mod align;
pub mod config;
pub mod diff;
pub mod engine;
pub mod html;
pub mod similarity;
pub mod tokenizer;

// Re-export main types
pub use config::DiffConfig;
pub use diff::{
    merge, reconstruct_fixed, reconstruct_original, DiffKind, DiffPart, DiffStatistics,
};
pub use engine::DiffEngine;
pub use html::{render_html, HtmlConfig};

/// Main entry point for diffing an original text against its corrected
/// form with the default configuration.
///
/// Composes tokenization, alignment, and the merge pass. The result covers
/// both inputs completely and in order: concatenating the display text of
/// every non-`Removed` part reproduces `fixed`, and the counterpart rule
/// reproduces `original` (see [`reconstruct_fixed`] /
/// [`reconstruct_original`]).
///
/// # Example
///
/// ```rust
/// use redpen_core::generate_diff;
///
/// let parts = generate_diff("hello world", "hello rust");
/// assert_eq!(parts.len(), 2);
/// ```
pub fn generate_diff(original: &str, fixed: &str) -> Vec<DiffPart> {
    DiffEngine::default().diff(original, fixed)
}

/// Render a diff as an HTML string with the default class names.
///
/// All part content is entity-escaped; the caller must not re-escape the
/// result.
pub fn render_diff_html(parts: &[DiffPart]) -> String {
    html::render_html(parts)
}
