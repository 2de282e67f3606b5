//! HTML rendering of diff parts
//!
//! Converts a merged diff into a highlighted markup string. Every piece of
//! part content is entity-escaped before insertion, whether it came from the
//! user's original text or from the correction service; nothing the engine
//! receives is ever treated as markup.

use crate::diff::DiffPart;

/// CSS class names attached to the rendered spans.
///
/// # Example
///
/// ```rust
/// use redpen_core::{DiffPart, HtmlConfig};
///
/// let html = HtmlConfig::default().render(&[DiffPart::added("now")]);
/// assert_eq!(html, r#"<ins class="diff-added">now</ins>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Class for inserted runs
    pub added_class: String,
    /// Class for removed (struck-through) runs
    pub removed_class: String,
    /// Class for in-place corrections
    pub changed_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            added_class: "diff-added".to_string(),
            removed_class: "diff-removed".to_string(),
            changed_class: "diff-changed".to_string(),
        }
    }
}

impl HtmlConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class for inserted runs.
    pub fn with_added_class(mut self, class: impl Into<String>) -> Self {
        self.added_class = class.into();
        self
    }

    /// Set the class for removed runs.
    pub fn with_removed_class(mut self, class: impl Into<String>) -> Self {
        self.removed_class = class.into();
        self
    }

    /// Set the class for corrected runs.
    pub fn with_changed_class(mut self, class: impl Into<String>) -> Self {
        self.changed_class = class.into();
        self
    }

    /// Render a merged diff as an HTML string.
    ///
    /// - `Unchanged` is emitted escaped, with no wrapper
    /// - `Added` becomes an `<ins>` span
    /// - `Removed` becomes a `<del>` span
    /// - `Changed` becomes a `<span>` whose `title` tooltip carries the
    ///   escaped pre-correction text
    ///
    /// Callers must insert the result into element content as-is; it is
    /// already escaped and must not be escaped again.
    pub fn render(&self, parts: &[DiffPart]) -> String {
        let mut out = String::new();

        for part in parts {
            match part {
                DiffPart::Unchanged { text } => out.push_str(&escape_text(text)),
                DiffPart::Added { text } => {
                    out.push_str("<ins class=\"");
                    out.push_str(&self.added_class);
                    out.push_str("\">");
                    out.push_str(&escape_text(text));
                    out.push_str("</ins>");
                }
                DiffPart::Removed { text } => {
                    out.push_str("<del class=\"");
                    out.push_str(&self.removed_class);
                    out.push_str("\">");
                    out.push_str(&escape_text(text));
                    out.push_str("</del>");
                }
                DiffPart::Changed {
                    text,
                    original_text,
                } => {
                    out.push_str("<span class=\"");
                    out.push_str(&self.changed_class);
                    out.push_str("\" title=\"");
                    out.push_str(&escape_attr(original_text));
                    out.push_str("\">");
                    out.push_str(&escape_text(text));
                    out.push_str("</span>");
                }
            }
        }

        out
    }
}

/// Render a merged diff with the default class names.
pub fn render_html(parts: &[DiffPart]) -> String {
    HtmlConfig::default().render(parts)
}

/// Escape text for insertion into HTML element content.
fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for insertion into a double-quoted HTML attribute value.
///
/// Quotes are the load-bearing case here; newlines are also encoded so a
/// multi-token `original_text` cannot break the attribute.
fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiffEngine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unchanged_has_no_wrapper() {
        assert_eq!(render_html(&[DiffPart::unchanged("plain text")]), "plain text");
    }

    #[test]
    fn test_added_and_removed_wrappers() {
        let html = render_html(&[
            DiffPart::removed("old "),
            DiffPart::added("new "),
        ]);

        assert_eq!(
            html,
            r#"<del class="diff-removed">old </del><ins class="diff-added">new </ins>"#
        );
    }

    #[test]
    fn test_changed_carries_original_in_tooltip() {
        let html = render_html(&[DiffPart::changed("have", "has")]);

        assert_eq!(
            html,
            r#"<span class="diff-changed" title="has">have</span>"#
        );
    }

    #[test]
    fn test_script_injection_is_neutralized() {
        let parts = DiffEngine::default().diff("a", "<script>alert(1)</script>");
        let html = render_html(&parts);

        assert!(html.contains("&lt;script&gt;"), "escaped tag missing: {}", html);
        assert!(!html.contains("<script>"), "live tag leaked: {}", html);
    }

    #[test]
    fn test_all_entities_escaped_in_body() {
        let html = render_html(&[DiffPart::unchanged(r#"&<>"'"#)]);
        assert_eq!(html, "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_tooltip_cannot_break_out_of_attribute() {
        let html = render_html(&[DiffPart::changed("x", r#"" onmouseover="evil()"#)]);

        assert!(
            !html.contains(r#"" onmouseover"#),
            "attribute breakout: {}",
            html
        );
        assert!(html.contains("&quot; onmouseover=&quot;evil()"));
    }

    #[test]
    fn test_tooltip_newlines_encoded() {
        let html = render_html(&[DiffPart::changed("x", "a\nb")]);
        assert!(html.contains("a&#10;b"));
    }

    #[test]
    fn test_custom_classes() {
        let config = HtmlConfig::new()
            .with_added_class("ins")
            .with_removed_class("del")
            .with_changed_class("fix");

        let html = config.render(&[
            DiffPart::added("a"),
            DiffPart::removed("b"),
            DiffPart::changed("c", "d"),
        ]);

        assert_eq!(
            html,
            r#"<ins class="ins">a</ins><del class="del">b</del><span class="fix" title="d">c</span>"#
        );
    }

    #[test]
    fn test_empty_diff_renders_empty() {
        assert_eq!(render_html(&[]), "");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let parts = DiffEngine::default().diff("I has a apple.", "I have an apple.");
        let html = render_html(&parts);

        assert_eq!(
            html,
            concat!(
                "I ",
                r#"<span class="diff-changed" title="has">have</span>"#,
                " ",
                r#"<span class="diff-changed" title="a">an</span>"#,
                " apple."
            )
        );
    }
}
