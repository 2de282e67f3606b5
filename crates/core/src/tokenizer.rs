//! Word/whitespace tokenization
//!
//! Splits text into an ordered sequence of tokens where runs of whitespace
//! and runs of non-whitespace each become their own token. Concatenating the
//! tokens in order reproduces the input exactly, which is what lets the diff
//! output reconstruct both sides without losing spacing.

/// Split `text` into alternating word and whitespace-run tokens.
///
/// Tokens borrow from the input. Guarantees:
///
/// - concatenating all tokens reproduces `text` exactly
/// - the empty string yields an empty vector
/// - no token is ever empty
///
/// No normalization is applied; tokens are compared codepoint-exact by the
/// rest of the engine.
///
/// # Example
///
/// ```rust
/// use redpen_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("hello  world"), vec!["hello", "  ", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut in_whitespace: Option<bool> = None;

    for (pos, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match in_whitespace {
            None => {
                run_start = pos;
                in_whitespace = Some(ws);
            }
            Some(prev) if prev == ws => {
                // Run continues
            }
            Some(_) => {
                tokens.push(&text[run_start..pos]);
                run_start = pos;
                in_whitespace = Some(ws);
            }
        }
    }

    if in_whitespace.is_some() {
        tokens.push(&text[run_start..]);
    }

    tokens
}
