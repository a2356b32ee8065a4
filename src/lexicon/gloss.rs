// src/lexicon/gloss.rs
//! Free-text definition to comparable token list.

use regex::Regex;
use std::sync::LazyLock;

static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[()':;,.?!"]"#).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Lowercases, deletes punctuation, and splits on whitespace.
#[must_use]
pub fn normalize(definition: &str) -> Vec<String> {
    let lowered = definition.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    stripped.split_whitespace().map(str::to_string).collect()
}

/// Maps each token through `stem`, keeping the token when the stemmer has
/// no base form.
#[must_use]
pub fn stem_tokens<F>(tokens: Vec<String>, stem: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    tokens
        .into_iter()
        .map(|token| stem(&token).unwrap_or(token))
        .collect()
}
