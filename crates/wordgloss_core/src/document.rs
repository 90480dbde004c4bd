//! Document model and word tokenization.
//!
//! A document is a flat text payload plus a `rich` flag. Tokenization turns it
//! into a dense, order-stable sequence of [`WordToken`]s: the rich path strips
//! light markup before indexing, the plain path indexes whitespace-separated
//! words positionally. Either way indices are assigned in reading order and
//! are the addressing scheme every other subsystem keys on.

use serde::{Deserialize, Serialize};

/// One renderable word with its document-wide index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    pub index: usize,
    pub text: String,
}

/// A full replacement document delivered by content acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
    /// Whether the rich (markup-stripping) tokenization path applies.
    pub rich: bool,
}

impl Document {
    /// Create a document, inferring the rich flag from the content.
    ///
    /// # Returns
    /// A new [`Document`] with `rich` set by [`is_rich_content`].
    pub fn new(title: impl Into<String>, text: String) -> Self {
        let rich = is_rich_content(&text);
        Self {
            title: title.into(),
            text,
            rich,
        }
    }

    /// Create a document with an explicit rendering mode.
    pub fn with_mode(title: impl Into<String>, text: String, rich: bool) -> Self {
        Self {
            title: title.into(),
            text,
            rich,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn is_heading_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    let mut hash_count = 0usize;
    while hash_count < bytes.len() && bytes[hash_count] == b'#' {
        hash_count += 1;
    }
    (1..=6).contains(&hash_count) && bytes.get(hash_count) == Some(&b' ')
}

fn is_list_line(line: &str) -> bool {
    if line.starts_with("- ") || line.starts_with("* ") || line.starts_with("+ ") {
        return true;
    }
    let bytes = line.as_bytes();
    let mut digits = 0usize;
    while digits < bytes.len() && bytes[digits].is_ascii_digit() {
        digits += 1;
    }
    digits > 0 && bytes.get(digits) == Some(&b'.') && bytes.get(digits + 1) == Some(&b' ')
}

/// Heuristic detection of markup-bearing content.
///
/// Intentionally narrow: only structural markers that the rich tokenizer
/// knows how to strip count as evidence, so plain prose with stray symbols
/// stays on the positional path.
///
/// # Returns
/// `true` when the content appears to carry light markup structure.
pub fn is_rich_content(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    if text.contains("](") || text.contains("**") {
        return true;
    }
    text.lines().any(|line| {
        let trimmed = line.trim_start();
        is_heading_line(trimmed) || trimmed.starts_with("> ") || is_list_line(trimmed)
    })
}

/// Strip leading structural markers (heading hashes, quote/list bullets) from
/// a line, returning the renderable remainder.
fn strip_line_markers(line: &str) -> &str {
    let trimmed = line.trim_start();
    if is_heading_line(trimmed) {
        return trimmed.trim_start_matches('#').trim_start();
    }
    if let Some(rest) = trimmed.strip_prefix("> ") {
        return rest;
    }
    if is_list_line(trimmed) {
        if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
            .or_else(|| trimmed.strip_prefix("+ "))
        {
            return rest;
        }
        if let Some(dot) = trimmed.find(". ") {
            return &trimmed[dot + 2..];
        }
    }
    trimmed
}

/// Resolve one whitespace-separated raw word into its rendered form.
///
/// Strips emphasis/code fences around the word and collapses single-word
/// link syntax to its label. Words that are pure markup dissolve to `None`
/// and consume no index.
fn rendered_word(raw: &str) -> Option<String> {
    let mut word = raw;
    // `[label](url)` collapses to its label when fully contained in one word.
    if word.starts_with('[') {
        if let Some(close) = word.find("](") {
            if word.ends_with(')') {
                word = &word[1..close];
            }
        }
    }
    let word = word.trim_matches(|ch| matches!(ch, '*' | '_' | '`' | '~'));
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Tokenize a document into indexed words in reading order.
///
/// The rich path strips markup first so token text matches what is rendered;
/// the plain path is positional whitespace splitting. Indices are dense in
/// both modes.
///
/// # Returns
/// Ordered sequence of [`WordToken`]s; empty for a blank document.
pub fn word_tokens(document: &Document) -> Vec<WordToken> {
    let mut tokens = Vec::new();
    if document.rich {
        for line in document.text.lines() {
            for raw in strip_line_markers(line).split_whitespace() {
                if let Some(text) = rendered_word(raw) {
                    tokens.push(WordToken {
                        index: tokens.len(),
                        text,
                    });
                }
            }
        }
    } else {
        for raw in document.text.split_whitespace() {
            tokens.push(WordToken {
                index: tokens.len(),
                text: raw.to_string(),
            });
        }
    }
    tokens
}
