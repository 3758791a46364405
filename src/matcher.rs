//! Term matching within a single field's text.
//!
//! The matcher finds every occurrence of every query term, case-insensitive,
//! and reports spans in **character offsets into the original-case text** so
//! the highlighter preserves the author's casing. After each hit the scan
//! resumes one character past the hit's start: occurrences of the same term
//! never loop on one position, while occurrences of *different* terms may
//! overlap freely (the merger coalesces them).
//!
//! # Unicode
//!
//! Matching compares case-folded characters one-for-one. Each character folds
//! to the first scalar of its lowercase mapping, which keeps the folded
//! buffer aligned offset-for-offset with the original text.

use crate::types::MatchSpan;

/// Case-fold a text into a char buffer aligned 1:1 with the original chars.
fn fold_chars(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Find `needle` in `haystack` at or after `from`, returning the char offset
/// of the first occurrence.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    if from > last_start {
        return None;
    }
    (from..=last_start).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Find every occurrence of every term in `text`.
///
/// Terms are expected lowercase (see `query::tokenize`). The returned spans
/// are the raw, unordered union across all terms: a term present `n` times
/// yields `n` spans, an absent term yields none. Offsets index the
/// original-case text.
pub fn find_matches(text: &str, terms: &[String]) -> Vec<MatchSpan> {
    if terms.is_empty() {
        return Vec::new();
    }

    let haystack = fold_chars(text);
    let mut spans = Vec::new();

    for term in terms {
        let needle: Vec<char> = term.chars().collect();
        if needle.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(start) = find_from(&haystack, &needle, from) {
            spans.push(MatchSpan::new(start, start + needle.len()));
            // Resume one past the hit so a single term cannot stall, while
            // still surfacing overlapping self-occurrences ("aa" in "aaa").
            from = start + 1;
        }
    }

    spans
}

/// True when any term occurs anywhere in `text`.
///
/// Same case folding as `find_matches`, so an item the filter admits always
/// produces at least one highlight span and vice versa. Stops at the first
/// hit instead of collecting every occurrence.
pub fn contains_any(text: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let haystack = fold_chars(text);
    terms.iter().any(|term| {
        let needle: Vec<char> = term.chars().collect();
        find_from(&haystack, &needle, 0).is_some()
    })
}
