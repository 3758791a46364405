//! Query tokenization.
//!
//! A raw query string becomes an ordered list of lowercase terms split on
//! whitespace. An empty term list is the signal for "no text filter": the
//! rest of the pipeline short-circuits on it rather than matching against
//! everything.

/// Split a raw query into lowercase, whitespace-delimited terms.
///
/// Runs of whitespace collapse; empty and whitespace-only input yields an
/// empty term list. Terms may repeat; the span merger deduplicates their
/// matches, not the tokenizer.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases() {
        assert_eq!(tokenize("Water  Treatment"), vec!["water", "treatment"]);
    }

    #[test]
    fn empty_and_whitespace_yield_no_terms() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn repeated_terms_are_kept() {
        assert_eq!(tokenize("wat wat"), vec!["wat", "wat"]);
    }

    #[test]
    fn mixed_case_unicode() {
        assert_eq!(tokenize("ÉNERGIE Solaire"), vec!["énergie", "solaire"]);
    }
}
