// crates/citydb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Bengalūru` -> `Bengaluru`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use citydb_core::fold_key;
///
/// assert_eq!(fold_key("Bengalūru"), "bengaluru");
/// assert_eq!(fold_key("MUMBAI"), "mumbai");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Normalizes free-text user input: trims surrounding whitespace and folds.
pub fn normalize_query(q: &str) -> String {
    fold_key(q.trim())
}

/// Compares two strings for equality after Unicode folding.
///
/// ```rust
/// use citydb_core::text::equals_folded;
///
/// assert!(equals_folded("Tamil Nadu", "tamil nadu"));
/// assert!(!equals_folded("Kerala", "Karnataka"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// True if `text` contains `word` as a whole, alphanumerically delimited token.
///
/// Both inputs are expected to be folded already.
pub fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .any(|tok| tok == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_diacritics_and_case() {
        assert_eq!(fold_key("Thiruvananthapuram"), "thiruvananthapuram");
        assert_eq!(fold_key("Bengalūru"), "bengaluru");
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_query("  Pune \t"), "pune");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn word_match_is_token_based() {
        assert!(contains_word("best it city", "it"));
        assert!(contains_word("it", "it"));
        assert!(!contains_word("city", "it"));
        assert!(!contains_word("", "it"));
    }
}
