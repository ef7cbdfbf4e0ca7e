//! Tokenization for document text.

use super::stopwords::is_stop_word;

/// Split a document into lowercase terms.
///
/// Terms are maximal runs of alphanumeric characters; everything else
/// (whitespace, punctuation) is a separator. Single-character runs are
/// dropped, as are English stop words. Order of the surviving terms is
/// preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|term| !is_stop_word(term))
        .collect()
}
