//! TF-IDF feature construction.
//!
//! Turns an ordered document collection into sparse TF-IDF vectors over
//! a vocabulary fixed at fit time. Weighting uses the smoothed form
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with raw term counts for
//! tf, and each document vector is L2-normalized so cosine similarity
//! reduces to a dot product of unit vectors.

pub mod stopwords;
pub mod tokenize;

use indexmap::IndexMap;
use tracing::debug;

use tokenize::tokenize;

/// Sparse TF-IDF vector: `(dimension, weight)` pairs sorted by
/// dimension, zero weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    fn from_entries(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(dim, _)| dim);
        Self { entries }
    }

    /// Iterate `(dimension, weight)` pairs in ascending dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale so the norm becomes 1.0. A zero vector stays zero.
    fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// TF-IDF vectorizer fitted on a document collection.
///
/// Holds the vocabulary learned at fit time; the vectors themselves are
/// returned from [`TfidfVectorizer::fit_transform`]. Fitting is fully
/// deterministic: the vocabulary is the lexicographically sorted set of
/// surviving terms, so the same ordered documents always produce the
/// same dimensions and weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: IndexMap<String, u32>,
}

impl TfidfVectorizer {
    /// Build the vocabulary from `documents` and return the fitted
    /// vectorizer together with one TF-IDF vector per document, in
    /// document order.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        // Document frequency per term.
        let mut doc_freq: IndexMap<&str, u32> = IndexMap::new();
        for terms in &tokenized {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Vocabulary: distinct terms in lexicographic order.
        let mut terms: Vec<&str> = doc_freq.keys().copied().collect();
        terms.sort_unstable();
        let vocabulary: IndexMap<String, u32> = terms
            .iter()
            .enumerate()
            .map(|(dim, term)| (term.to_string(), dim as u32))
            .collect();

        // Smoothed IDF per dimension.
        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = doc_freq[*term] as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = tokenized
            .into_iter()
            .map(|terms| {
                let mut counts: IndexMap<u32, f64> = IndexMap::new();
                for term in &terms {
                    if let Some(&dim) = vocabulary.get(term.as_str()) {
                        *counts.entry(dim).or_insert(0.0) += 1.0;
                    }
                }
                let entries = counts
                    .into_iter()
                    .map(|(dim, tf)| (dim, tf * idf[dim as usize]))
                    .collect();
                let mut vec = SparseVector::from_entries(entries);
                vec.l2_normalize();
                vec
            })
            .collect();

        debug!(
            documents = documents.len(),
            vocab = vocabulary.len(),
            "fitted tf-idf vectorizer"
        );
        (Self { vocabulary }, vectors)
    }

    /// The fitted vocabulary: term -> dimension index.
    pub fn vocabulary(&self) -> &IndexMap<String, u32> {
        &self.vocabulary
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }
}
