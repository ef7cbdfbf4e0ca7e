//! Pairwise cosine similarity over sparse TF-IDF vectors.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::vectorizer::SparseVector;

/// Cosine similarity between two sparse vectors.
///
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Both inputs iterate in ascending dimension order, so the dot product
/// is a single merge pass. Defined as 0.0 when either vector has zero
/// norm, which covers documents whose text was empty or all stop words.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut a_it = a.iter().fuse();
    let mut b_it = b.iter().fuse();
    let mut a_next = a_it.next();
    let mut b_next = b_it.next();
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    let mut dot = 0_f64;
    while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
        match ia.cmp(&ib) {
            Ordering::Equal => {
                norm_a += va * va;
                norm_b += vb * vb;
                dot += va * vb;
                a_next = a_it.next();
                b_next = b_it.next();
            }
            Ordering::Less => {
                norm_a += va * va;
                a_next = a_it.next();
            }
            Ordering::Greater => {
                norm_b += vb * vb;
                b_next = b_it.next();
            }
        }
    }
    while let Some((_, va)) = a_next {
        norm_a += va * va;
        a_next = a_it.next();
    }
    while let Some((_, vb)) = b_next {
        norm_b += vb * vb;
        b_next = b_it.next();
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

/// Full pairwise cosine-similarity matrix.
///
/// Square, symmetric, entry (i, j) is the similarity of vectors i and
/// j. Computed once per corpus snapshot; the O(N²) cost is why the
/// recommender caches it instead of rebuilding per query.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute the matrix for the given vectors. Rows are computed in
    /// parallel.
    pub fn compute(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| cosine_similarity(&vectors[i], &vectors[j]))
                    .collect()
            })
            .collect();
        debug!(n, "computed similarity matrix");
        Self { n, rows }
    }

    /// Similarity row for one item: its score against every item,
    /// itself included.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Number of rows (= number of items).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
