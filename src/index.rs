//! Title lookup over a corpus snapshot.

use indexmap::IndexMap;

use crate::corpus::Corpus;

/// Maps each distinct title to the row index of its first occurrence.
///
/// Duplicate-title policy is explicit: the first row in load order wins
/// and later duplicates are never indexed, though they remain in the
/// corpus as distinct rows. The index shares its row-index space with
/// the similarity matrix built from the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    by_title: IndexMap<String, usize>,
}

impl TitleIndex {
    /// Build the index by iterating rows in load order.
    pub fn build(corpus: &Corpus) -> Self {
        let mut by_title = IndexMap::new();
        for (row, book) in corpus.books().iter().enumerate() {
            by_title.entry(book.title.clone()).or_insert(row);
        }
        Self { by_title }
    }

    /// Resolve a title to its first-occurrence row index.
    pub fn get(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
