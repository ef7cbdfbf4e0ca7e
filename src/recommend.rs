//! Top-K recommendation over a prebuilt similarity snapshot.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::{Book, Corpus};
use crate::error::Result;
use crate::index::TitleIndex;
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::TfidfVectorizer;

/// Number of recommendations returned by [`Recommender::recommend`].
pub const DEFAULT_TOP_K: usize = 5;

/// Display projection of a recommended book.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub publication_date: String,
    pub isbn: String,
    pub num_pages: Option<u32>,
    pub average_rating: Option<f64>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.authors.clone(),
            publisher: book.publisher.clone(),
            publication_date: book.publication_date.clone(),
            isbn: book.isbn.clone(),
            num_pages: book.num_pages,
            average_rating: book.average_rating,
        }
    }
}

/// Outcome of a recommendation query.
///
/// An unknown title is a normal result, not an error, and is kept
/// distinct from an empty ranked list so callers can tell "no such
/// title" from "title with no similar items".
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// Ranked records, most similar first.
    Ranked(Vec<BookRecord>),
    /// The queried title is not in the corpus.
    TitleNotFound,
}

impl Recommendations {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Recommendations::TitleNotFound)
    }

    /// The ranked records, if the title was found.
    pub fn records(&self) -> Option<&[BookRecord]> {
        match self {
            Recommendations::Ranked(records) => Some(records),
            Recommendations::TitleNotFound => None,
        }
    }
}

/// Recommendation engine over one corpus snapshot.
///
/// Building runs the whole pipeline once: derive documents, fit the
/// TF-IDF vectorizer, compute the pairwise similarity matrix and the
/// title index. Matrix and index are private and created together from
/// the same row ordering, so they can never drift apart; queries borrow
/// the snapshot immutably and the value can be shared across threads.
/// Reloading means building a new `Recommender`.
#[derive(Debug, Clone)]
pub struct Recommender {
    corpus: Corpus,
    matrix: SimilarityMatrix,
    index: TitleIndex,
}

impl Recommender {
    /// Build the snapshot from an already-loaded corpus.
    pub fn build(corpus: Corpus) -> Self {
        let documents = corpus.documents();
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&documents);
        let matrix = SimilarityMatrix::compute(&vectors);
        let index = TitleIndex::build(&corpus);
        info!(
            rows = corpus.len(),
            titles = index.len(),
            vocab = vectorizer.vocab_size(),
            "built recommendation snapshot"
        );
        Self {
            corpus,
            matrix,
            index,
        }
    }

    /// Load a dataset from disk and build the snapshot.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::build(Corpus::load(path)?))
    }

    /// Recommend the top five books most similar to `title`.
    pub fn recommend(&self, title: &str) -> Recommendations {
        self.recommend_top(title, DEFAULT_TOP_K)
    }

    /// Recommend up to `k` books most similar to `title`.
    ///
    /// Scores come from the query row of the similarity matrix, sorted
    /// descending with ties broken by ascending row index. The query's
    /// own row is excluded by index rather than by rank, so a duplicate
    /// row with an identical document cannot displace it into the
    /// results. Fewer than `k` survivors is not an error.
    pub fn recommend_top(&self, title: &str, k: usize) -> Recommendations {
        let Some(query_row) = self.index.get(title) else {
            debug!(title, "title not in corpus");
            return Recommendations::TitleNotFound;
        };

        let mut scores: Vec<(usize, f64)> = self
            .matrix
            .row(query_row)
            .iter()
            .copied()
            .enumerate()
            .collect();
        scores.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let records: Vec<BookRecord> = scores
            .into_iter()
            .filter(|&(row, _)| row != query_row)
            .take(k)
            .filter_map(|(row, _)| self.corpus.get(row).map(BookRecord::from))
            .collect();

        debug!(title, query_row, hits = records.len(), "ranked recommendations");
        Recommendations::Ranked(records)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, authors: &str, publisher: &str) -> Book {
        Book {
            title: title.into(),
            authors: authors.into(),
            publisher: publisher.into(),
            publication_date: String::new(),
            isbn: String::new(),
            num_pages: None,
            average_rating: None,
        }
    }

    fn shelf() -> Recommender {
        Recommender::build(Corpus::from_books(vec![
            book("Dune", "Frank Herbert", "Ace"),
            book("Dune Messiah", "Frank Herbert", "Ace"),
            book("Hyperion", "Dan Simmons", "Bantam"),
            book("The Fall of Hyperion", "Dan Simmons", "Bantam"),
            book("Emma", "Jane Austen", "Penguin"),
            book("Persuasion", "Jane Austen", "Penguin"),
            book("Neuromancer", "William Gibson", "Ace"),
        ]))
    }

    #[test]
    fn unknown_title_is_not_found() {
        let engine = shelf();
        assert!(engine.recommend("Foundation").is_not_found());
    }

    #[test]
    fn never_recommends_the_query_itself() {
        let engine = shelf();
        let result = engine.recommend("Dune");
        let records = result.records().unwrap();
        assert!(records.iter().all(|r| r.title != "Dune"));
        assert!(records.len() <= DEFAULT_TOP_K);
    }

    #[test]
    fn shared_author_and_publisher_rank_first() {
        let engine = Recommender::build(Corpus::from_books(vec![
            book("Solaris", "Stanislaw Lem", "Faber"),
            book("Fiasco", "Stanislaw Lem", "Faber"),
            book("Blindsight", "Peter Watts", "Tor"),
        ]));
        let result = engine.recommend("Solaris");
        let records = result.records().unwrap();
        assert_eq!(records[0].title, "Fiasco");
    }

    #[test]
    fn small_corpus_returns_fewer_than_k() {
        let engine = Recommender::build(Corpus::from_books(vec![
            book("Solaris", "Stanislaw Lem", "Faber"),
            book("Fiasco", "Stanislaw Lem", "Faber"),
            book("Blindsight", "Peter Watts", "Tor"),
        ]));
        let result = engine.recommend("Solaris");
        assert_eq!(result.records().unwrap().len(), 2);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let engine = shelf();
        assert_eq!(engine.recommend("Hyperion"), engine.recommend("Hyperion"));
    }

    #[test]
    fn duplicate_title_resolves_to_first_row() {
        let engine = Recommender::build(Corpus::from_books(vec![
            book("Dune", "Frank Herbert", "Ace"),
            book("Dune", "Frank Herbert", "Ace"),
            book("Dune Messiah", "Frank Herbert", "Ace"),
        ]));
        let result = engine.recommend("Dune");
        let records = result.records().unwrap();
        // The identical duplicate row is a valid recommendation; the
        // query's own row (row 0) is what must be excluded.
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn tied_scores_keep_row_order() {
        let engine = Recommender::build(Corpus::from_books(vec![
            book("Emma", "Jane Austen", "Penguin"),
            book("Persuasion", "Jane Austen", "Penguin"),
            book("Sanditon", "Jane Austen", "Penguin"),
        ]));
        // Persuasion and Sanditon tie against Emma on the shared
        // author/publisher terms; ascending row index breaks the tie.
        let result = engine.recommend("Emma");
        let records = result.records().unwrap();
        assert_eq!(records[0].title, "Persuasion");
        assert_eq!(records[1].title, "Sanditon");
    }

    #[test]
    fn respects_custom_k() {
        let engine = shelf();
        let result = engine.recommend_top("Dune", 1);
        assert_eq!(result.records().unwrap().len(), 1);
    }

    #[test]
    fn empty_ranked_list_is_distinct_from_not_found() {
        let engine = Recommender::build(Corpus::from_books(vec![book(
            "Dune",
            "Frank Herbert",
            "Ace",
        )]));
        let result = engine.recommend("Dune");
        assert!(!result.is_not_found());
        assert_eq!(result.records().unwrap().len(), 0);
    }
}
