use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{LoadError, Result};

/// One dataset row.
///
/// Text fields are kept verbatim. Numeric fields deserialize from empty
/// cells as `None`; a cell that is present but unparseable fails the
/// whole row, which the loader then skips.
///
/// Unknown columns in the source are ignored, so datasets carrying extra
/// metadata (ratings counts, language codes, ...) load unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub publication_date: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub num_pages: Option<u32>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl Book {
    /// Derived text used for vectorization: title, authors and
    /// publisher concatenated with single spaces, fields verbatim.
    /// Missing fields contribute an empty string, never an error.
    pub fn document(&self) -> String {
        format!("{} {} {}", self.title, self.authors, self.publisher)
    }
}

/// The full in-memory set of loaded rows, in load order.
///
/// Row position is the identity used by the similarity matrix and the
/// title index, so the ordering here must never change after load.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    /// Load a comma-delimited dataset from a file.
    ///
    /// Column headers are matched with surrounding whitespace stripped.
    /// Rows that fail to parse against the expected columns are skipped
    /// rather than failing the load. Fails with [`LoadError`] if the
    /// file is unreadable or no usable rows remain.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::DatasetUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(file, path.to_path_buf())
    }

    /// Load a comma-delimited dataset from any reader.
    /// Same row-skipping and empty-dataset semantics as [`Corpus::load`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Self::read(reader, PathBuf::from("<reader>"))
    }

    /// Build a corpus directly from rows already in hand.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    fn read<R: io::Read>(reader: R, path: PathBuf) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_reader(reader);

        let mut books = Vec::new();
        let mut skipped = 0usize;
        for record in csv_reader.deserialize::<Book>() {
            match record {
                Ok(book) => books.push(book),
                Err(err) => {
                    // Malformed rows are discarded, not fatal.
                    debug!(%err, "skipping malformed row");
                    skipped += 1;
                }
            }
        }

        if books.is_empty() {
            return Err(LoadError::EmptyDataset { path });
        }

        info!(rows = books.len(), skipped, "loaded corpus");
        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, row: usize) -> Option<&Book> {
        self.books.get(row)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// One document per row, in row order.
    pub fn documents(&self) -> Vec<String> {
        self.books.iter().map(Book::document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rows_and_trims_headers() {
        let data = "\
title ,  authors , publisher ,publication_date,isbn,num_pages,average_rating
Dune,Frank Herbert,Ace,1965-08-01,0441013597,412,4.25
Hyperion,Dan Simmons,Bantam,1989-05-26,0553283685,482,4.23
";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().title, "Dune");
        assert_eq!(corpus.get(1).unwrap().num_pages, Some(482));
    }

    #[test]
    fn skips_malformed_rows() {
        let data = "\
title,authors,publisher,publication_date,isbn,num_pages,average_rating
Dune,Frank Herbert,Ace,1965-08-01,0441013597,412,4.25
Broken,Row,With,Bad,Numbers,not-a-number,4.0
Hyperion,Dan Simmons,Bantam,1989-05-26,0553283685,482,4.23
";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().title, "Hyperion");
    }

    #[test]
    fn empty_numeric_cells_become_none() {
        let data = "\
title,authors,publisher,publication_date,isbn,num_pages,average_rating
Dune,Frank Herbert,Ace,1965-08-01,0441013597,,
";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        let book = corpus.get(0).unwrap();
        assert_eq!(book.num_pages, None);
        assert_eq!(book.average_rating, None);
    }

    #[test]
    fn zero_usable_rows_is_an_error() {
        let data = "title,authors,publisher,publication_date,isbn,num_pages,average_rating\n";
        let err = Corpus::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Corpus::load("/no/such/dataset.csv").unwrap_err();
        assert!(matches!(err, LoadError::DatasetUnreadable { .. }));
    }

    #[test]
    fn document_concatenates_fields_verbatim() {
        let book = Book {
            title: "Dune".into(),
            authors: "Frank Herbert".into(),
            publisher: "Ace".into(),
            publication_date: String::new(),
            isbn: String::new(),
            num_pages: None,
            average_rating: None,
        };
        assert_eq!(book.document(), "Dune Frank Herbert Ace");
    }

    #[test]
    fn missing_text_fields_render_empty() {
        let data = "\
title,authors,publisher,publication_date,isbn,num_pages,average_rating
Orphan,,,,,,
";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        assert_eq!(corpus.get(0).unwrap().document(), "Orphan  ");
    }
}
