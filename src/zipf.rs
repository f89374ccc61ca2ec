//! Zipf's-law comparison table
//!
//! Zipf's law predicts that the most frequent word of a text occurs about
//! twice as often as the second most frequent one. Each table row shows a
//! book's top two counts and their ratio.

use crate::counts::{load_word_counts, CountsError, WordCount};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building a Zipf table row
#[derive(Error, Debug)]
pub enum ZipfError {
    #[error("{} has {found} distinct words, at least 2 are needed", .path.display())]
    TooFewWords { path: PathBuf, found: usize },

    #[error("{} has a second most frequent word with a count of zero", .path.display())]
    ZeroSecondCount { path: PathBuf },

    #[error(transparent)]
    Counts(#[from] CountsError),
}

/// Table layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Tab-separated columns (default)
    #[default]
    Text,
    /// LaTeX tabular rows
    Latex,
}

impl TableFormat {
    pub fn header(self) -> &'static str {
        match self {
            TableFormat::Text => "Book\tFirst\tSecond\tRatio",
            TableFormat::Latex => "Book & First & Second & Ratio\\\\ \\hline",
        }
    }

    pub fn format_row(self, row: &ZipfRow) -> String {
        match self {
            TableFormat::Text => format!(
                "{}\t{}\t{}\t{:.2}",
                row.book,
                row.first,
                row.second,
                row.ratio()
            ),
            TableFormat::Latex => format!(
                "{} & {} & {} & {:.2} \\\\",
                row.book,
                row.first,
                row.second,
                row.ratio()
            ),
        }
    }
}

/// Counts of the two most frequent words, or `None` with fewer than two
pub fn top_two_word(counts: &[WordCount]) -> Option<(u64, u64)> {
    match counts {
        [first, second, ..] => Some((first.count, second.count)),
        _ => None,
    }
}

/// One book's line in the table
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfRow {
    pub book: String,
    pub first: u64,
    pub second: u64,
}

impl ZipfRow {
    /// Build a row from already loaded counts
    pub fn from_counts(
        book: impl Into<String>,
        path: &Path,
        counts: &[WordCount],
    ) -> Result<Self, ZipfError> {
        let (first, second) = top_two_word(counts).ok_or_else(|| ZipfError::TooFewWords {
            path: path.to_path_buf(),
            found: counts.len(),
        })?;
        if second == 0 {
            return Err(ZipfError::ZeroSecondCount {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            book: book.into(),
            first,
            second,
        })
    }

    /// Load a data file and build its row
    ///
    /// The book is named after the file path without its extension, so
    /// `data/isles.dat` becomes `data/isles`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ZipfError> {
        let path = path.as_ref();
        let counts = load_word_counts(path)?;
        Self::from_counts(book_name(path), path, &counts)
    }

    /// Most frequent count over second most frequent count
    pub fn ratio(&self) -> f64 {
        self.first as f64 / self.second as f64
    }
}

/// File path with its extension stripped
pub fn book_name(path: &Path) -> String {
    path.with_extension("").display().to_string()
}

/// Header plus one row per book
#[derive(Debug, Clone, Default)]
pub struct ZipfTable {
    rows: Vec<ZipfRow>,
}

impl ZipfTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: ZipfRow) {
        self.rows.push(row);
    }

    /// Render the header and every row, one per line
    pub fn render(&self, format: TableFormat) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", format.header()));
        for row in &self.rows {
            output.push_str(&format!("{}\n", format.format_row(row)));
        }
        output
    }
}
