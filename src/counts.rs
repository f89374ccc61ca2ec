//! Word-count records and the `.dat` files that hold them
//!
//! A data file has one `word count percentage` line per word, most frequent
//! word first. `countwords` produces these files; `plotcounts` and
//! `testzipf` consume them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Characters treated as word separators in addition to whitespace
const DELIMITERS: &[char] = &[
    '.', ',', ';', ':', '?', '$', '@', '^', '<', '>', '#', '%', '`', '!', '*', '-', '=', '(', ')',
    '[', ']', '{', '}', '/', '"', '\'',
];

/// Errors that can occur while reading or writing word counts
#[derive(Error, Debug)]
pub enum CountsError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid word count on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Result type for word-count operations
pub type Result<T> = std::result::Result<T, CountsError>;

/// One word's frequency in a document
#[derive(Debug, Clone, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
    /// Share of all counted words, in percent
    pub percentage: f64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64, percentage: f64) -> Self {
        Self {
            word: word.into(),
            count,
            percentage,
        }
    }
}

/// Parse the contents of a data file
///
/// Blank lines are skipped; every other line must hold exactly three
/// space-separated fields.
pub fn parse_word_counts(text: &str) -> Result<Vec<WordCount>> {
    let mut counts = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [word, count, percentage] = fields[..] else {
            return Err(CountsError::Parse {
                line: line_no,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };

        let count = count.parse::<u64>().map_err(|e| CountsError::Parse {
            line: line_no,
            reason: format!("bad count '{}': {}", count, e),
        })?;
        let percentage = percentage.parse::<f64>().map_err(|e| CountsError::Parse {
            line: line_no,
            reason: format!("bad percentage '{}': {}", percentage, e),
        })?;

        counts.push(WordCount::new(word, count, percentage));
    }

    Ok(counts)
}

/// Load word counts from a data file
pub fn load_word_counts<P: AsRef<Path>>(path: P) -> Result<Vec<WordCount>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CountsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let counts = parse_word_counts(&text)?;
    debug!(path = %path.display(), words = counts.len(), "loaded word counts");
    Ok(counts)
}

/// Render word counts in data-file format
pub fn format_word_counts(counts: &[WordCount]) -> String {
    let mut output = String::new();
    for wc in counts {
        output.push_str(&format!(
            "{} {} {}\n",
            wc.word,
            wc.count,
            format_percentage(wc.percentage)
        ));
    }
    output
}

/// Shortest round-trip text for a float, laid out the way Python prints one
///
/// Decimal notation from 1e-4 up to 1e16 always keeps a fractional part
/// (`60.0`). Outside that range the exponent is signed and at least two
/// digits wide (`5e-05`, `1e+16`).
fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    let decimal = value.to_string();
    if decimal.contains('.') {
        decimal
    } else {
        decimal + ".0"
    }
}

/// Write word counts to a data file
pub fn save_word_counts<P: AsRef<Path>>(path: P, counts: &[WordCount]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_word_counts(counts)).map_err(|source| CountsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), words = counts.len(), "saved word counts");
    Ok(())
}

/// Count the words of `text`, most frequent first
///
/// Punctuation such as `.,;:!?` splits words, case is folded, and words
/// shorter than `min_length` characters are dropped before percentages are
/// computed. Words with equal counts keep the order they first appeared in.
pub fn count_words(text: &str, min_length: usize) -> Vec<WordCount> {
    let mut order: Vec<String> = Vec::new();
    let mut tally: HashMap<String, u64> = HashMap::new();

    for line in text.lines() {
        let cleaned = line.replace(DELIMITERS, " ");
        for word in cleaned.split_whitespace() {
            let word = word.to_lowercase();
            match tally.get_mut(&word) {
                Some(count) => *count += 1,
                None => {
                    tally.insert(word.clone(), 1);
                    order.push(word);
                }
            }
        }
    }

    let mut sorted: Vec<(String, u64)> = order
        .into_iter()
        .filter(|word| word.chars().count() >= min_length)
        .map(|word| {
            let count = tally[&word];
            (word, count)
        })
        .collect();
    // Stable sort keeps first-appearance order among ties
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    calculate_percentages(sorted)
}

/// Attach each word's share of the total count
fn calculate_percentages(counts: Vec<(String, u64)>) -> Vec<WordCount> {
    let total: u64 = counts.iter().map(|(_, count)| count).sum();

    counts
        .into_iter()
        .map(|(word, count)| {
            let percentage = if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            };
            WordCount::new(word, count, percentage)
        })
        .collect()
}
