//! ASCII bar charts for the terminal
//!
//! Each row is a label padded to a common width followed by a bar of
//! symbols whose length is proportional to the row's value:
//!
//! ```text
//! the  #########################################################################
//! of   ###############################################
//! and  #################################
//! ```

use crate::counts::WordCount;

/// Layout options for [`plot_ascii_bars`]
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiChartOptions {
    /// Total row width in characters (labels, gap, and bar)
    pub screenwidth: usize,
    /// Spaces between the padded label and the bar
    pub gap: usize,
    /// Measure bars from just below the smallest value instead of from zero
    ///
    /// Truncated charts exaggerate differences between similar values.
    pub truncate: bool,
    /// Text repeated to draw a bar
    pub symbol: String,
}

impl Default for AsciiChartOptions {
    fn default() -> Self {
        Self {
            screenwidth: 80,
            gap: 2,
            truncate: true,
            symbol: "#".to_string(),
        }
    }
}

/// Labels "0", "1", ... for charts drawn without labels
pub fn numbered_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// Right-pad labels to a common width, then add `gap` spaces
///
/// Width is measured in characters, so every returned string has the same
/// `chars().count()`.
pub fn typeset_labels<S: AsRef<str>>(labels: &[S], gap: usize) -> Vec<String> {
    let label_width = labels
        .iter()
        .map(|label| label.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let padding = label_width - label.chars().count() + gap;
            format!("{}{}", label, " ".repeat(padding))
        })
        .collect()
}

/// Build one bar of `symbol`s per value
///
/// The longest bar is `symbol` repeated `round(maxlen / len(symbol))` times;
/// every other bar is a prefix of it, cut at
/// `round((value - minimum) / (maximum - minimum) * len(longest))`
/// characters. With `truncate` the minimum is one below the smallest value,
/// otherwise it is zero. Rounding is half-to-even.
pub fn ascii_bars(values: &[f64], truncate: bool, maxlen: usize, symbol: &str) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }

    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minimum = if truncate {
        values.iter().copied().fold(f64::INFINITY, f64::min) - 1.0
    } else {
        0.0
    };
    let value_range = maximum - minimum;

    let symbol_len = symbol.chars().count();
    let repeats = if symbol_len == 0 {
        0
    } else {
        (maxlen as f64 / symbol_len as f64).round_ties_even() as usize
    };
    let biggest_bar: Vec<char> = symbol.repeat(repeats).chars().collect();

    values
        .iter()
        .map(|&value| {
            // Only an all-zero chart without truncation has no range
            let proportion = if value_range > 0.0 {
                (value - minimum) / value_range
            } else {
                0.0
            };
            let len = (proportion * biggest_bar.len() as f64)
                .round_ties_even()
                .clamp(0.0, biggest_bar.len() as f64) as usize;
            biggest_bar[..len].iter().collect()
        })
        .collect()
}

/// Pair typeset labels with proportional bars
///
/// Without labels (or with an empty list) rows are numbered from zero. Bars
/// get whatever width remains of `screenwidth` after the typeset label and
/// one more `gap`. Rows stop at the shorter of `values` and `labels`.
pub fn plot_ascii_bars(
    values: &[f64],
    labels: Option<&[String]>,
    options: &AsciiChartOptions,
) -> Vec<String> {
    let labels = match labels {
        Some(labels) if !labels.is_empty() => typeset_labels(labels, options.gap),
        _ => typeset_labels(&numbered_labels(values.len()), options.gap),
    };

    let label_width = labels.first().map_or(0, |label| label.chars().count());
    let maxlen = options
        .screenwidth
        .saturating_sub(options.gap)
        .saturating_sub(label_width);
    let bars = ascii_bars(values, options.truncate, maxlen, &options.symbol);

    labels
        .into_iter()
        .zip(bars)
        .map(|(label, bar)| label + &bar)
        .collect()
}

/// Chart the `limit` most frequent words of a loaded data file
pub fn plot_word_counts(
    counts: &[WordCount],
    limit: usize,
    options: &AsciiChartOptions,
) -> Vec<String> {
    let limited = &counts[..limit.min(counts.len())];
    let words: Vec<String> = limited.iter().map(|wc| wc.word.clone()).collect();
    let values: Vec<f64> = limited.iter().map(|wc| wc.count as f64).collect();

    plot_ascii_bars(&values, Some(words.as_slice()), options)
}
