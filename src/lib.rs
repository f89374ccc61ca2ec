//! wordplot - word-frequency counting and charting
//!
//! This library backs three small tools: `countwords` turns a text into a
//! data file of (word, count, percentage) triples, `plotcounts` charts the
//! most frequent words as ASCII bars or an SVG bar chart, and `testzipf`
//! tabulates the ratio of each book's two most frequent words.

pub mod ascii_chart;
pub mod bar_chart;
pub mod cli;
pub mod config;
pub mod counts;
pub mod zipf;
