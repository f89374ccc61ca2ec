//! SVG bar chart of word counts
//!
//! Renders the most frequent words of a data file with [`plotters`] on its
//! SVG backend: one touching bar per word, word labels along the x axis,
//! count gridlines along the y axis.

use crate::counts::WordCount;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while drawing or saving a bar chart
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to {}: {source}", .path.display())]
    FileSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown bar colour '{0}', expected a basic colour name or #rrggbb")]
    InvalidColor(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Size, colour, and title of the rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bar fill, a basic colour name or `#rrggbb`
    pub color: String,
    pub title: String,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            color: "blue".to_string(),
            title: "Word Counts".to_string(),
        }
    }
}

/// Resolve a bar colour from the config file
///
/// Accepts `#rrggbb` hex or one of black, white, red, green, blue, yellow,
/// cyan, magenta (case-insensitive).
pub fn parse_color(name: &str) -> Result<RGBColor> {
    let name = name.trim();

    if let Some(hex) = name.strip_prefix('#') {
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        return match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => Ok(RGBColor(r, g, b)),
            _ => Err(PlotError::InvalidColor(name.to_string())),
        };
    }

    match name.to_ascii_lowercase().as_str() {
        "black" => Ok(BLACK),
        "white" => Ok(WHITE),
        "red" => Ok(RED),
        "green" => Ok(GREEN),
        "blue" => Ok(BLUE),
        "yellow" => Ok(YELLOW),
        "cyan" => Ok(CYAN),
        "magenta" => Ok(MAGENTA),
        _ => Err(PlotError::InvalidColor(name.to_string())),
    }
}

/// Bar chart of the first `limit` records of a data file
#[derive(Debug, Clone)]
pub struct BarChart {
    words: Vec<String>,
    counts: Vec<u64>,
    options: BarChartOptions,
}

impl BarChart {
    /// Chart the first `limit` word counts with default options
    pub fn from_counts(counts: &[WordCount], limit: usize) -> Self {
        let limited = &counts[..limit.min(counts.len())];
        Self {
            words: limited.iter().map(|wc| wc.word.clone()).collect(),
            counts: limited.iter().map(|wc| wc.count).collect(),
            options: BarChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BarChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of bars
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Render the chart as an SVG document
    pub fn to_svg(&self) -> Result<String> {
        let mut svg = String::new();
        self.draw(SVGBackend::with_string(
            &mut svg,
            (self.options.width, self.options.height),
        ))?;
        Ok(svg)
    }

    /// Render the chart and write it to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let svg = self.to_svg()?;
        fs::write(path, svg).map_err(|source| PlotError::FileSave {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), bars = self.len(), "wrote bar chart");
        Ok(())
    }

    fn draw(&self, backend: SVGBackend<'_>) -> Result<()> {
        let color = parse_color(&self.options.color)?;

        let drawing_area = backend.into_drawing_area();
        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        // One segment per word; an empty chart still gets a drawable x axis
        let segments = (self.len() as u32).max(1);
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        let y_top = (max_count + max_count / 10).max(1);

        let mut chart_context = ChartBuilder::on(&drawing_area)
            .caption(&self.options.title, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..segments).into_segmented(), 0u64..y_top)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        let word_label = |value: &SegmentValue<u32>| match value {
            SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => self
                .words
                .get(*index as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };

        let mut mesh = chart_context.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(self.len().max(1))
            .x_label_formatter(&word_label)
            .x_desc("Word")
            .y_desc("Counts")
            .label_style(("sans-serif", 15));
        mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Zero margin leaves no gap between neighbouring bars
        chart_context
            .draw_series(
                Histogram::vertical(&chart_context)
                    .style(color.filled())
                    .margin(0)
                    .data(
                        self.counts
                            .iter()
                            .enumerate()
                            .map(|(index, &count)| (index as u32, count)),
                    ),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_counts() -> Vec<WordCount> {
        vec![
            WordCount::new("the", 2452, 4.87),
            WordCount::new("and", 1467, 2.91),
            WordCount::new("of", 1324, 2.63),
            WordCount::new("to", 921, 1.83),
        ]
    }

    /// Rectangles filled with `hex` (an upper-case `#RRGGBB`)
    fn filled_rects(svg: &str, hex: &str) -> usize {
        svg.split("<rect")
            .skip(1)
            .filter(|rect| {
                rect.split("/>")
                    .next()
                    .unwrap_or_default()
                    .to_uppercase()
                    .contains(hex)
            })
            .count()
    }

    #[test]
    fn test_default_options() {
        let options = BarChartOptions::default();
        assert_eq!(options.color, "blue");
        assert_eq!(options.title, "Word Counts");
    }

    #[test]
    fn test_from_counts_applies_limit() {
        let chart = BarChart::from_counts(&sample_counts(), 2);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.words, vec!["the", "and"]);
        assert_eq!(chart.counts, vec![2452, 1467]);

        let chart = BarChart::from_counts(&sample_counts(), 50);
        assert_eq!(chart.len(), 4);
    }

    #[test]
    fn test_svg_contains_labels_and_bars() {
        let svg = BarChart::from_counts(&sample_counts(), 10).to_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Word Counts"));
        assert!(svg.contains("Counts"));
        assert!(svg.contains("Word"));
        assert_eq!(filled_rects(&svg, "#0000FF"), 4);
    }

    #[test]
    fn test_word_tick_labels() {
        let counts = vec![
            WordCount::new("quokka", 9, 60.0),
            WordCount::new("wombat", 6, 40.0),
        ];
        let svg = BarChart::from_counts(&counts, 10).to_svg().unwrap();
        assert!(svg.contains("quokka"));
        assert!(svg.contains("wombat"));
    }

    #[test]
    fn test_custom_options() {
        let chart = BarChart::from_counts(&sample_counts(), 1).with_options(BarChartOptions {
            color: "#ff8800".to_string(),
            title: "Isles of Wonder".to_string(),
            ..BarChartOptions::default()
        });
        let svg = chart.to_svg().unwrap();
        assert_eq!(filled_rects(&svg, "#FF8800"), 1);
        assert_eq!(filled_rects(&svg, "#0000FF"), 0);
        assert!(svg.contains("Isles of Wonder"));
    }

    #[test]
    fn test_image_size() {
        let chart = BarChart::from_counts(&sample_counts(), 4).with_options(BarChartOptions {
            width: 510,
            height: 320,
            ..BarChartOptions::default()
        });
        let svg = chart.to_svg().unwrap();
        assert!(svg.contains(r#"width="510""#));
        assert!(svg.contains(r#"height="320""#));
    }

    #[test]
    fn test_words_are_escaped() {
        let counts = vec![WordCount::new("<b>", 3, 100.0)];
        let svg = BarChart::from_counts(&counts, 10).to_svg().unwrap();
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_empty_chart_has_no_bars() {
        let chart = BarChart::from_counts(&[], 10);
        assert!(chart.is_empty());
        let svg = chart.to_svg().unwrap();
        assert!(svg.contains("Word Counts"));
        assert_eq!(filled_rects(&svg, "#0000FF"), 0);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("blue").unwrap(), BLUE);
        assert_eq!(parse_color(" Red ").unwrap(), RED);
        assert_eq!(parse_color("#ff8800").unwrap(), RGBColor(0xff, 0x88, 0x00));
        assert_eq!(parse_color("#006400").unwrap(), RGBColor(0, 100, 0));
    }

    #[test]
    fn test_parse_color_rejects_unknown() {
        for bad in ["", "chartreuse", "#fff", "#gg0000", "#ff00000"] {
            let err = parse_color(bad).unwrap_err();
            assert!(matches!(err, PlotError::InvalidColor(_)), "{bad}");
        }
    }

    #[test]
    fn test_unknown_color_fails_to_render() {
        let chart = BarChart::from_counts(&sample_counts(), 2).with_options(BarChartOptions {
            color: "chartreuse".to_string(),
            ..BarChartOptions::default()
        });
        assert!(matches!(chart.to_svg(), Err(PlotError::InvalidColor(_))));
    }

    #[test]
    fn test_save_writes_svg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("isles.svg");
        BarChart::from_counts(&sample_counts(), 3).save(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert_eq!(filled_rects(&written, "#0000FF"), 3);
    }

    #[test]
    fn test_save_to_missing_directory() {
        let err = BarChart::from_counts(&sample_counts(), 3)
            .save("/nonexistent/charts/isles.svg")
            .unwrap_err();
        assert!(matches!(err, PlotError::FileSave { .. }));
        assert!(err.to_string().contains("isles.svg"));
    }
}
