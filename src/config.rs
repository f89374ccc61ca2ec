//! Chart configuration file
//!
//! `plotcounts --config wordplot.toml` reads layout overrides for both
//! chart kinds. Every key is optional.
//!
//! # Example wordplot.toml
//!
//! ```toml
//! [ascii]
//! screenwidth = 100
//! symbol = "*"
//!
//! [bar_chart]
//! color = "#006400"
//! title = "Isles: Word Counts"
//! ```

use crate::ascii_chart::AsciiChartOptions;
use crate::bar_chart::{parse_color, BarChartOptions};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root of wordplot.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Terminal chart overrides
    #[serde(default)]
    pub ascii: AsciiSection,

    /// SVG chart layout
    #[serde(default)]
    pub bar_chart: BarChartOptions,
}

/// `[ascii]` table; unset keys fall back to the terminal defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AsciiSection {
    pub screenwidth: Option<usize>,
    pub gap: Option<usize>,
    pub truncate: Option<bool>,
    pub symbol: Option<String>,
}

impl AsciiSection {
    /// Options for the terminal chart
    ///
    /// Terminal charts measure bars from zero unless `truncate = true`.
    pub fn options(&self) -> AsciiChartOptions {
        let defaults = AsciiChartOptions::default();
        AsciiChartOptions {
            screenwidth: self.screenwidth.unwrap_or(defaults.screenwidth),
            gap: self.gap.unwrap_or(defaults.gap),
            truncate: self.truncate.unwrap_or(false),
            symbol: self.symbol.clone().unwrap_or(defaults.symbol),
        }
    }
}

impl PlotConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wordplot::config::PlotConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = PlotConfig::from_file("wordplot.toml")?;
    /// println!("Charts are {} columns wide", config.ascii.options().screenwidth);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlotConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that cannot be drawn
    pub fn validate(&self) -> Result<()> {
        let ascii = self.ascii.options();
        if ascii.screenwidth == 0 {
            bail!("ascii.screenwidth must be > 0");
        }
        if ascii.symbol.is_empty() {
            bail!("ascii.symbol must not be empty");
        }
        if self.bar_chart.width == 0 || self.bar_chart.height == 0 {
            bail!(
                "bar_chart size must be non-zero, got {}x{}",
                self.bar_chart.width,
                self.bar_chart.height
            );
        }
        if self.bar_chart.color.trim().is_empty() {
            bail!("bar_chart.color must not be empty");
        }
        parse_color(&self.bar_chart.color).context("Invalid bar_chart.color")?;
        Ok(())
    }
}
