use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{debug, warn};
use wordplot::ascii_chart::{self, AsciiChartOptions};
use wordplot::bar_chart::BarChart;
use wordplot::cli::{init_tracing, PlotCountsCli};
use wordplot::config::PlotConfig;
use wordplot::counts::{load_word_counts, WordCount};

/// Print the terminal chart of the `limit` most frequent words
fn print_ascii_chart(counts: &[WordCount], limit: usize, options: &AsciiChartOptions) {
    for line in ascii_chart::plot_word_counts(counts, limit, options) {
        println!("{}", line);
    }
}

/// The bar chart is only rendered as SVG
fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn main() -> Result<()> {
    let args = PlotCountsCli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => PlotConfig::from_file(path)?,
        None => PlotConfig::default(),
    };
    let ascii_options = config.ascii.options();
    debug!(?config, "loaded chart configuration");

    let counts = load_word_counts(&args.input_file)?;

    if args.ascii_requested() {
        print_ascii_chart(&counts, args.limit, &ascii_options);
        return Ok(());
    }

    let chart = BarChart::from_counts(&counts, args.limit).with_options(config.bar_chart);

    // No window system to pop up, so --show draws on the terminal
    if args.show {
        print_ascii_chart(&counts, args.limit, &ascii_options);
    }

    if let Some(output) = &args.output_file {
        let output = Path::new(output);
        if is_svg_path(output) {
            chart.save(output)?;
        } else {
            warn!(
                path = %output.display(),
                "skipping output: only .svg output is supported"
            );
        }
    }

    Ok(())
}
