use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing::info;
use wordplot::cli::{init_tracing, CountWordsCli};
use wordplot::counts::{count_words, save_word_counts};

fn main() -> Result<()> {
    let args = CountWordsCli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let text = fs::read_to_string(&args.input_file)
        .with_context(|| format!("Failed to read {}", args.input_file.display()))?;

    let counts = count_words(&text, args.min_length);
    info!(
        input = %args.input_file.display(),
        distinct_words = counts.len(),
        "counted words"
    );

    save_word_counts(&args.output_file, &counts)?;
    Ok(())
}
