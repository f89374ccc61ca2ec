#![no_main]

use libfuzzer_sys::fuzz_target;
use wordplot::ascii_chart::{plot_word_counts, AsciiChartOptions};
use wordplot::counts::parse_word_counts;

fuzz_target!(|data: &[u8]| {
    // Data files are text; anything that parses must also chart without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(counts) = parse_word_counts(input) {
            let _ = plot_word_counts(&counts, 10, &AsciiChartOptions::default());
        }
    }
});
