use anyhow::Result;
use clap::Parser;
use tracing::debug;
use wordplot::cli::{init_tracing, TestZipfCli};
use wordplot::zipf::{ZipfRow, ZipfTable};

fn main() -> Result<()> {
    let args = TestZipfCli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let mut table = ZipfTable::new();
    for input_file in &args.data_files {
        let row = ZipfRow::from_file(input_file)?;
        debug!(book = %row.book, ratio = row.ratio(), "computed zipf ratio");
        table.add_row(row);
    }

    print!("{}", table.render(args.table_format()));
    Ok(())
}
