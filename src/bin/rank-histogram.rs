//! Reads rank labels from stdin, one per line, and keeps a grouped
//! histogram of them up to date in the given file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use taxa_tools::{logging, FileSink, Reporter};

/// Tally taxonomic ranks from stdin into a bar chart.
#[derive(Debug, Parser)]
#[command(name = "rank-histogram", version, about)]
struct Args {
    /// File the report is rewritten to every 1000 lines
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    logging::init("warn");

    if let Err(e) = try_main(args) {
        let mut stderr = io::stderr();
        let _ = writeln!(&mut stderr, "error: {}", e);
        process::exit(1);
    }
}

fn try_main(args: Args) -> io::Result<()> {
    let stdin = io::stdin();
    let stdin = stdin.lock();

    let mut reporter = Reporter::new(FileSink::new(&args.output));
    reporter.run(stdin)?;
    Ok(())
}
