//! Reads tab-separated records from stdin and uploads them to OpenSearch
//! in bulk.

use std::io;
use std::process;

use clap::Parser;
use taxa_tools::bulk::{BulkError, BulkIndexer, HttpTransport, IndexerArgs, IndexerConfig};
use taxa_tools::logging;

fn main() {
    let args = IndexerArgs::parse();
    logging::init("warn");

    if let Err(e) = try_main(args) {
        let _ = e.write_diagnostic(&mut io::stderr());
        process::exit(1);
    }
}

fn try_main(args: IndexerArgs) -> Result<(), BulkError> {
    let config = IndexerConfig::try_from(args)?;
    let transport = HttpTransport::new(&config)?;

    let stdin = io::stdin();
    let stdin = stdin.lock();

    BulkIndexer::new(config, transport).run(stdin)?;
    Ok(())
}
