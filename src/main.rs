//! hexroute CLI entry point.
//!
//! Reads a whitespace-delimited command stream from stdin and prints one
//! response line per command to stdout. Diagnostics go to stderr, never to
//! the response channel.

use std::io;
use std::process;

use clap::Parser;

use hexroute::Session;

/// Interactive travel-cost engine over a hexagonal grid.
///
/// Commands arrive on stdin and responses leave on stdout; there are no
/// file arguments and no environment-driven configuration.
#[derive(Parser, Debug)]
#[command(
    name = "hexroute",
    about = "Interactive travel-cost engine over a hexagonal grid"
)]
struct Cli {}

fn main() {
    // Rejects stray arguments and serves --help; the engine itself takes
    // everything over stdin.
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter("hexroute=warn")
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut session = Session::new();
    if let Err(e) = session.run(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
