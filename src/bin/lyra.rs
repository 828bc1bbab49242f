//! Command-line interface for lyra
//! Translates one lyra file into Ruby.
//!
//! Usage:
//!   lyra `<input>` `<output>`   - Translate `<input>` and write the result to `<output>`
//!
//! Set `RUST_LOG=lyra=debug` to trace the translation stages on stderr.

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let matches = Command::new("lyra")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate a lyra file into Ruby")
        .arg(
            Arg::new("input")
                .help("Path to the lyra source")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to write the translation to (created or overwritten)")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<String>("output")
        .expect("output is a required argument");

    if let Err(e) = lyra::translate_file(input, output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
