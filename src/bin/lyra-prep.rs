//! Preprocessing driver for lyra projects
//! Filters the project's sources, runs them through a C preprocessor and optionally runs the
//! result.
//!
//! Usage:
//!   lyra-prep `<input>` `<output>` `<compiler>` [`<interpreter>`] [-- `<args>`...]

use clap::{Arg, ArgAction, Command};
use lyra::lyra::config::Loader;
use lyra::lyra::preprocessing::{Driver, Invocation};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let matches = Command::new("lyra-prep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the C preprocessor over a lyra project")
        .arg(
            Arg::new("input")
                .help("Main file name, without the .rb extension")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file name, without the .rb extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("compiler")
                .help("Preprocessor provider, e.g. gcc or clang")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("interpreter")
                .help("Program that runs the result; the staging directory is removed afterwards")
                .index(4),
        )
        .arg(
            Arg::new("args")
                .help("Arguments passed to the interpreter")
                .num_args(0..)
                .index(5)
                .last(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Project directory")
                .default_value("."),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .short('x')
                .help("File name to leave out of staging (repeatable)")
                .action(ArgAction::Append),
        )
        .get_matches();

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let mut config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    if let Some(names) = matches.get_many::<String>("exclude") {
        config.staging.exclude.extend(names.cloned());
    }

    let required = |id: &str| -> String {
        matches
            .get_one::<String>(id)
            .cloned()
            .expect("positional arguments are required")
    };
    let invocation = Invocation {
        input: required("input"),
        output: required("output"),
        compiler: required("compiler"),
        interpreter: matches.get_one::<String>("interpreter").cloned(),
        args: matches
            .get_many::<String>("args")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    };

    let root = matches
        .get_one::<String>("root")
        .expect("root has a default value");
    match Driver::new(config, root).run(&invocation) {
        Ok(outcome) if outcome.kept => println!("{}", outcome.script.display()),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
