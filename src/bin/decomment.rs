//! Command-line interface for decomment
//! Reads a source file, strips its comments, and writes the result to a
//! file or stdout.
//!
//! Usage:
//!   decomment --input <file> [--output <file>] [--strip <all|block|line|first>]
//!             [--safe] [--preserve-newlines] [--format <strip|token-json|token-simple>]

use clap::{Arg, ArgAction, Command};
use decomment::processor::{process, OutputFormat};
use decomment::StripOptions;

fn main() {
    let matches = Command::new("decomment")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip line and block comments from source files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input file, read as UTF-8")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file (stdout when omitted)"),
        )
        .arg(
            Arg::new("strip")
                .long("strip")
                .short('s')
                .help("Strip method: 'all', 'block', 'line' or 'first'")
                .default_value("all"),
        )
        .arg(
            Arg::new("safe")
                .long("safe")
                .help("Keep protected comments (/*! and //!)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preserve-newlines")
                .long("preserve-newlines")
                .help("Replace stripped block comments with blank lines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'strip', 'token-json' or 'token-simple'")
                .default_value("strip"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").expect("input is required");
    let method = matches.get_one::<String>("strip").unwrap();
    let format_name = matches.get_one::<String>("format").unwrap();

    let options = match method.as_str() {
        "all" => StripOptions::all(),
        "block" => StripOptions::block_only(),
        "line" => StripOptions::line_only(),
        "first" => StripOptions::first_only(),
        other => {
            eprintln!("Unknown strip method '{}'", other);
            eprintln!("Available methods: all, block, line, first");
            std::process::exit(1);
        }
    }
    .safe(matches.get_flag("safe"))
    .preserve_newlines(matches.get_flag("preserve-newlines"));

    let format = OutputFormat::from_name(format_name).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let source = std::fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", input, e);
        std::process::exit(1);
    });

    let output = process(&source, &options, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &output) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
