//! Command-line interface for codefold
//! This binary reports the fold points (indented regions) of whitespace-significant
//! source files, for consumption by block splitters and source reorganizers.
//!
//! Usage:
//!   codefold scan `<path>` [--format `<format>`]  - Report fold points for a file
//!   codefold tokens `<path>`                      - Dump the categorized token stream

use clap::{Arg, Command};
use codefold::fold::{default_registry, detect_folds, find_fold_points};

fn main() {
    let matches = Command::new("codefold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for reporting the indented-region fold points of source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Report fold points for a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the categorized token stream as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tokenizer")
                        .long("tokenizer")
                        .short('t')
                        .help("Tokenizer implementation to use")
                        .default_value("indent"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path").unwrap();
            let format = scan_matches.get_one::<String>("format").unwrap();
            handle_scan_command(path, format);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let tokenizer = tokens_matches.get_one::<String>("tokenizer").unwrap();
            handle_tokens_command(path, tokenizer);
        }
        _ => unreachable!(),
    }
}

/// Handle the scan command
fn handle_scan_command(path: &str, format: &str) {
    let source = read_source(path);
    let mut folds = match find_fold_points(&source) {
        Ok(folds) => folds,
        Err(err) => {
            eprintln!("Error: {}: {}", path, err);
            std::process::exit(1);
        }
    };
    // the detector returns an unordered collection; present it in line order
    folds.sort_by_key(|fp| (fp.start_row, fp.end_row, fp.depth));

    match format {
        "json" => match serde_json::to_string_pretty(&folds) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: failed to serialize fold points: {}", err);
                std::process::exit(1);
            }
        },
        "text" => {
            for fold in &folds {
                println!("{}..{} depth {}", fold.start_row, fold.end_row, fold.depth);
            }
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, tokenizer_name: &str) {
    let source = read_source(path);
    let tokenizer = match default_registry().get(tokenizer_name) {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut names = default_registry().names();
            names.sort_unstable();
            eprintln!("Available tokenizers: {}", names.join(", "));
            std::process::exit(1);
        }
    };
    let tokens = match tokenizer.tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("Error: {}: {}", path, err);
            std::process::exit(1);
        }
    };

    // sanity-check the stream before handing it to callers
    if let Err(err) = detect_folds(&tokens) {
        eprintln!("Warning: {}: {}", path, err);
    }

    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: failed to serialize tokens: {}", err);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read {}: {}", path, err);
            std::process::exit(1);
        }
    }
}
