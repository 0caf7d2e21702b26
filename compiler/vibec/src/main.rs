//! vibescript front-end CLI.

use std::process::ExitCode;

use vibec::commands::{check_file, explain_error, lex_file, parse_file};
use vibec::{init_tracing, CliError, CliOptions};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    let result = match command.as_str() {
        "lex" => CliOptions::parse(rest).and_then(|options| lex_file(&options)),
        "parse" => CliOptions::parse(rest).and_then(|options| parse_file(&options)),
        "check" => CliOptions::parse(rest).and_then(|options| check_file(&options)),
        "explain" | "--explain" => match rest.first() {
            Some(code) => explain_error(code),
            None => Err(CliError::MissingPath),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("vibec {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("vibescript front-end");
    println!();
    println!("Usage: vibec <command> [options] <file.vibe>");
    println!();
    println!("Commands:");
    println!("  lex <file>           Print the token stream");
    println!("  parse <file>         Print the syntax tree as an S-expression");
    println!("  check <file>         Report syntax errors (exit 1 if any)");
    println!("  explain <code>       Describe an error code (e.g. E1003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Nesting limit (default 256)");
    println!("  --fail-fast          Stop at the first error");
    println!("  --color=<when>       auto, always, never");
    println!();
    println!("Set VIBE_LOG (e.g. VIBE_LOG=vibe_parse=debug) to trace the front-end.");
}
