//! `vx`: inspect and check vx source files.

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use vxc::commands::{check_file, lex_file, parse_file};
use vxc::CliError;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();
    let trace = command == "parse" && args.iter().skip(2).any(|a| a == "--trace");
    vxc::init_tracing(trace.then_some("vx_parse=trace"));

    let result = match command {
        "lex" | "parse" | "check" => {
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: vx {command} <file.vx>");
                return ExitCode::FAILURE;
            };
            let path = Path::new(path);
            match command {
                "lex" => lex_file(path),
                "parse" => parse_file(path, trace),
                _ => check_file(path),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("vx {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
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
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &CliError) {
    eprintln!("error: {err}");
    let mut cause = err.source();
    while let Some(inner) = cause {
        eprintln!("  caused by: {inner}");
        cause = inner.source();
    }
}

fn print_usage() {
    println!("vx front end");
    println!();
    println!("Usage: vx <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.vx>            Tokenize and list tokens");
    println!("  parse <file.vx>          Parse and print the syntax tree");
    println!("  check <file.vx>          Parse and report errors only");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Parse options:");
    println!("  --trace                  Log every grammar rule (same as RUST_LOG=vx_parse=trace)");
    println!();
    println!("Logging is controlled with RUST_LOG, e.g. RUST_LOG=vx_parse=debug.");
}
